use super::*;

#[test]
fn fade_in_up_staggers_by_offset() {
    assert_eq!(Animation::fade_in_up(0).delay_ms, 0);
    assert_eq!(Animation::fade_in_up(1).delay_ms, STAGGER_STEP_MS);
    assert_eq!(Animation::fade_in_up(4).delay_ms, 4 * STAGGER_STEP_MS);
}

#[test]
fn animation_shorthand_carries_duration_from_consts() {
    assert_eq!(Animation::slide_up().css(), format!("accordionSlideUp {ACCORDION_CLOSE_MS}ms ease forwards"));
    assert_eq!(Animation::slide_down().css(), format!("accordionSlideDown {ACCORDION_OPEN_MS}ms ease forwards"));
    assert_eq!(Animation::fade_in_up(2).delay_css(), "200ms");
}

#[test]
fn stylesheet_defines_every_referenced_keyframe() {
    for animation in [Animation::fade_in_up(0), Animation::slide_down(), Animation::slide_up()] {
        let rule = format!("@keyframes {}", animation.keyframes);
        assert!(crate::STYLESHEET.contains(&rule), "missing {rule}");
    }
}

#[test]
fn display_css_values() {
    assert_eq!(Display::Default.css(), None);
    assert_eq!(Display::None.css(), Some("none"));
    assert_eq!(Display::Block.css(), Some("block"));
}

#[test]
fn glyphs_and_aria_names() {
    assert_eq!(Glyph::Closed.as_str(), "▼");
    assert_eq!(Glyph::Open.as_str(), "▲");
    assert_eq!(Aria::Expanded.attribute(), "aria-expanded");
    assert_eq!(Aria::Hidden.attribute(), "aria-hidden");
}
