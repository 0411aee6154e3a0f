use super::*;

fn scheduled_ticket(effects: &[Effect]) -> Option<(u32, u64)> {
    effects.iter().find_map(|effect| match effect {
        Effect::Schedule { delay_ms, ticket } => Some((*delay_ms, *ticket)),
        _ => None,
    })
}

#[test]
fn default_closed_starts_hidden_with_closed_glyph() {
    let section = AccordionSection::new(false);
    let effects = section.initial_effects();

    assert_eq!(section.phase(), Phase::Collapsed);
    assert!(!section.is_visible());
    assert!(effects.contains(&Effect::Display { target: Target::Section, display: Display::None }));
    assert!(effects.contains(&Effect::SetGlyph(Glyph::Closed)));
}

#[test]
fn default_open_starts_visible_with_open_glyph() {
    let section = AccordionSection::new(true);
    let effects = section.initial_effects();

    assert_eq!(section.phase(), Phase::Expanded);
    assert!(effects.contains(&Effect::SetGlyph(Glyph::Open)));
    assert!(!effects.iter().any(|e| matches!(e, Effect::Display { .. })));
}

#[test]
fn expand_shows_before_animating() {
    let mut section = AccordionSection::new(false);
    let effects = section.toggle();

    let show = effects
        .iter()
        .position(|e| *e == Effect::Display { target: Target::Section, display: Display::Block })
        .expect("show effect");
    let animate = effects
        .iter()
        .position(|e| matches!(e, Effect::Animate { animation: Some(_), .. }))
        .expect("animate effect");
    assert!(show < animate);
    assert!(section.is_expanded());
    assert!(matches!(section.phase(), Phase::Expanding { .. }));
}

#[test]
fn expanding_settles_after_open_duration() {
    let mut section = AccordionSection::new(false);
    let (delay, ticket) = scheduled_ticket(&section.toggle()).expect("schedule");

    assert_eq!(delay, ACCORDION_OPEN_MS);
    assert!(section.on_timer(ticket).is_empty());
    assert_eq!(section.phase(), Phase::Expanded);
}

#[test]
fn collapse_defers_hide_until_timer() {
    let mut section = AccordionSection::new(true);
    let effects = section.toggle();
    let (delay, ticket) = scheduled_ticket(&effects).expect("schedule");

    assert_eq!(delay, ACCORDION_CLOSE_MS);
    assert!(!effects.iter().any(|e| matches!(e, Effect::Display { display: Display::None, .. })));
    assert!(section.is_visible());
    assert!(!section.is_expanded());

    let hide = section.on_timer(ticket);
    assert!(hide.contains(&Effect::Display { target: Target::Section, display: Display::None }));
    assert_eq!(section.phase(), Phase::Collapsed);
}

#[test]
fn reopen_during_collapse_discards_stale_hide() {
    let mut section = AccordionSection::new(true);
    let (_, stale) = scheduled_ticket(&section.toggle()).expect("collapse schedule");
    let (_, fresh) = scheduled_ticket(&section.toggle()).expect("expand schedule");

    assert_ne!(stale, fresh);
    assert!(section.on_timer(stale).is_empty());
    assert!(section.is_visible());
    assert!(section.is_expanded());

    section.on_timer(fresh);
    assert_eq!(section.phase(), Phase::Expanded);
}

#[test]
fn close_during_expand_then_late_settle_is_ignored() {
    let mut section = AccordionSection::new(false);
    let (_, open_ticket) = scheduled_ticket(&section.toggle()).expect("expand schedule");
    let (_, close_ticket) = scheduled_ticket(&section.toggle()).expect("collapse schedule");

    assert!(section.on_timer(open_ticket).is_empty());
    assert!(matches!(section.phase(), Phase::Collapsing { .. }));

    section.on_timer(close_ticket);
    assert_eq!(section.phase(), Phase::Collapsed);
}

#[test]
fn never_hidden_while_expanded_under_rapid_toggles() {
    let mut section = AccordionSection::new(false);
    let mut tickets = Vec::new();
    for _ in 0..7 {
        if let Some((_, ticket)) = scheduled_ticket(&section.toggle()) {
            tickets.push(ticket);
        }
    }
    // Fire every deferred action in scheduling order.
    for ticket in tickets {
        section.on_timer(ticket);
        if section.is_expanded() {
            assert!(section.is_visible());
        }
    }
    // Seven toggles from closed end open.
    assert_eq!(section.phase(), Phase::Expanded);
}
