use super::*;

fn hidden_items(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Display { target: Target::Item(index), display: Display::None } => Some(*index),
            _ => None,
        })
        .collect()
}

fn shown_items(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Display { target: Target::Item(index), display: Display::Default } => Some(*index),
            _ => None,
        })
        .collect()
}

// =============================================================
// Setup
// =============================================================

#[test]
fn no_group_when_items_fit() {
    assert!(RevealGroup::new(2, 3).is_none());
    assert!(RevealGroup::new(3, 3).is_none());
    assert!(RevealGroup::new(0, 0).is_none());
}

#[test]
fn zero_visible_hides_everything() {
    let group = RevealGroup::new(2, 0).expect("group");
    assert_eq!(group.hidden_count(), 2);
    assert_eq!(hidden_items(&group.initial_effects()), vec![0, 1]);
}

#[test]
fn initial_effects_hide_tail_and_label_count() {
    let group = RevealGroup::new(5, 3).expect("group");
    let effects = group.initial_effects();

    assert_eq!(hidden_items(&effects), vec![3, 4]);
    assert!(effects.contains(&Effect::SetLabel(ControlLabel::RevealMore { hidden: 2 })));
    assert!(effects.contains(&Effect::SetGlyph(Glyph::Closed)));
    assert!(!group.is_expanded());
    assert!(group.is_item_visible(2));
    assert!(!group.is_item_visible(3));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn expand_shows_tail_with_staggered_entrance() {
    let mut group = RevealGroup::new(5, 3).expect("group");
    let effects = group.toggle();

    assert!(group.is_expanded());
    assert_eq!(shown_items(&effects), vec![3, 4]);
    assert!(effects.contains(&Effect::Animate { target: Target::Item(3), animation: Some(Animation::fade_in_up(0)) }));
    assert!(effects.contains(&Effect::Animate { target: Target::Item(4), animation: Some(Animation::fade_in_up(1)) }));
    assert!(effects.contains(&Effect::SetLabel(ControlLabel::Collapse)));
    assert!(effects.contains(&Effect::SetGlyph(Glyph::Open)));
    assert!(!effects.iter().any(|e| matches!(e, Effect::ScrollIntoView(_))));
}

#[test]
fn collapse_rehides_and_scrolls_container_into_view() {
    let mut group = RevealGroup::new(5, 3).expect("group");
    group.toggle();
    let effects = group.toggle();

    assert!(!group.is_expanded());
    assert_eq!(hidden_items(&effects), vec![3, 4]);
    assert!(effects.contains(&Effect::SetLabel(ControlLabel::RevealMore { hidden: 2 })));
    assert_eq!(effects.last(), Some(&Effect::ScrollIntoView(Target::Container)));
}

#[test]
fn round_trip_restores_initial_effects() {
    let mut group = RevealGroup::new(6, 2).expect("group");
    let initial = group.initial_effects();
    group.toggle();
    let collapsed = group.toggle();

    let without_scroll = collapsed
        .into_iter()
        .filter(|e| !matches!(e, Effect::ScrollIntoView(_)))
        .collect::<Vec<_>>();
    assert_eq!(without_scroll, initial);
}

#[test]
fn visible_prefix_is_never_touched() {
    let mut group = RevealGroup::new(4, 2).expect("group");
    let mut all = group.initial_effects();
    all.extend(group.toggle());
    all.extend(group.toggle());

    let touched_prefix = all.iter().any(|effect| {
        matches!(
            effect,
            Effect::Display { target: Target::Item(0 | 1), .. }
                | Effect::SetClass { target: Target::Item(0 | 1), .. }
                | Effect::Animate { target: Target::Item(0 | 1), .. }
        )
    });
    assert!(!touched_prefix);
}
