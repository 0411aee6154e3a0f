//! Partial-reveal state machine.
//!
//! A group shows its first `initial_visible` items and hides the rest behind
//! a single toggle. Two states, `collapsed` (initial) and `expanded`; every
//! activation flips between them. Item indices are document order.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::HIDDEN_ITEM_CLASS;
use crate::effect::{Animation, Aria, ControlLabel, Display, Effect, Glyph, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealGroup {
    item_count: usize,
    initial_visible: usize,
    expanded: bool,
}

impl RevealGroup {
    /// Build a collapsed group, or `None` when there is nothing to hide.
    #[must_use]
    pub fn new(item_count: usize, initial_visible: usize) -> Option<Self> {
        if item_count <= initial_visible {
            return None;
        }
        Some(Self { item_count, initial_visible, expanded: false })
    }

    /// Number of items hidden while collapsed. Constant for the group's lifetime.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.item_count - self.initial_visible
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the item at `index` is currently shown.
    #[must_use]
    pub fn is_item_visible(&self, index: usize) -> bool {
        index < self.initial_visible || self.expanded
    }

    /// Effects that bring freshly mounted markup into the collapsed state.
    #[must_use]
    pub fn initial_effects(&self) -> Vec<Effect> {
        let mut effects = self.hide_tail();
        effects.push(Effect::SetLabel(ControlLabel::RevealMore { hidden: self.hidden_count() }));
        effects.push(Effect::SetGlyph(Glyph::Closed));
        effects.push(Effect::SetAria { target: Target::Control, aria: Aria::Expanded, value: false });
        effects
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.expanded = !self.expanded;
        if self.expanded { self.expand_effects() } else { self.collapse_effects() }
    }

    fn expand_effects(&self) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(3 * self.hidden_count() + 3);
        for index in self.initial_visible..self.item_count {
            let target = Target::Item(index);
            effects.push(Effect::Display { target, display: Display::Default });
            effects.push(Effect::SetClass { target, class: HIDDEN_ITEM_CLASS, on: false });
            effects.push(Effect::Animate {
                target,
                animation: Some(Animation::fade_in_up(index - self.initial_visible)),
            });
        }
        effects.push(Effect::SetLabel(ControlLabel::Collapse));
        effects.push(Effect::SetGlyph(Glyph::Open));
        effects.push(Effect::SetAria { target: Target::Control, aria: Aria::Expanded, value: true });
        effects
    }

    fn collapse_effects(&self) -> Vec<Effect> {
        let mut effects = self.hide_tail();
        effects.push(Effect::SetLabel(ControlLabel::RevealMore { hidden: self.hidden_count() }));
        effects.push(Effect::SetGlyph(Glyph::Closed));
        effects.push(Effect::SetAria { target: Target::Control, aria: Aria::Expanded, value: false });
        // Collapsing can leave the viewport below content that no longer exists.
        effects.push(Effect::ScrollIntoView(Target::Container));
        effects
    }

    fn hide_tail(&self) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(3 * self.hidden_count() + 4);
        for index in self.initial_visible..self.item_count {
            let target = Target::Item(index);
            effects.push(Effect::Display { target, display: Display::None });
            effects.push(Effect::SetClass { target, class: HIDDEN_ITEM_CLASS, on: true });
            effects.push(Effect::Animate { target, animation: None });
        }
        effects
    }
}
