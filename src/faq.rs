//! FAQ exclusive accordion.
//!
//! Questions are native buttons linked to answers through `aria-controls`.
//! At most one question is open: opening one closes every other.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use crate::effect::{Aria, Effect, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqGroup {
    len: usize,
    open: Option<usize>,
}

impl FaqGroup {
    /// `open` is the question the markup already marks expanded, if any.
    /// Returns `None` for an empty group.
    #[must_use]
    pub fn new(len: usize, open: Option<usize>) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self { len, open: open.filter(|index| *index < len) })
    }

    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    /// Normalize the markup so exactly the seeded question reads as open.
    #[must_use]
    pub fn initial_effects(&self) -> Vec<Effect> {
        (0..self.len).flat_map(|index| Self::mark(index, self.open == Some(index))).collect()
    }

    /// Activate question `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.len {
            return Vec::new();
        }
        let opening = self.open != Some(index);
        let mut effects = Vec::with_capacity(2 * self.len);
        for other in (0..self.len).filter(|other| *other != index) {
            effects.extend(Self::mark(other, false));
        }
        effects.extend(Self::mark(index, opening));
        self.open = opening.then_some(index);
        effects
    }

    fn mark(index: usize, open: bool) -> [Effect; 2] {
        [
            Effect::SetAria { target: Target::Trigger(index), aria: Aria::Expanded, value: open },
            Effect::SetAria { target: Target::Panel(index), aria: Aria::Hidden, value: !open },
        ]
    }
}
