//! Accordion section state machine.
//!
//! A section collapses to its header. Opening shows the content immediately
//! and then animates it in; closing animates it out and hides it only when
//! the deferred action fires.
//!
//! RE-ENTRANCY
//! ===========
//! Every transition that schedules a deferred action issues a fresh ticket
//! and records it in the phase. [`AccordionSection::on_timer`] applies its
//! continuation only when the phase still carries that ticket, so a hide
//! scheduled before the user re-opened the section is discarded. Content is
//! therefore never hidden while the section reads as expanded.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use crate::consts::{ACCORDION_CLOSE_MS, ACCORDION_COLLAPSED_CLASS, ACCORDION_EXPANDED_CLASS, ACCORDION_OPEN_MS};
use crate::effect::{Animation, Aria, Display, Effect, Glyph, Target};

/// Disclosure phase of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collapsed,
    /// Visible, slide-down running.
    Expanding { ticket: u64 },
    Expanded,
    /// Still visible, slide-up running; hidden when `ticket` fires.
    Collapsing { ticket: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionSection {
    phase: Phase,
    next_ticket: u64,
}

impl AccordionSection {
    #[must_use]
    pub fn new(default_open: bool) -> Self {
        let phase = if default_open { Phase::Expanded } else { Phase::Collapsed };
        Self { phase, next_ticket: 0 }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the section reads as open to the user (including mid-animation).
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        matches!(self.phase, Phase::Expanding { .. } | Phase::Expanded)
    }

    /// Whether the content is currently displayed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Collapsed
    }

    #[must_use]
    pub fn initial_effects(&self) -> Vec<Effect> {
        if self.is_visible() {
            vec![
                Effect::SetClass { target: Target::Section, class: ACCORDION_EXPANDED_CLASS, on: true },
                Effect::SetGlyph(Glyph::Open),
                Effect::SetAria { target: Target::Control, aria: Aria::Expanded, value: true },
            ]
        } else {
            vec![
                Effect::Display { target: Target::Section, display: Display::None },
                Effect::SetClass { target: Target::Section, class: ACCORDION_COLLAPSED_CLASS, on: true },
                Effect::SetGlyph(Glyph::Closed),
                Effect::SetAria { target: Target::Control, aria: Aria::Expanded, value: false },
            ]
        }
    }

    /// Header activation. Reads the current phase; a pending animation in the
    /// opposite direction is superseded.
    pub fn toggle(&mut self) -> Vec<Effect> {
        match self.phase {
            Phase::Collapsed | Phase::Collapsing { .. } => self.expand(),
            Phase::Expanded | Phase::Expanding { .. } => self.collapse(),
        }
    }

    /// Deferred continuation. Stale tickets yield no effects.
    pub fn on_timer(&mut self, ticket: u64) -> Vec<Effect> {
        match self.phase {
            Phase::Collapsing { ticket: pending } if pending == ticket => {
                self.phase = Phase::Collapsed;
                vec![
                    Effect::Display { target: Target::Section, display: Display::None },
                    Effect::SetClass { target: Target::Section, class: ACCORDION_EXPANDED_CLASS, on: false },
                    Effect::SetClass { target: Target::Section, class: ACCORDION_COLLAPSED_CLASS, on: true },
                    Effect::Animate { target: Target::Section, animation: None },
                ]
            }
            Phase::Expanding { ticket: pending } if pending == ticket => {
                self.phase = Phase::Expanded;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn expand(&mut self) -> Vec<Effect> {
        let ticket = self.issue_ticket();
        self.phase = Phase::Expanding { ticket };
        vec![
            Effect::Display { target: Target::Section, display: Display::Block },
            Effect::SetClass { target: Target::Section, class: ACCORDION_COLLAPSED_CLASS, on: false },
            Effect::SetClass { target: Target::Section, class: ACCORDION_EXPANDED_CLASS, on: true },
            Effect::SetGlyph(Glyph::Open),
            Effect::SetAria { target: Target::Control, aria: Aria::Expanded, value: true },
            Effect::Animate { target: Target::Section, animation: Some(Animation::slide_down()) },
            Effect::Schedule { delay_ms: ACCORDION_OPEN_MS, ticket },
        ]
    }

    fn collapse(&mut self) -> Vec<Effect> {
        let ticket = self.issue_ticket();
        self.phase = Phase::Collapsing { ticket };
        vec![
            Effect::Animate { target: Target::Section, animation: Some(Animation::slide_up()) },
            Effect::SetGlyph(Glyph::Closed),
            Effect::SetAria { target: Target::Control, aria: Aria::Expanded, value: false },
            Effect::Schedule { delay_ms: ACCORDION_CLOSE_MS, ticket },
        ]
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }
}
