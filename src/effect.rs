//! Effects emitted by the disclosure state machines.
//!
//! State machines never touch the document. Every transition returns an
//! ordered list of [`Effect`]s addressed to widget-local [`Target`]s; the
//! controller resolves targets to nodes and applies them in order.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

use crate::consts::{
    ACCORDION_CLOSE_MS, ACCORDION_OPEN_MS, KEYFRAMES_FADE_IN_UP, KEYFRAMES_SLIDE_DOWN, KEYFRAMES_SLIDE_UP,
    REVEAL_FADE_MS, STAGGER_STEP_MS,
};

/// A node owned by a single widget, addressed relative to that widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The n-th item of a reveal group, in document order.
    Item(usize),
    /// The element whose subtree holds the reveal group's items.
    Container,
    /// The button created for a reveal group or accordion.
    Control,
    /// An accordion's content block.
    Section,
    /// The n-th FAQ question button.
    Trigger(usize),
    /// The answer panel controlled by the n-th FAQ question.
    Panel(usize),
}

/// Inline `display` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline value; the stylesheet decides.
    #[default]
    Default,
    None,
    Block,
}

impl Display {
    /// The inline CSS value, or `None` when the property should be removed.
    #[must_use]
    pub fn css(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::None => Some("none"),
            Self::Block => Some("block"),
        }
    }
}

/// ARIA state attribute toggled by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aria {
    Expanded,
    Hidden,
}

impl Aria {
    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Expanded => "aria-expanded",
            Self::Hidden => "aria-hidden",
        }
    }
}

/// Direction glyph shown on a toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Content is (or is about to be) hidden.
    Closed,
    /// Content is (or is about to be) shown.
    Open,
}

impl Glyph {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "▼",
            Self::Open => "▲",
        }
    }
}

/// Text label of a reveal group's control. Rendered through [`crate::config::Labels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLabel {
    /// "Show N more".
    RevealMore { hidden: usize },
    /// "Close".
    Collapse,
}

/// A CSS animation applied inline to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Animation {
    /// Staggered entrance for the `offset`-th revealed item.
    #[must_use]
    pub fn fade_in_up(offset: usize) -> Self {
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        Self {
            keyframes: KEYFRAMES_FADE_IN_UP,
            duration_ms: REVEAL_FADE_MS,
            delay_ms: offset.saturating_mul(STAGGER_STEP_MS),
        }
    }

    #[must_use]
    pub fn slide_down() -> Self {
        Self { keyframes: KEYFRAMES_SLIDE_DOWN, duration_ms: ACCORDION_OPEN_MS, delay_ms: 0 }
    }

    #[must_use]
    pub fn slide_up() -> Self {
        Self { keyframes: KEYFRAMES_SLIDE_UP, duration_ms: ACCORDION_CLOSE_MS, delay_ms: 0 }
    }

    /// The `animation` shorthand, e.g. `fadeInUp 500ms ease forwards`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("{} {}ms ease forwards", self.keyframes, self.duration_ms)
    }

    /// The `animation-delay` value.
    #[must_use]
    pub fn delay_css(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}

/// One document mutation (or scheduling request) produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Display { target: Target, display: Display },
    SetClass { target: Target, class: &'static str, on: bool },
    SetAria { target: Target, aria: Aria, value: bool },
    /// Apply an animation, or clear the inline one with `None`.
    Animate { target: Target, animation: Option<Animation> },
    SetLabel(ControlLabel),
    SetGlyph(Glyph),
    ScrollIntoView(Target),
    /// Ask the host to call back `on_timer(ticket)` after `delay_ms`.
    Schedule { delay_ms: u32, ticket: u64 },
}
