//! Shared timing, class-name and glyph constants.
//!
//! Durations here are authoritative: deferred actions are scheduled from
//! them and the inline `animation` shorthand is rendered from them, so the
//! stylesheet keyframes never carry their own timing.

// ── Timing ──────────────────────────────────────────────────────

/// Per-item delay between successive reveal entrances.
pub const STAGGER_STEP_MS: u32 = 100;

/// Duration of the `fadeInUp` entrance for revealed list items.
pub const REVEAL_FADE_MS: u32 = 500;

/// Duration of the accordion slide-down; the section settles to expanded after it.
pub const ACCORDION_OPEN_MS: u32 = 400;

/// Duration of the accordion slide-up; the section is hidden after it.
pub const ACCORDION_CLOSE_MS: u32 = 300;

// ── Keyframes (defined in `assets/disclosure.css`) ──────────────

pub const KEYFRAMES_FADE_IN_UP: &str = "fadeInUp";
pub const KEYFRAMES_SLIDE_DOWN: &str = "accordionSlideDown";
pub const KEYFRAMES_SLIDE_UP: &str = "accordionSlideUp";

// ── Partial-reveal markup ───────────────────────────────────────

pub const HIDDEN_ITEM_CLASS: &str = "hidden-item";
pub const TOGGLE_CONTAINER_CLASS: &str = "toggle-btn-container";
pub const TOGGLE_BUTTON_CLASS: &str = "btn btn--outline btn--large toggle-btn";
pub const TOGGLE_TEXT_CLASS: &str = "toggle-btn__text";
pub const TOGGLE_ICON_CLASS: &str = "toggle-btn__icon";

// ── Accordion markup ────────────────────────────────────────────

pub const ACCORDION_WRAPPER_CLASS: &str = "accordion-section";
pub const ACCORDION_HEADER_CLASS: &str = "accordion-header";
pub const ACCORDION_HEADER_CONTENT_CLASS: &str = "accordion-header__content";
pub const ACCORDION_HEADER_ICON_CLASS: &str = "accordion-header__icon";
pub const ACCORDION_HEADER_TITLE_CLASS: &str = "accordion-header__title";
pub const ACCORDION_TOGGLE_CLASS: &str = "accordion-toggle";
pub const ACCORDION_TOGGLE_ICON_CLASS: &str = "accordion-toggle__icon";
pub const ACCORDION_COLLAPSED_CLASS: &str = "accordion-collapsed";
pub const ACCORDION_EXPANDED_CLASS: &str = "accordion-expanded";

// ── FAQ markup ──────────────────────────────────────────────────

pub const FAQ_QUESTION_CLASS: &str = "faq-item__question";

// ── Configuration ───────────────────────────────────────────────

/// Id of the optional in-page element holding a JSON configuration override.
pub const CONFIG_ELEMENT_ID: &str = "disclosure-config";
