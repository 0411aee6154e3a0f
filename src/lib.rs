//! Section disclosure controller for the marketing site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It turns
//! static content blocks into disclosure widgets: partial-reveal lists that
//! show the first few items behind a "show more" button, accordion sections
//! that collapse to a synthesized header, and the exclusive FAQ accordion.
//! All state machines are browser-free and return [`effect::Effect`]s; the
//! `hydrate` feature adds the `web-sys` document and the start entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Mounts widgets from config and applies their effects |
//! | [`reveal`] | Partial-reveal state machine |
//! | [`accordion`] | Accordion state machine with ticket-guarded deferred hide |
//! | [`faq`] | One-open-at-a-time FAQ state machine |
//! | [`effect`] | Effect, target and animation types |
//! | [`config`] | Declarative descriptor table and labels |
//! | [`dom`] | `Document` trait the controller drives |
//! | [`consts`] | Durations, class names and ids |
//! | [`error`] | `DisclosureError` |
//! | `web` | Browser `Document`, listeners and timers (`hydrate` only) |

pub mod accordion;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dom;
pub mod effect;
pub mod error;
pub mod faq;
mod mount;
pub mod reveal;
#[cfg(feature = "hydrate")]
pub mod web;

/// Stylesheet for the synthesized controls and the animation keyframes.
/// Ship it with the page; it is never injected at runtime.
pub const STYLESHEET: &str = include_str!("../assets/disclosure.css");
