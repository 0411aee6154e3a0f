//! Disclosure controller: mounts widgets from the descriptor table and
//! applies their effects to a [`Document`].
//!
//! DESIGN
//! ======
//! All three disclosure patterns share one pipeline. A mount builder
//! synthesizes markup and returns a [`Widget`] plus the [`Nodes`] its
//! effect targets resolve to; the widget's state machine then only ever
//! speaks in [`Effect`]s, and a single `apply` routine turns those into
//! document calls. Deferred actions are returned to the host as
//! [`Scheduled`] entries and come back through [`DisclosureController::fire`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::accordion::AccordionSection;
use crate::config::{Descriptor, DisclosureConfig, Labels};
use crate::dom::Document;
use crate::effect::{Effect, Target};
use crate::error::DisclosureError;
use crate::faq::FaqGroup;
use crate::mount;
use crate::reveal::RevealGroup;

// =============================================================================
// TYPES
// =============================================================================

/// Index of a mounted widget, stable for the page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub usize);

/// Identifies one deferred action: the widget and the ticket it was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId {
    pub widget: WidgetId,
    pub ticket: u64,
}

/// A deferred action the host must run via [`DisclosureController::fire`] after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub timer: TimerId,
}

/// A click target the host must wire to [`DisclosureController::activate`].
#[derive(Debug, Clone)]
pub struct Activation<N> {
    pub node: N,
    pub widget: WidgetId,
    /// Which trigger of the widget this is (FAQ question index; `0` otherwise).
    pub trigger: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Reveal(RevealGroup),
    Accordion(AccordionSection),
    Faq(FaqGroup),
}

impl Widget {
    fn initial_effects(&self) -> Vec<Effect> {
        match self {
            Self::Reveal(group) => group.initial_effects(),
            Self::Accordion(section) => section.initial_effects(),
            Self::Faq(group) => group.initial_effects(),
        }
    }

    fn activate(&mut self, trigger: usize) -> Vec<Effect> {
        match self {
            Self::Reveal(group) => group.toggle(),
            Self::Accordion(section) => section.toggle(),
            Self::Faq(group) => group.toggle(trigger),
        }
    }

    fn on_timer(&mut self, ticket: u64) -> Vec<Effect> {
        match self {
            Self::Accordion(section) => section.on_timer(ticket),
            Self::Reveal(_) | Self::Faq(_) => Vec::new(),
        }
    }
}

/// Nodes a widget's [`Target`]s resolve to.
#[derive(Debug, Clone)]
pub(crate) struct Nodes<N> {
    pub container: Option<N>,
    pub items: Vec<N>,
    pub section: Option<N>,
    pub control: Option<N>,
    pub label: Option<N>,
    pub glyph: Option<N>,
    pub triggers: Vec<N>,
    pub panels: Vec<Option<N>>,
}

impl<N> Default for Nodes<N> {
    fn default() -> Self {
        Self {
            container: None,
            items: Vec::new(),
            section: None,
            control: None,
            label: None,
            glyph: None,
            triggers: Vec::new(),
            panels: Vec::new(),
        }
    }
}

impl<N> Nodes<N> {
    fn resolve(&self, target: Target) -> Option<&N> {
        match target {
            Target::Item(index) => self.items.get(index),
            Target::Container => self.container.as_ref(),
            Target::Control => self.control.as_ref(),
            Target::Section => self.section.as_ref(),
            Target::Trigger(index) => self.triggers.get(index),
            Target::Panel(index) => self.panels.get(index).and_then(Option::as_ref),
        }
    }
}

struct Binding<N> {
    widget: Widget,
    nodes: Nodes<N>,
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct DisclosureController<D: Document> {
    doc: D,
    labels: Labels,
    bindings: Vec<Binding<D::Node>>,
}

impl<D: Document> DisclosureController<D> {
    /// Mount every descriptor in table order.
    ///
    /// Descriptors whose markup is absent are skipped silently; a descriptor
    /// whose mount hits a DOM failure is logged and skipped. Returns the
    /// controller and the click targets the host must wire up.
    pub fn setup(doc: D, config: &DisclosureConfig) -> (Self, Vec<Activation<D::Node>>) {
        let mut controller = Self { doc, labels: config.labels.clone(), bindings: Vec::new() };
        let mut activations = Vec::new();

        for descriptor in &config.descriptors {
            let mounted = match descriptor {
                Descriptor::Reveal(reveal) => mount::reveal(&mut controller.doc, reveal),
                Descriptor::Accordion(accordion) => mount::accordion(&mut controller.doc, accordion, &controller.labels),
                Descriptor::Faq(faq) => mount::faq(&mut controller.doc, faq),
            };
            let mounted = match mounted {
                Ok(Some(mounted)) => mounted,
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("disclosure: skipping {}: {err}", descriptor.target());
                    continue;
                }
            };

            let id = WidgetId(controller.bindings.len());
            let effects = mounted.widget.initial_effects();
            apply(&mut controller.doc, &controller.labels, &mounted.nodes, id, &effects);
            activations.extend(
                mounted
                    .listeners
                    .into_iter()
                    .enumerate()
                    .map(|(trigger, node)| Activation { node, widget: id, trigger }),
            );
            controller.bindings.push(Binding { widget: mounted.widget, nodes: mounted.nodes });
        }

        log::info!(
            "disclosure: mounted {} of {} descriptors",
            controller.bindings.len(),
            config.descriptors.len()
        );
        (controller, activations)
    }

    /// Handle a click on `trigger` of `widget`.
    ///
    /// # Errors
    ///
    /// [`DisclosureError::UnknownWidget`] for an id this controller never
    /// issued. DOM failures while applying the transition are logged and do
    /// not stop the remaining effects.
    pub fn activate(&mut self, widget: WidgetId, trigger: usize) -> Result<Vec<Scheduled>, DisclosureError> {
        let binding = self.bindings.get_mut(widget.0).ok_or(DisclosureError::UnknownWidget(widget))?;
        let effects = binding.widget.activate(trigger);
        Ok(apply(&mut self.doc, &self.labels, &binding.nodes, widget, &effects))
    }

    /// Run a deferred action. Stale timers are a no-op.
    ///
    /// # Errors
    ///
    /// Same as [`DisclosureController::activate`].
    pub fn fire(&mut self, timer: TimerId) -> Result<Vec<Scheduled>, DisclosureError> {
        let binding = self
            .bindings
            .get_mut(timer.widget.0)
            .ok_or(DisclosureError::UnknownWidget(timer.widget))?;
        let effects = binding.widget.on_timer(timer.ticket);
        Ok(apply(&mut self.doc, &self.labels, &binding.nodes, timer.widget, &effects))
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.doc
    }

    #[must_use]
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.bindings.get(id.0).map(|binding| &binding.widget)
    }

    /// Number of mounted widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Apply `effects` in order and return the deferred actions they request.
///
/// A failed DOM effect is logged and the rest still run, so a `Schedule`
/// after it always reaches the host and the widget's phase can settle.
fn apply<D: Document>(
    doc: &mut D,
    labels: &Labels,
    nodes: &Nodes<D::Node>,
    widget: WidgetId,
    effects: &[Effect],
) -> Vec<Scheduled> {
    let mut scheduled = Vec::new();
    for effect in effects {
        if let Effect::Schedule { delay_ms, ticket } = *effect {
            scheduled.push(Scheduled { delay_ms, timer: TimerId { widget, ticket } });
        } else if let Err(err) = apply_one(doc, labels, nodes, effect) {
            log::warn!("disclosure: widget {}: {effect:?} failed: {err}", widget.0);
        }
    }
    scheduled
}

fn apply_one<D: Document>(
    doc: &mut D,
    labels: &Labels,
    nodes: &Nodes<D::Node>,
    effect: &Effect,
) -> Result<(), DisclosureError> {
    match *effect {
        Effect::Display { target, display } => {
            if let Some(node) = nodes.resolve(target) {
                doc.set_display(node, display)?;
            }
        }
        Effect::SetClass { target, class, on } => {
            if let Some(node) = nodes.resolve(target) {
                doc.set_class(node, class, on)?;
            }
        }
        Effect::SetAria { target, aria, value } => {
            if let Some(node) = nodes.resolve(target) {
                doc.set_attribute(node, aria.attribute(), if value { "true" } else { "false" })?;
            }
        }
        Effect::Animate { target, animation } => {
            if let Some(node) = nodes.resolve(target) {
                doc.set_animation(node, animation.as_ref())?;
            }
        }
        Effect::SetLabel(label) => {
            if let Some(node) = &nodes.label {
                doc.set_text(node, &labels.render(label));
            }
        }
        Effect::SetGlyph(glyph) => {
            if let Some(node) = &nodes.glyph {
                doc.set_text(node, glyph.as_str());
            }
        }
        Effect::ScrollIntoView(target) => {
            if let Some(node) = nodes.resolve(target) {
                doc.scroll_into_view(node);
            }
        }
        Effect::Schedule { .. } => {}
    }
    Ok(())
}
