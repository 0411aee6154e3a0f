//! Browser bindings: `web-sys` document, click listeners, deferred actions.
//!
//! The controller is shared as `Rc<RefCell<_>>` between every click
//! listener and every pending timeout. Listeners live for the page, so
//! their closures are leaked with `forget`. Timeouts are never cancelled;
//! stale ones are discarded by the accordion's ticket check.
//!
//! Only compiled with the `hydrate` feature.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Element, HtmlCollection, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config::DisclosureConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::{Activation, DisclosureController, Scheduled};
use crate::dom::Document;
use crate::effect::{Animation, Display};
use crate::error::DisclosureError;

pub type SharedController = Rc<RefCell<DisclosureController<WebDocument>>>;

// =============================================================================
// DOCUMENT
// =============================================================================

pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

fn dom_err(value: JsValue) -> DisclosureError {
    DisclosureError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn collect(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length()).filter_map(|index| collection.item(index)).collect()
}

fn inline_style(node: &Element) -> Result<CssStyleDeclaration, DisclosureError> {
    node.dyn_ref::<HtmlElement>()
        .map(HtmlElement::style)
        .ok_or_else(|| DisclosureError::Dom(format!("<{}> has no inline style", node.tag_name())))
}

impl Document for WebDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, root: Option<&Element>, class: &str) -> Vec<Element> {
        match root {
            Some(root) => collect(&root.get_elements_by_class_name(class)),
            None => collect(&self.document.get_elements_by_class_name(class)),
        }
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn create_element(&mut self, tag: &str, class: &str) -> Result<Element, DisclosureError> {
        let element = self.document.create_element(tag).map_err(dom_err)?;
        element.set_class_name(class);
        Ok(element)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), DisclosureError> {
        parent.append_child(child).map_err(dom_err)?;
        Ok(())
    }

    fn insert_before(&mut self, parent: &Element, child: &Element, reference: &Element) -> Result<(), DisclosureError> {
        parent.insert_before(child, Some(reference)).map_err(dom_err)?;
        Ok(())
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<(), DisclosureError> {
        node.set_attribute(name, value).map_err(dom_err)
    }

    fn set_class(&mut self, node: &Element, class: &str, on: bool) -> Result<(), DisclosureError> {
        node.class_list().toggle_with_force(class, on).map_err(dom_err)?;
        Ok(())
    }

    fn set_display(&mut self, node: &Element, display: Display) -> Result<(), DisclosureError> {
        let style = inline_style(node)?;
        match display.css() {
            Some(value) => style.set_property("display", value).map_err(dom_err),
            None => {
                style.remove_property("display").map_err(dom_err)?;
                Ok(())
            }
        }
    }

    fn set_animation(&mut self, node: &Element, animation: Option<&Animation>) -> Result<(), DisclosureError> {
        let style = inline_style(node)?;
        match animation {
            Some(animation) => {
                style.set_property("animation", &animation.css()).map_err(dom_err)?;
                style.set_property("animation-delay", &animation.delay_css()).map_err(dom_err)
            }
            None => {
                style.remove_property("animation").map_err(dom_err)?;
                style.remove_property("animation-delay").map_err(dom_err)?;
                Ok(())
            }
        }
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// =============================================================================
// RUNTIME
// =============================================================================

/// Read the in-page JSON override, falling back to the built-in table.
fn read_config(document: &web_sys::Document) -> DisclosureConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return DisclosureConfig::site();
    };
    match DisclosureConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("#{CONFIG_ELEMENT_ID}: {err}; using built-in table");
            DisclosureConfig::site()
        }
    }
}

/// Mount every widget on `document` and wire its click listeners.
pub fn mount(document: web_sys::Document) -> SharedController {
    let config = read_config(&document);
    let (controller, activations) = DisclosureController::setup(WebDocument::new(document), &config);
    let shared = Rc::new(RefCell::new(controller));
    for activation in activations {
        if let Err(err) = listen(&shared, activation) {
            log::warn!("disclosure: click listener not attached: {err}");
        }
    }
    shared
}

fn listen(shared: &SharedController, activation: Activation<Element>) -> Result<(), DisclosureError> {
    let handle = Rc::clone(shared);
    let Activation { node, widget, trigger } = activation;
    let cb = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let result = handle.borrow_mut().activate(widget, trigger);
        match result {
            Ok(scheduled) => schedule(&handle, scheduled),
            Err(err) => log::warn!("disclosure: activation failed: {err}"),
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    node.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    cb.forget();
    Ok(())
}

fn schedule(shared: &SharedController, scheduled: Vec<Scheduled>) {
    for entry in scheduled {
        let handle = Rc::clone(shared);
        Timeout::new(entry.delay_ms, move || {
            let result = handle.borrow_mut().fire(entry.timer);
            match result {
                Ok(next) => schedule(&handle, next),
                Err(err) => log::warn!("disclosure: deferred action failed: {err}"),
            }
        })
        .forget();
    }
}

fn boot(document: web_sys::Document) {
    let shared = mount(document);
    log::debug!("disclosure: {} widgets live", shared.borrow().len());
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("disclosure: logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        boot(document);
        return;
    }

    let target = document.clone();
    let cb = Closure::once(move || boot(target));
    if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
        log::warn!("disclosure: DOMContentLoaded listener not attached: {}", dom_err(err));
        return;
    }
    cb.forget();
}
