//! Markup construction for each descriptor kind.
//!
//! Each builder looks up its elements, returns `Ok(None)` when the markup is
//! absent or there is nothing to disclose, and otherwise synthesizes the
//! control markup and hands back the widget with its resolved nodes. Initial
//! state is applied afterwards by the controller through the widget's
//! `initial_effects`.

use crate::accordion::AccordionSection;
use crate::config::{AccordionConfig, FaqConfig, Labels, RevealConfig};
use crate::consts::{
    ACCORDION_HEADER_CLASS, ACCORDION_HEADER_CONTENT_CLASS, ACCORDION_HEADER_ICON_CLASS,
    ACCORDION_HEADER_TITLE_CLASS, ACCORDION_TOGGLE_CLASS, ACCORDION_TOGGLE_ICON_CLASS, ACCORDION_WRAPPER_CLASS,
    TOGGLE_BUTTON_CLASS, TOGGLE_CONTAINER_CLASS, TOGGLE_ICON_CLASS, TOGGLE_TEXT_CLASS,
};
use crate::controller::{Nodes, Widget};
use crate::dom::Document;
use crate::error::DisclosureError;
use crate::faq::FaqGroup;
use crate::reveal::RevealGroup;

pub(crate) struct Mounted<N> {
    pub widget: Widget,
    pub nodes: Nodes<N>,
    /// Elements that receive click listeners; the position is the trigger index.
    pub listeners: Vec<N>,
}

type MountResult<N> = Result<Option<Mounted<N>>, DisclosureError>;

pub(crate) fn reveal<D: Document>(doc: &mut D, config: &RevealConfig) -> MountResult<D::Node> {
    let Some(container) = doc.element_by_id(&config.container_id) else {
        log::debug!("reveal: container #{} not found", config.container_id);
        return Ok(None);
    };
    let items = doc.elements_by_class(Some(&container), &config.item_class);
    let Some(group) = RevealGroup::new(items.len(), config.initial_visible) else {
        log::debug!(
            "reveal: #{} has {} .{} items, nothing beyond {}",
            config.container_id,
            items.len(),
            config.item_class,
            config.initial_visible
        );
        return Ok(None);
    };
    let Some(first) = items.first() else {
        return Ok(None);
    };

    // The control goes after the list: into the list's parent, unless the
    // items sit directly in the container.
    let host = match doc.parent(first) {
        Some(list) if list != container => doc.parent(&list).unwrap_or(list),
        _ => container.clone(),
    };

    let holder = doc.create_element("div", TOGGLE_CONTAINER_CLASS)?;
    let button = doc.create_element("button", TOGGLE_BUTTON_CLASS)?;
    doc.set_attribute(&button, "type", "button")?;
    let label = doc.create_element("span", TOGGLE_TEXT_CLASS)?;
    let glyph = doc.create_element("span", TOGGLE_ICON_CLASS)?;
    doc.append_child(&button, &label)?;
    doc.append_child(&button, &glyph)?;
    doc.append_child(&holder, &button)?;
    doc.append_child(&host, &holder)?;

    Ok(Some(Mounted {
        widget: Widget::Reveal(group),
        nodes: Nodes {
            container: Some(container),
            items,
            control: Some(button.clone()),
            label: Some(label),
            glyph: Some(glyph),
            ..Nodes::default()
        },
        listeners: vec![button],
    }))
}

pub(crate) fn accordion<D: Document>(doc: &mut D, config: &AccordionConfig, labels: &Labels) -> MountResult<D::Node> {
    let Some(section) = doc.element_by_id(&config.section_id) else {
        log::debug!("accordion: section #{} not found", config.section_id);
        return Ok(None);
    };
    let Some(parent) = doc.parent(&section) else {
        log::debug!("accordion: section #{} is detached", config.section_id);
        return Ok(None);
    };

    let header = doc.create_element("div", ACCORDION_HEADER_CLASS)?;
    let content = doc.create_element("div", ACCORDION_HEADER_CONTENT_CLASS)?;
    let icon = doc.create_element("span", ACCORDION_HEADER_ICON_CLASS)?;
    doc.set_text(&icon, &config.icon);
    let title = doc.create_element("h3", ACCORDION_HEADER_TITLE_CLASS)?;
    doc.set_text(&title, &config.title);
    doc.append_child(&content, &icon)?;
    doc.append_child(&content, &title)?;

    let toggle = doc.create_element("button", ACCORDION_TOGGLE_CLASS)?;
    doc.set_attribute(&toggle, "type", "button")?;
    doc.set_attribute(&toggle, "aria-label", &labels.accordion_toggle)?;
    doc.set_attribute(&toggle, "aria-controls", &config.section_id)?;
    let glyph = doc.create_element("span", ACCORDION_TOGGLE_ICON_CLASS)?;
    doc.append_child(&toggle, &glyph)?;
    doc.append_child(&header, &content)?;
    doc.append_child(&header, &toggle)?;

    let wrapper = doc.create_element("div", ACCORDION_WRAPPER_CLASS)?;
    doc.insert_before(&parent, &wrapper, &section)?;
    doc.append_child(&wrapper, &section)?;
    doc.insert_before(&wrapper, &header, &section)?;

    Ok(Some(Mounted {
        widget: Widget::Accordion(AccordionSection::new(config.default_open)),
        nodes: Nodes { section: Some(section), control: Some(toggle), glyph: Some(glyph), ..Nodes::default() },
        listeners: vec![header],
    }))
}

pub(crate) fn faq<D: Document>(doc: &mut D, config: &FaqConfig) -> MountResult<D::Node> {
    let triggers = doc.elements_by_class(None, &config.question_class);
    let open = triggers
        .iter()
        .position(|trigger| doc.attribute(trigger, "aria-expanded").as_deref() == Some("true"));
    let Some(group) = FaqGroup::new(triggers.len(), open) else {
        log::debug!("faq: no .{} questions", config.question_class);
        return Ok(None);
    };
    let panels = triggers
        .iter()
        .map(|trigger| doc.attribute(trigger, "aria-controls").and_then(|id| doc.element_by_id(&id)))
        .collect();

    Ok(Some(Mounted {
        widget: Widget::Faq(group),
        nodes: Nodes { triggers: triggers.clone(), panels, ..Nodes::default() },
        listeners: triggers,
    }))
}
