//! Document abstraction used by the controller.
//!
//! The controller only needs a handful of synchronous DOM operations. The
//! browser implementation lives in [`crate::web`]; tests use an in-memory
//! document.

#[cfg(test)]
#[path = "dom_test.rs"]
pub(crate) mod dom_test;

use crate::effect::{Animation, Display};
use crate::error::DisclosureError;

pub trait Document {
    /// Handle to an element. Cloning yields another handle to the same element;
    /// equality is element identity.
    type Node: Clone + PartialEq;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Descendants of `root` (or of the whole document) carrying `class`, in document order.
    fn elements_by_class(&self, root: Option<&Self::Node>, class: &str) -> Vec<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Create a detached element with the given (space-separated) class list.
    ///
    /// # Errors
    ///
    /// Fails when the document rejects the tag name.
    fn create_element(&mut self, tag: &str, class: &str) -> Result<Self::Node, DisclosureError>;

    /// # Errors
    ///
    /// Fails when the insertion would be invalid (e.g. a cycle).
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), DisclosureError>;

    /// Insert `child` into `parent` immediately before `reference`.
    ///
    /// # Errors
    ///
    /// Fails when `reference` is not a child of `parent`.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        child: &Self::Node,
        reference: &Self::Node,
    ) -> Result<(), DisclosureError>;

    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// # Errors
    ///
    /// Fails on an invalid attribute name.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), DisclosureError>;

    /// Add (`on`) or remove a single class.
    ///
    /// # Errors
    ///
    /// Fails on an invalid class token.
    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool) -> Result<(), DisclosureError>;

    /// # Errors
    ///
    /// Fails when the node has no inline style.
    fn set_display(&mut self, node: &Self::Node, display: Display) -> Result<(), DisclosureError>;

    /// Apply an inline animation, or clear it with `None`.
    ///
    /// # Errors
    ///
    /// Fails when the node has no inline style.
    fn set_animation(&mut self, node: &Self::Node, animation: Option<&Animation>) -> Result<(), DisclosureError>;

    /// Smoothly scroll so the node's top edge is visible.
    fn scroll_into_view(&mut self, node: &Self::Node);
}
