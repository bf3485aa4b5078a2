//! Typed bindings to the page elements this client requires.
//!
//! The markup is owned by the backend; this module turns its string-keyed
//! element ids into typed references up front, so a page that is missing
//! an expected element is reported once at wiring time instead of failing
//! silently inside an event handler.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

/// The ways binding to the page markup can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// The page has no element with the expected id.
    #[error("the page has no element with the id \"{0}\"")]
    MissingElement(String),

    /// The element exists but is not a kind of node that can play the
    /// expected role, e.g. a `<div>` where a form control should be.
    #[error("the element \"{0}\" is a <{1}>, which cannot be used here")]
    UnexpectedKind(String, String),
}

/// Look up the element with the given id, requiring it to exist.
pub(crate) fn require_element(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(id.to_owned()))
}

/// Look up the element with the given id as a generic HTML element.
pub(crate) fn require_html_element(
    document: &Document,
    id: &str,
) -> Result<HtmlElement, BindError> {
    require_element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|element| unexpected_kind(id, &element))
}

fn unexpected_kind(id: &str, element: &Element) -> BindError {
    BindError::UnexpectedKind(id.to_owned(), element.tag_name().to_lowercase())
}

/// A form control that holds a string value.
///
/// The backend is free to render a field as a text input, a textarea, or a
/// select; all three expose the same value surface here, mirroring the
/// untyped `.value` access the markup contract was written against.
#[derive(Debug, Clone)]
pub enum FormField {
    /// An `<input>` of any type.
    Input(HtmlInputElement),
    /// A `<textarea>`.
    TextArea(HtmlTextAreaElement),
    /// A `<select>`.
    Select(HtmlSelectElement),
}

impl FormField {
    /// Bind the form control with the given id.
    pub fn bind(document: &Document, id: &str) -> Result<Self, BindError> {
        let element = require_element(document, id)?;

        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(FormField::Input(input)),
            Err(element) => element,
        };

        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(text_area) => return Ok(FormField::TextArea(text_area)),
            Err(element) => element,
        };

        match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => Ok(FormField::Select(select)),
            Err(element) => Err(unexpected_kind(id, &element)),
        }
    }

    /// The control's current value.
    pub fn value(&self) -> String {
        match self {
            FormField::Input(input) => input.value(),
            FormField::TextArea(text_area) => text_area.value(),
            FormField::Select(select) => select.value(),
        }
    }

    /// Overwrite the control's value.
    pub fn set_value(&self, value: &str) {
        match self {
            FormField::Input(input) => input.set_value(value),
            FormField::TextArea(text_area) => text_area.set_value(value),
            FormField::Select(select) => select.set_value(value),
        }
    }
}

/// Reload the current page, discarding all client-side state.
pub(crate) fn reload_page() {
    if let Err(error) = gloo_utils::window().location().reload() {
        log::error!("could not reload the page: {error:?}");
    }
}
