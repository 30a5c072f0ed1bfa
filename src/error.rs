use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser plumbing behind the interactive components.
///
/// None of these are surfaced to visitors. Callers log them and carry on
/// without the feature that needed the DOM.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(message)
    }
}

pub fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}
