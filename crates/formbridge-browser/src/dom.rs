//! DOM implementation of the core's host traits.

use formbridge_core::{BridgeError, FormHost};
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::ace::{self, AceWidget};

/// [`FormHost`] backed by the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl BrowserHost {
    pub fn new() -> Self {
        Self
    }

    fn element(&self, id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn missing(id: &str) -> BridgeError {
        BridgeError::MissingElement { id: id.to_owned() }
    }
}

impl FormHost for BrowserHost {
    type Editor = AceWidget;

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn field_value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Some(area.value())
        } else {
            None
        }
    }

    fn set_field_value(&self, id: &str, value: &str) -> Result<(), BridgeError> {
        let element = self.element(id).ok_or_else(|| Self::missing(id))?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
            Ok(())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
            Ok(())
        } else {
            // Present but not a value-holding element; treat as absent so the
            // caller sees which identifier is wrong.
            Err(Self::missing(id))
        }
    }

    fn hide_element(&self, id: &str) -> Result<(), BridgeError> {
        let element = self.element(id).ok_or_else(|| Self::missing(id))?;
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("display", "none");
        }
        Ok(())
    }

    fn set_module_url(&self, module: &str, url: &str) {
        ace::set_module_url(module, url);
    }

    fn attach_editor(&self, container_id: &str) -> Result<Self::Editor, BridgeError> {
        AceWidget::attach(container_id)
    }
}
