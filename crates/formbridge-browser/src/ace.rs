//! wasm-bindgen bindings for the ACE editor widget.
//!
//! ACE lives on the page as the global `ace` object; these bindings cover
//! exactly the surface the bridge consumes: construct-in-container, theme,
//! buffer access, syntax mode and the module-url registry for on-demand
//! loading of theme/mode implementations.

use formbridge_core::{BridgeError, EditorWidget};
use wasm_bindgen::prelude::*;

const THEME_PREFIX: &str = "ace/theme/";
const MODE_PREFIX: &str = "ace/mode/";

#[wasm_bindgen]
extern "C" {
    /// Handle to an ACE editor instance as returned by `ace.edit`.
    pub type AceEditor;

    #[wasm_bindgen(method, js_name = setTheme)]
    fn set_theme(this: &AceEditor, theme: &str);

    #[wasm_bindgen(method, js_name = getSession)]
    fn get_session(this: &AceEditor) -> AceSession;

    /// An ACE edit session holding the live text buffer.
    pub type AceSession;

    #[wasm_bindgen(method, js_name = getValue)]
    fn get_value(this: &AceSession) -> String;

    #[wasm_bindgen(method, js_name = setValue)]
    fn set_value(this: &AceSession, text: &str);

    #[wasm_bindgen(method, js_name = setMode)]
    fn set_mode(this: &AceSession, mode: &str);

    // ace.edit throws when the container element does not exist.
    #[wasm_bindgen(catch, js_namespace = ace, js_name = edit)]
    fn ace_edit(container_id: &str) -> Result<AceEditor, JsValue>;

    #[wasm_bindgen(js_namespace = ["ace", "config"], js_name = setModuleUrl)]
    fn ace_set_module_url(module: &str, url: &str);
}

/// Tell ACE where to load a module from on demand.
pub fn set_module_url(module: &str, url: &str) {
    ace_set_module_url(module, url);
}

/// An attached ACE editor implementing the bridge's widget trait.
///
/// Bare theme and mode identifiers are prefixed with `ace/theme/` and
/// `ace/mode/` here, keeping the core mapping widget-agnostic.
pub struct AceWidget {
    editor: AceEditor,
}

impl AceWidget {
    /// Attach ACE to the named container element.
    pub fn attach(container_id: &str) -> Result<Self, BridgeError> {
        let editor = ace_edit(container_id).map_err(|err| {
            BridgeError::Attach(format!(
                "ace.edit({container_id:?}): {}",
                js_error_message(&err)
            ))
        })?;
        Ok(Self { editor })
    }
}

impl EditorWidget for AceWidget {
    fn set_theme(&self, theme: &str) {
        self.editor.set_theme(&format!("{THEME_PREFIX}{theme}"));
    }

    fn set_mode(&self, mode: &str) {
        self.editor
            .get_session()
            .set_mode(&format!("{MODE_PREFIX}{mode}"));
    }

    fn text(&self) -> String {
        self.editor.get_session().get_value()
    }

    fn set_text(&self, text: &str) {
        self.editor.get_session().set_value(text);
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
