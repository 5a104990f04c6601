//! WASM bindings for the form-backed editor bridge.
//!
//! Exposes the bridge to JavaScript/TypeScript apps via wasm-bindgen. Typical
//! use is one line at page load:
//!
//! ```js
//! new FormBridge({ formId: "frm-edit", contentId: "frm-edit__inp-content",
//!                  containerId: "frm-edit__cnt-editor" });
//! ```

mod types;

pub use types::*;

use formbridge_browser::FormEditorBridge;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Route tracing output to the browser console.
#[wasm_bindgen(js_name = initTracing)]
pub fn init_tracing() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}

/// A form-backed editor bridge driven from JavaScript.
#[wasm_bindgen(js_name = FormBridge)]
pub struct JsFormBridge {
    inner: FormEditorBridge,
}

#[wasm_bindgen(js_class = FormBridge)]
impl JsFormBridge {
    /// Mount a bridge: it binds once the document's structure is ready, or
    /// immediately when the document has already loaded.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsBridgeConfig) -> JsFormBridge {
        JsFormBridge {
            inner: FormEditorBridge::mount(config.into()),
        }
    }

    /// Create a bridge without registering any event subscription.
    ///
    /// Call [`bindNow`](JsFormBridge::bind_now) to bind explicitly.
    #[wasm_bindgen(js_name = unbound)]
    pub fn unbound(config: JsBridgeConfig) -> JsFormBridge {
        JsFormBridge {
            inner: FormEditorBridge::unbound(config.into()),
        }
    }

    /// Bind immediately instead of waiting for document readiness.
    #[wasm_bindgen(js_name = bindNow)]
    pub fn bind_now(&self) -> Result<(), JsError> {
        self.inner
            .bind_now()
            .map_err(|err| JsError::new(&err.to_string()))
    }

    /// Whether the bridge has bound.
    #[wasm_bindgen(getter, js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        self.inner.is_bound()
    }

    /// Current editor buffer text, or `undefined` before binding.
    pub fn content(&self) -> Option<String> {
        self.inner.content()
    }

    /// Copy the editor buffer into the content field outside of a submit.
    #[wasm_bindgen(js_name = syncNow)]
    pub fn sync_now(&self) {
        self.inner.sync_now();
    }

    /// Drop all event subscriptions.
    pub fn dispose(self) {
        self.inner.unmount();
    }
}
