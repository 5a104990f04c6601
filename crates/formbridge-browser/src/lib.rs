//! Browser DOM layer for the form-backed editor bridge.
//!
//! Wires the platform-agnostic bridge from `formbridge-core` to the live
//! document. Assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `ace`: wasm-bindgen bindings for the ACE widget
//! - `dom`: `FormHost` implementation over web-sys
//! - `events`: document-ready and submit subscriptions with disposers
//!
//! # Re-exports
//!
//! Re-exports `formbridge-core`, so consumers only need to depend on
//! `formbridge-browser`.

pub use formbridge_core;
pub use formbridge_core::*;

pub mod ace;
pub mod dom;
pub mod events;

pub use ace::{AceEditor, AceSession, AceWidget};
pub use dom::BrowserHost;
pub use events::{on_document_ready, on_submit};

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;

/// A bridge mounted against the live document.
///
/// Owns the event subscriptions; dropping the value (or calling
/// [`unmount`](FormEditorBridge::unmount)) unsubscribes them. The editor
/// widget itself stays on the page, its lifetime equals the page's.
pub struct FormEditorBridge {
    bridge: Rc<RefCell<Bridge<BrowserHost>>>,
    host: BrowserHost,
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl FormEditorBridge {
    /// Wire a bridge to the document, binding once its structure is ready.
    ///
    /// A bind failure is logged diagnostically and aborts binding for this
    /// instance only.
    pub fn mount(config: BridgeConfig) -> Self {
        let mounted = Self::unbound(config);

        let bridge = mounted.bridge.clone();
        let host = mounted.host;
        let listeners = mounted.listeners.clone();
        let ready = events::on_document_ready(move || {
            if let Err(err) = bind_and_wire(&bridge, host, &listeners) {
                tracing::error!(%err, "editor bridge failed to bind");
            }
        });
        if let Some(listener) = ready {
            mounted.listeners.borrow_mut().push(listener);
        }

        mounted
    }

    /// Create a bridge without registering any event subscription.
    pub fn unbound(config: BridgeConfig) -> Self {
        Self {
            bridge: Rc::new(RefCell::new(Bridge::new(config))),
            host: BrowserHost::new(),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Bind immediately instead of waiting for document readiness.
    pub fn bind_now(&self) -> Result<(), BridgeError> {
        bind_and_wire(&self.bridge, self.host, &self.listeners)
    }

    /// Whether the underlying bridge has bound.
    pub fn is_bound(&self) -> bool {
        self.bridge.borrow().is_bound()
    }

    /// Current editor buffer text, once bound.
    pub fn content(&self) -> Option<String> {
        self.bridge.borrow().editor().map(EditorWidget::text)
    }

    /// Copy the editor buffer into the content field outside of a submit.
    pub fn sync_now(&self) {
        self.bridge.borrow().sync_submit(&self.host);
    }

    /// Drop all event subscriptions.
    pub fn unmount(self) {
        self.listeners.borrow_mut().clear();
    }
}

/// Bind the bridge and register the submit subscription on success.
fn bind_and_wire(
    bridge: &Rc<RefCell<Bridge<BrowserHost>>>,
    host: BrowserHost,
    listeners: &Rc<RefCell<Vec<EventListener>>>,
) -> Result<(), BridgeError> {
    bridge.borrow_mut().bind(&host)?;

    let form_id = bridge.borrow().config().form_id.clone();
    let form = gloo_utils::document()
        .get_element_by_id(&form_id)
        .ok_or_else(|| BridgeError::MissingElement { id: form_id })?;

    let submit_bridge = bridge.clone();
    let listener = events::on_submit(&form, move |_event| {
        // Must not throw: an exception here would abort the submission and
        // lose the user's text. sync_submit swallows its own failures.
        submit_bridge.borrow().sync_submit(&host);
    });
    listeners.borrow_mut().push(listener);
    Ok(())
}
