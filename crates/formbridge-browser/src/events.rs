//! Document-ready and form-submit subscriptions.
//!
//! Both are explicit subscriptions returning their `EventListener` as a
//! disposer, so callers (and tests) can tear them down deterministically.
//! Dropping the listener unsubscribes.

use gloo_events::EventListener;
use gloo_utils::document;
use web_sys::EventTarget;

/// Run `f` once the document's structural content is ready.
///
/// One-shot: when the document has already left the `loading` state, `f`
/// runs immediately and no listener is registered (`None`). Otherwise `f`
/// runs on `DOMContentLoaded`; dropping the returned listener before the
/// event fires cancels the callback.
pub fn on_document_ready(f: impl FnOnce() + 'static) -> Option<EventListener> {
    let doc = document();
    if doc.ready_state() != "loading" {
        f();
        return None;
    }
    Some(EventListener::once(&doc, "DOMContentLoaded", move |_| f()))
}

/// Subscribe to a form's `submit` event.
///
/// The callback runs synchronously, before the browser's native
/// form-serialization step.
pub fn on_submit(
    form: &EventTarget,
    f: impl FnMut(&web_sys::Event) + 'static,
) -> EventListener {
    EventListener::new(form, "submit", f)
}
