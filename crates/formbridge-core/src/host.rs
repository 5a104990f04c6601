//! Platform abstraction traits for the bridge.
//!
//! These traits define the seam between bridge logic and the platform it runs
//! on (browser DOM, test doubles). The bridge never touches a global document
//! or a global widget object; everything it needs is injected through a
//! [`FormHost`].
//!
//! Methods take `&self`: widget handles are references to interior-mutable
//! platform objects, and implementations use interior mutability where they
//! need state.

use crate::error::BridgeError;

/// The editor widget API surface the bridge consumes.
pub trait EditorWidget {
    /// Set the widget's visual theme from a bare identifier.
    fn set_theme(&self, theme: &str);

    /// Activate a syntax mode from a bare identifier.
    fn set_mode(&self, mode: &str);

    /// Current buffer text.
    fn text(&self) -> String;

    /// Replace the buffer text.
    fn set_text(&self, text: &str);
}

/// Host-side operations: element lookup, field access and widget attachment.
pub trait FormHost {
    /// The widget type this host attaches.
    type Editor: EditorWidget;

    /// Whether an element with this identifier exists.
    fn has_element(&self, id: &str) -> bool;

    /// Current value of a field element, or `None` when the element is absent
    /// or holds no value.
    fn field_value(&self, id: &str) -> Option<String>;

    /// Overwrite a field element's value.
    fn set_field_value(&self, id: &str, value: &str) -> Result<(), BridgeError>;

    /// Remove an element from the visual flow.
    fn hide_element(&self, id: &str) -> Result<(), BridgeError>;

    /// Tell the widget runtime where to load a module from on demand.
    fn set_module_url(&self, module: &str, url: &str);

    /// Attach an editor widget to the named container element.
    fn attach_editor(&self, container_id: &str) -> Result<Self::Editor, BridgeError>;
}
