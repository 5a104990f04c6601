//! Bridge configuration.
//!
//! Element identifiers are configuration, not hardcoded behavior: one page may
//! carry several independent bridges, each with its own set of ids.

use smol_str::SmolStr;

use crate::mode::ModeMap;

/// A resource location for on-demand loading of a widget module.
///
/// Widgets like ACE fetch theme and mode implementations lazily; each entry
/// tells the widget where to find one module (e.g. `ace/mode/html`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleUrl {
    /// Widget module identifier.
    pub module: SmolStr,
    /// URL the module is served from.
    pub url: SmolStr,
}

impl ModuleUrl {
    /// Create a module-url entry.
    pub fn new(module: impl Into<SmolStr>, url: impl Into<SmolStr>) -> Self {
        Self {
            module: module.into(),
            url: url.into(),
        }
    }
}

/// Static configuration for one bridge instance.
///
/// Mode resolution is optional: it runs iff [`content_type_id`] is set.
/// A configured content-type id whose element is missing at bind time is an
/// error; leaving the id unset is the supported way to disable the feature.
///
/// [`content_type_id`]: BridgeConfig::content_type_id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Identifier of the form whose submission triggers the sync.
    pub form_id: String,
    /// Identifier of the hidden field holding the raw content.
    pub content_id: String,
    /// Identifier of the element the editor widget is attached to.
    pub container_id: String,
    /// Identifier of the field holding the content-type hint, if any.
    pub content_type_id: Option<String>,
    /// Visual theme identifier (bare, without any widget prefix).
    pub theme: SmolStr,
    /// Content-type to syntax-mode mapping.
    pub modes: ModeMap,
    /// Resource locations for on-demand widget module loading.
    pub module_urls: Vec<ModuleUrl>,
}

impl BridgeConfig {
    /// Configuration with the stock mode map, the default theme and no
    /// content-type field.
    pub fn new(
        form_id: impl Into<String>,
        content_id: impl Into<String>,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            form_id: form_id.into(),
            content_id: content_id.into(),
            container_id: container_id.into(),
            content_type_id: None,
            theme: SmolStr::new_static("chrome"),
            modes: ModeMap::default(),
            module_urls: Vec::new(),
        }
    }

    /// Enable mode resolution against the named content-type field.
    pub fn with_content_type_field(mut self, id: impl Into<String>) -> Self {
        self.content_type_id = Some(id.into());
        self
    }

    /// Override the visual theme.
    pub fn with_theme(mut self, theme: impl Into<SmolStr>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Replace the mode mapping.
    pub fn with_modes(mut self, modes: ModeMap) -> Self {
        self.modes = modes;
        self
    }

    /// Append a module-url entry.
    pub fn with_module_url(mut self, module: impl Into<SmolStr>, url: impl Into<SmolStr>) -> Self {
        self.module_urls.push(ModuleUrl::new(module, url));
        self
    }

    /// Whether mode resolution is configured.
    pub fn mode_resolution_enabled(&self) -> bool {
        self.content_type_id.is_some()
    }
}
