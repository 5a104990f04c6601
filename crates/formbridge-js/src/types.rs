//! Configuration types crossing the JS boundary.

use formbridge_core::{BridgeConfig, ModeMap, ModeMapping};
use serde::Deserialize;
use tsify_next::Tsify;

/// Bridge configuration as provided from JavaScript.
///
/// Optional fields fall back to the core defaults: no content-type field,
/// the stock mode map and the `chrome` theme.
#[derive(Debug, Clone, Deserialize, Tsify)]
#[tsify(from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsBridgeConfig {
    /// Identifier of the form to hook.
    pub form_id: String,
    /// Identifier of the hidden content field.
    pub content_id: String,
    /// Identifier of the editor container element.
    pub container_id: String,
    /// Identifier of the content-type hint field; omit to disable mode
    /// resolution.
    #[serde(default)]
    pub content_type_id: Option<String>,
    /// Bare theme identifier.
    #[serde(default)]
    pub theme: Option<String>,
    /// Ordered `[pattern, mode]` pairs; declaration order is priority.
    #[serde(default)]
    pub modes: Option<Vec<(String, String)>>,
    /// `[module, url]` pairs for on-demand widget module loading.
    #[serde(default)]
    pub module_urls: Vec<(String, String)>,
}

impl From<JsBridgeConfig> for BridgeConfig {
    fn from(js: JsBridgeConfig) -> Self {
        let mut config = BridgeConfig::new(js.form_id, js.content_id, js.container_id);
        if let Some(id) = js.content_type_id {
            config = config.with_content_type_field(id);
        }
        if let Some(theme) = js.theme {
            config = config.with_theme(theme);
        }
        if let Some(modes) = js.modes {
            config = config.with_modes(ModeMap::new(
                modes
                    .into_iter()
                    .map(|(pattern, mode)| ModeMapping::new(pattern, mode))
                    .collect(),
            ));
        }
        for (module, url) in js.module_urls {
            config = config.with_module_url(module, url);
        }
        config
    }
}
