//! The bridge state machine.
//!
//! Two states, one transition: `Uninitialized -> Bound`, driven once by the
//! platform layer when the document's structure is ready. Within `Bound`,
//! [`Bridge::sync_submit`] is a repeatable action invoked once per submission
//! attempt.

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::host::{EditorWidget, FormHost};

/// Lifecycle state of a [`Bridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Constructed, elements not yet looked up.
    Uninitialized,
    /// Editor attached and wired to the form.
    Bound,
}

/// Wires one editor widget to one form field.
///
/// The bridge owns its editor instance exclusively; it is created during
/// [`bind`] and lives until the bridge is dropped (on the web, page teardown).
///
/// [`bind`]: Bridge::bind
pub struct Bridge<H: FormHost> {
    config: BridgeConfig,
    state: BridgeState,
    editor: Option<H::Editor>,
}

impl<H: FormHost> Bridge<H> {
    /// Create an unbound bridge holding its configuration.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            state: BridgeState::Uninitialized,
            editor: None,
        }
    }

    /// The bridge's configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Whether [`bind`](Bridge::bind) has completed.
    pub fn is_bound(&self) -> bool {
        self.state == BridgeState::Bound
    }

    /// The attached editor, once bound.
    pub fn editor(&self) -> Option<&H::Editor> {
        self.editor.as_ref()
    }

    /// Look up the configured elements, attach the editor and seed it from
    /// the content field.
    ///
    /// Fails with [`BridgeError::MissingElement`] naming the first absent
    /// identifier, and with [`BridgeError::AlreadyBound`] on a second call;
    /// neither corrupts state. An error aborts binding for this instance
    /// only.
    pub fn bind(&mut self, host: &H) -> Result<(), BridgeError> {
        if self.is_bound() {
            return Err(BridgeError::AlreadyBound);
        }

        let config = &self.config;
        let mut required = vec![
            config.form_id.as_str(),
            config.content_id.as_str(),
            config.container_id.as_str(),
        ];
        // A configured content-type field is part of the page contract.
        if let Some(id) = &config.content_type_id {
            required.push(id.as_str());
        }
        for id in required {
            if !host.has_element(id) {
                return Err(BridgeError::MissingElement { id: id.to_owned() });
            }
        }

        for entry in &config.module_urls {
            host.set_module_url(&entry.module, &entry.url);
        }

        let editor = host.attach_editor(&config.container_id)?;
        editor.set_theme(&config.theme);

        let initial = host.field_value(&config.content_id).unwrap_or_default();
        editor.set_text(&initial);
        host.hide_element(&config.content_id)?;

        if let Some(ct_id) = &config.content_type_id {
            let content_type = host.field_value(ct_id).unwrap_or_default();
            match config.modes.resolve(&content_type) {
                Some(mode) => {
                    tracing::debug!(%content_type, mode, "switching syntax mode");
                    editor.set_mode(mode);
                }
                None => {
                    // Non-fatal: the widget keeps its default mode.
                    let err = BridgeError::UnknownMode { content_type };
                    tracing::debug!(%err, "keeping default syntax mode");
                }
            }
        }

        self.editor = Some(editor);
        self.state = BridgeState::Bound;
        Ok(())
    }

    /// Copy the editor buffer into the content field.
    ///
    /// Runs synchronously in the submit handler, before the native
    /// form-serialization step. Never panics and never propagates an error: a
    /// failure escaping to the platform would abort the submission and lose
    /// the user's text. Before binding this is a no-op.
    pub fn sync_submit(&self, host: &H) {
        let Some(editor) = &self.editor else {
            tracing::debug!("submit before bind, nothing to sync");
            return;
        };
        if let Err(err) = host.set_field_value(&self.config.content_id, &editor.text()) {
            tracing::error!(%err, "failed to copy editor buffer into content field");
        }
    }
}
