//! formbridge-core: form-backed editor bridge logic without browser dependencies.
//!
//! Binds a code editor widget to a hidden form field so that the form submits
//! the widget's current buffer, optionally switching the widget's syntax mode
//! from a content-type hint. All platform interaction goes through the
//! [`FormHost`] and [`EditorWidget`] traits, so the same bridge logic runs
//! against the real DOM or against test doubles.
//!
//! The two synchronization points are fixed by design: the content field seeds
//! the editor at bind time, and the editor buffer overwrites the content field
//! at submit time. In between, the editor is the source of truth.

pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod mode;

pub use bridge::{Bridge, BridgeState};
pub use config::{BridgeConfig, ModuleUrl};
pub use error::BridgeError;
pub use host::{EditorWidget, FormHost};
pub use mode::{ModeMap, ModeMapping};
pub use smol_str::SmolStr;
