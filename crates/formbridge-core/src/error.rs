//! Error types for bridge operations.

use thiserror::Error;

/// Errors that can occur while binding or driving a bridge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BridgeError {
    /// A required DOM element was absent at bind time.
    ///
    /// Names the missing identifier so integration bugs surface instead of
    /// degrading into a silent no-op.
    #[error("required element not found: #{id}")]
    MissingElement {
        /// The element identifier that could not be located.
        id: String,
    },

    /// A content-type value matched no mode mapping.
    ///
    /// Non-fatal: the editor keeps its default mode. Only used for
    /// diagnostics, never propagated out of the bridge.
    #[error("no syntax mode matches content type {content_type:?}")]
    UnknownMode {
        /// The content-type string that failed to resolve.
        content_type: String,
    },

    /// `bind` was called on an already-bound bridge.
    #[error("bridge is already bound")]
    AlreadyBound,

    /// The editor widget could not be attached to its container.
    #[error("failed to attach editor: {0}")]
    Attach(String),
}
