//! Unified error types for the kubectl-dfi workspace.
//!
//! The Kubernetes adapter defines its own richer error enum; this one covers
//! what the formatting layer and configuration need to report.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DfiError {
    /// A configuration value is invalid.
    ///
    /// Raised before any cluster access, so no output has been produced.
    #[error("{message}")]
    Config {
        /// User-facing description of the invalid configuration.
        message: String,
    },

    /// The node source failed to deliver node records.
    #[error("{message}")]
    Source {
        /// Contextual message, including the underlying cause.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DfiError>;
