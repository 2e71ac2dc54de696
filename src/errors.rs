//! Error types for the host configuration boundary.
//!
//! Formatting, decomposition and filtering never fail; they fall back to
//! defaults. Errors only arise when turning host-supplied data into typed
//! values.

use thiserror::Error;

/// Error when loading a [`ControlConfig`](crate::ControlConfig) from host data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The property bag was not valid JSON, or had fields of the wrong type.
    #[error("invalid control configuration: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
