//! # Error Types
//!
//! Structured error types for quantify_core. Estimation itself never fails:
//! malformed user input degrades to zero quantities by design, so errors only
//! appear at the boundaries where a caller bug or a malformed document is
//! involved (element-type names, project JSON).
//!
//! ## Example
//!
//! ```rust
//! use quantify_core::errors::EngineError;
//!
//! let err = EngineError::unknown_element("GAZEBO");
//! assert_eq!(err.error_code(), "UNKNOWN_ELEMENT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quantify_core operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Structured error type for engine boundary operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EngineError {
    /// An element-type name does not match any known structural element
    #[error("Unknown element type: {name}")]
    UnknownElement { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl EngineError {
    /// Create an UnknownElement error
    pub fn unknown_element(name: impl Into<String>) -> Self {
        EngineError::UnknownElement { name: name.into() }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        EngineError::Serialization {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::UnknownElement { .. } => "UNKNOWN_ELEMENT",
            EngineError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}
