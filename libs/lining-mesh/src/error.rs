//! # Error Types
//!
//! Error types for mesh generation. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when a build fails
//! - Any failure aborts the whole generation request
//! - Errors include the offending values

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while generating lining meshes.
///
/// ## Example
///
/// ```rust
/// use lining_mesh::{arc::sample_arc, MeshError};
///
/// match sample_arc(0.0, 1.0, 2.0, 1) {
///     Err(MeshError::InvalidParameter(msg)) => assert!(msg.contains("resolution")),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Caller-supplied geometry parameters violate an invariant.
    ///
    /// Contains a description naming the parameter and its value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A boolean or slice operation produced empty or unusable output.
    #[error("Degenerate geometry in '{operation}': {message}")]
    DegenerateGeometry {
        /// Name of the operation (difference, slice, ...)
        operation: String,
        /// Error message
        message: String,
    },
}

impl MeshError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub(crate) fn degenerate(operation: &str, message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

impl From<ConfigError> for MeshError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
