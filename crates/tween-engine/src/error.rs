//! Error types for the tween engine

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Error type for tween operations.
///
/// State-machine guard failures are not errors; those operations return
/// `bool`. Everything here is recoverable: the worst outcome of any variant
/// is a skipped property update.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// Start and end values belong to different property variants
    #[error("Cannot combine {expected:?} with {actual:?}")]
    ValueMismatch { expected: ValueKind, actual: ValueKind },

    /// A component slice had the wrong arity for the requested kind
    #[error("Component count mismatch: expected {expected}, got {actual}")]
    ComponentCountMismatch { expected: usize, actual: usize },

    /// A property adapter was invoked against a target it cannot read/write
    #[error("Property '{property}' is not animatable on this target")]
    NotAnimatable { property: String },

    /// Invalid value
    #[error("Invalid value: {reason}")]
    InvalidValue { reason: String },

    /// Invalid time value
    #[error("Invalid time value: {time}")]
    InvalidTime { time: f64 },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl TweenError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::ValueMismatch { .. } | Self::ComponentCountMismatch { .. } => "interpolation",
            Self::NotAnimatable { .. } => "adapter",
            Self::InvalidValue { .. } | Self::InvalidTime { .. } => "validation",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
