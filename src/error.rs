//! Error types for timeline construction and valuation

use thiserror::Error;

/// Result alias used throughout the crate
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Errors raised by timeline construction, mutation, and valuation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// An argument was not a cash flow node (or a container of them)
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the call accepts
        expected: &'static str,
        /// What was actually supplied
        found: String,
    },

    /// A present value could not be computed to a finite, economic number
    #[error("valuation error: {reason}")]
    Valuation {
        /// Description of the failed valuation
        reason: String,
    },

    /// Positional access past the end of the node sequence
    #[error("index {index} out of range for timeline with {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TimelineError {
    pub(crate) fn valuation(reason: impl Into<String>) -> Self {
        Self::Valuation {
            reason: reason.into(),
        }
    }

    pub(crate) fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }
}
