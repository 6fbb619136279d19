//! Error types for the catalog pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Caller-side precondition violations. Empty lists and out-of-range page
/// navigation are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Page size must be strictly positive.
    #[error("invalid page size {size}: must be greater than zero")]
    InvalidPageSize {
        /// The rejected value as supplied by the caller.
        size: i64,
    },

    /// A product draft was submitted before every required field was set.
    #[error("product draft is incomplete: missing {missing}")]
    IncompleteDraft {
        /// Name of the first missing field.
        missing: &'static str,
    },
}
