//! Error taxonomy for the Vantage engine.
//!
//! Empty inputs are not errors: empty catalogs, preference sets, and
//! buffers all have well-defined neutral results. Errors are reserved
//! for arguments the math cannot honor.

/// Errors produced by the scoring, inference, and significance components.
#[derive(Debug, thiserror::Error)]
pub enum VantageError {
    /// Caller-supplied data the engine refuses to compute over.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A division produced NaN or infinity; surfaced as a typed failure
    /// instead of leaking a non-finite number into results.
    #[error("non-finite value produced while computing {quantity}")]
    NonFinite { quantity: &'static str },
}

impl VantageError {
    /// Shorthand for an [`VantageError::InvalidArgument`] with a formatted reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type VantageResult<T> = Result<T, VantageError>;
