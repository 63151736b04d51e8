//! Error types for distribution construction, sampling and generator lifecycle

use thiserror::Error;

/// Errors raised by the sampling core
///
/// Configuration problems (`UnknownDistribution`, `NotImplemented`,
/// `InvalidParameter`) are returned at construction time. Numerical problems
/// are returned when building weight vectors or alias tables. The lifecycle
/// variants report misuse of a [`Generator`](crate::generator::Generator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    #[error("the distribution {0} is unknown")]
    UnknownDistribution(String),

    #[error("the {0} distribution is not implemented")]
    NotImplemented(String),

    #[error("invalid {distribution} parameters: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: String,
    },

    #[error("weight {index} is negative ({value})")]
    NegativeWeight { index: usize, value: f64 },

    #[error("weights cannot be normalized (sum is zero or not finite)")]
    Unnormalizable,

    #[error("alias table has {weights} entries but {candidates} candidates were supplied")]
    LengthMismatch { weights: usize, candidates: usize },

    #[error("generator is already running")]
    AlreadyStarted,

    #[error("generator is already closed")]
    AlreadyClosed,

    #[error("generator has been stopped")]
    Stopped,
}

impl SamplerError {
    pub(crate) fn invalid(distribution: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            distribution,
            reason: reason.into(),
        }
    }
}
