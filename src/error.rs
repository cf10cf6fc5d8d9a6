use thiserror::Error;

/// Failures raised by the update rules
///
/// Every variant describes malformed input from the caller. Checks run before any estimate,
/// trace, or parameter is touched, so an `Err` always means nothing was mutated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Mismatched parallel sequences or an out-of-range hyperparameter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The eligibility trace table is not keyed by the same states as the value table
    #[error("trace domain does not match value domain ({values} values, {traces} traces)")]
    DomainMismatch { values: usize, traces: usize },

    /// A feature vector or trace does not have the parameter vector's length
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A state outside the value table's domain was passed to an update
    #[error("state is not in the value domain")]
    LookupFailure,
}

pub type Result<T> = std::result::Result<T, Error>;
