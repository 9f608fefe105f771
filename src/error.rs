use thiserror::Error;

/// Errors raised by the fuzzy set engine.
///
/// All of these mark programmer errors (inconsistent lengths, bad indices,
/// inputs outside the sample grid) and are not meant to be recovered from.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FuzzyError {
    /// A value array does not line up with the domain or slot count.
    #[error("dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A term index (or an append on a full set) is outside the slot range.
    #[error("term index {index} out of range (set has {capacity} slots)")]
    TermOutOfRange { index: usize, capacity: usize },

    /// A crisp input maps to a sample index beyond the discretized domain.
    #[error("input {value} lies outside the domain [0, {max}]")]
    OutOfDomain { value: f64, max: f64 },
}

pub type FuzzyResult<T> = Result<T, FuzzyError>;
