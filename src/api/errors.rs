use thiserror::Error;

/// Errors that can occur while computing leading digit statistics.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BenfordError {
    /// Analysis was requested on zero magnitudes.
    #[error("Cannot analyze an empty set of magnitudes")]
    EmptyInput,

    /// A magnitude with no leading digit reached digit extraction.
    /// Only strictly positive, finite values have one.
    #[error("Magnitude {0} is not a positive, finite number")]
    InvalidInput(f64),
}
