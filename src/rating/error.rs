use thiserror::Error;

/// Errors raised when configuring a [`RatingControl`](super::RatingControl).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("Requested {requested} stars, expected between {min} and {max}")]
    OutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid star bounds: min {min}, max {max}")]
    InvalidBounds { min: usize, max: usize },
}
