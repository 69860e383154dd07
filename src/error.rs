//! Error types shared by the field, pattern set and engine.
//!
//! Only precondition violations and rejected pattern-set mutations are
//! errors. A uniform field during normalization and an empty pattern set
//! during a step are handled by defined fallbacks and never surface here.
use thiserror::Error;

/// Errors produced by the Turing field engine.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FieldError {
    /// Width or height was zero, or a buffer did not match its dimensions.
    #[error("invalid field dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    /// A scale descriptor violated its value constraints.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    /// A pattern-set mutation was rejected; the set is unchanged.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

/// Rejected `add`/`remove` requests on a [`PatternSet`](crate::pattern::PatternSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("pattern set already holds the maximum of {max} scales")]
    Full { max: usize },
    #[error("pattern set cannot shrink below {min} scale(s)")]
    AtMinimum { min: usize },
}
