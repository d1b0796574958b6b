//! Errors raised by the targeting engine.
//!
//! Every variant signals a broken contract between the engine and its caller
//! rather than a transient fault, so none of them are retried internally.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Errors returned by grid, fleet and selector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingError {
    /// A sunk report named a ship length that is not afloat.
    FleetInconsistency { length: usize },
    /// A shot was requested but no candidate cell remains.
    SelectionExhausted,
    /// A shot token did not decode into a coordinate on the board.
    MalformedShotToken(String),
    /// Board dimension outside `1..=MAX_DIMENSION`.
    InvalidDimension(usize),
    /// Coordinate outside the board.
    CoordinateOutOfBounds { x: usize, y: usize },
}

impl core::fmt::Display for TargetingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetingError::FleetInconsistency { length } => {
                write!(f, "Fleet inconsistency: no ship of length {} is afloat", length)
            }
            TargetingError::SelectionExhausted => write!(f, "No candidate cell left to attack"),
            TargetingError::MalformedShotToken(token) => {
                write!(f, "Malformed shot token: {:?}", token)
            }
            TargetingError::InvalidDimension(n) => write!(f, "Invalid board dimension: {}", n),
            TargetingError::CoordinateOutOfBounds { x, y } => {
                write!(f, "Coordinate out of bounds: x={}, y={}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
