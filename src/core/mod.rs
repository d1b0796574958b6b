//! Targeting core (no_std compatible)
//!
//! Coordinates, the enemy belief grid and the remaining fleet. Only `alloc`
//! and `rand` are required, so the engine can run without an operating
//! system or be compiled to WebAssembly.

pub mod config;
pub mod coord;
pub mod error;
pub mod fleet;
pub mod grid;

// Re-export commonly used types
pub use config::*;
pub use coord::{Coordinate, Direction};
pub use error::TargetingError;
pub use fleet::Fleet;
pub use grid::{CellState, EnemyGrid, ShotOutcome};
