//! Simulation error types
//!
//! `DegenerateVector` is the only recoverable condition; the rest indicate a
//! logic bug in the predictor or scheduler and abort the run.

use thiserror::Error;

use crate::sim::state::Wall;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A heading was requested for a zero-length velocity vector.
    #[error("cannot derive a heading from a zero-length velocity vector")]
    DegenerateVector,

    /// The predictor produced a negative distance.
    #[error("predicted negative distance {distance} to the {wall} wall for mover {id}")]
    NegativeDistance { id: u32, wall: Wall, distance: f64 },

    /// A mover left the closed arena between events.
    #[error("mover {id} left the arena at ({x}, {y})")]
    OutOfArena { id: u32, x: f64, y: f64 },

    /// A wall was struck from a heading quadrant that cannot face it.
    #[error("the {wall} wall cannot be struck from heading quadrant {quadrant}")]
    ImpossibleBounce { wall: Wall, quadrant: u8 },
}
