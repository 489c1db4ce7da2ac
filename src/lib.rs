//! Wallbounce - an event-driven wall-bounce simulation
//!
//! A handful of point movers travel in straight lines inside an axis-aligned
//! rectangular arena, bouncing elastically off the four walls. The scheduler
//! predicts each mover's next wall impact, jumps simulation time to the
//! soonest one, reflects that mover, and halts when two movers occupy the
//! same point.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, wall prediction, scheduling)
//! - `render`: Renderer seam consumed by the scheduler
//! - `settings`: Operational parameters with JSON overrides

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::SimConfig;

/// Simulation constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 320.0;
    pub const ARENA_HEIGHT: f64 = 360.0;
    /// Viewport padding around the arena (renderer concern)
    pub const BORDER_PADDING: f64 = 10.0;

    /// RMS of the half-normal speed-component distribution
    pub const RMS_SPEED: f64 = 4.4;
    /// Per-axis velocity component clamp
    pub const DIM_SPEED_MIN: f64 = 0.0;
    pub const DIM_SPEED_MAX: f64 = 11.0;
    /// Scalar speed clamp. Speed doubles as the time-unit divisor, so the
    /// floor must stay at 1 or above.
    pub const SPEED_MIN: u32 = 1;
    pub const SPEED_MAX: u32 = 10;

    /// Wall hits before the scheduler gives up
    pub const BOUNCE_BUDGET: u32 = 10;
    /// Movers spawned by default
    pub const MOVER_COUNT: usize = 2;

    /// Default pen thickness for mover styling
    pub const PEN_SIZE: f64 = 3.0;

    /// Absolute slack for arena-containment checks (float drift only)
    pub const ARENA_SLACK: f64 = 1e-9;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_heading(degrees: f64) -> f64 {
    let heading = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative can round up to exactly 360.0
    if heading >= 360.0 { heading - 360.0 } else { heading }
}

/// Quadrant of a heading in [0, 360), numbered 1 through 4
#[inline]
pub fn heading_quadrant(heading: f64) -> u8 {
    ((heading / 90.0).floor() as u8 + 1).min(4)
}
