//! Scheduler state and core simulation types
//!
//! All state needed to reproduce a run lives here.

use std::fmt;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{heading_quadrant, normalize_heading};

/// One of the four arena walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Right,
    Top,
    Left,
    Bottom,
}

impl Wall {
    /// Conventional numbering: right 1, top 2, left 3, bottom 4
    pub fn index(self) -> u8 {
        match self {
            Wall::Right => 1,
            Wall::Top => 2,
            Wall::Left => 3,
            Wall::Bottom => 4,
        }
    }

    /// Right and left walls lie on vertical lines
    pub fn is_vertical(self) -> bool {
        matches!(self, Wall::Right | Wall::Left)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Wall::Right => "right",
            Wall::Top => "top",
            Wall::Left => "left",
            Wall::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// A point agent with position, heading and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub id: u32,
    pub pos: DVec2,
    /// Direction of motion in degrees, kept in [0, 360); 0 = +x, 90 = +y
    heading: f64,
    /// Distance covered per unit time step, 1..=10
    pub speed: u32,
}

impl Mover {
    pub fn new(id: u32, pos: DVec2, heading: f64, speed: u32) -> Self {
        Self {
            id,
            pos,
            heading: normalize_heading(heading),
            speed,
        }
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize_heading(degrees);
    }

    /// Rotate counter-clockwise by `degrees`
    pub fn turn_left(&mut self, degrees: f64) {
        self.set_heading(self.heading + degrees);
    }

    /// Quadrant of the current heading, 1..=4
    pub fn heading_quadrant(&self) -> u8 {
        heading_quadrant(self.heading)
    }

    /// Unit vector along the heading
    pub fn direction(&self) -> DVec2 {
        let rad = self.heading.to_radians();
        DVec2::new(rad.cos(), rad.sin())
    }

    /// One unit time step: translate by `speed` along the heading
    pub fn step(&mut self) {
        self.pos += self.direction() * f64::from(self.speed);
    }
}

/// Axis-aligned arena [0, W] x [0, H]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if `pos` lies in the closed rectangle, with `slack` absolute
    /// tolerance on each side
    pub fn contains(&self, pos: DVec2, slack: f64) -> bool {
        pos.x >= -slack
            && pos.x <= self.width + slack
            && pos.y >= -slack
            && pos.y <= self.height + slack
    }
}

/// The next wall a mover will hit and the straight-line distance to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedEvent {
    pub distance: f64,
    pub wall: Wall,
}

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Two movers occupied the same point
    Coincidence,
    /// The bounce budget ran out without a meeting
    BudgetExhausted,
    /// The rendering collaborator signalled shutdown
    RendererClosed,
}

/// Complete scheduler state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    pub arena: Arena,
    /// Movers in spawn order; iteration order is stable
    pub movers: Vec<Mover>,
    /// Parallel to `movers`: next wall impact per mover
    pub events: Vec<PredictedEvent>,
    /// Parallel to `movers`: event distance / mover speed
    pub time_to_event: Vec<f64>,
    pub bounces_remaining: u32,
    pub coincidence_detected: bool,
    /// Coincidence tolerance; 0.0 is exact position equality
    pub eps: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_numbering() {
        assert_eq!(Wall::Right.index(), 1);
        assert_eq!(Wall::Top.index(), 2);
        assert_eq!(Wall::Left.index(), 3);
        assert_eq!(Wall::Bottom.index(), 4);
        assert!(Wall::Right.is_vertical());
        assert!(Wall::Left.is_vertical());
        assert!(!Wall::Top.is_vertical());
    }

    #[test]
    fn test_mover_heading_stays_normalized() {
        let mut mover = Mover::new(0, DVec2::ZERO, -45.0, 1);
        assert_eq!(mover.heading(), 315.0);
        mover.turn_left(90.0);
        assert_eq!(mover.heading(), 45.0);
        mover.set_heading(540.0);
        assert_eq!(mover.heading(), 180.0);
    }

    #[test]
    fn test_mover_step_translates_by_speed() {
        let mut mover = Mover::new(0, DVec2::new(10.0, 20.0), 90.0, 5);
        mover.step();
        assert!((mover.pos.x - 10.0).abs() < 1e-9);
        assert!((mover.pos.y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_arena_containment() {
        let arena = Arena::new(320.0, 360.0);
        assert!(arena.contains(DVec2::new(0.0, 0.0), 0.0));
        assert!(arena.contains(DVec2::new(320.0, 360.0), 0.0));
        assert!(!arena.contains(DVec2::new(-0.1, 0.0), 0.0));
        assert!(!arena.contains(DVec2::new(0.0, 360.1), 0.0));
        // Slack admits float drift but nothing more
        assert!(arena.contains(DVec2::new(320.0 + 1e-12, 0.0), 1e-9));
    }

    #[test]
    fn test_rng_state_is_reproducible() {
        use rand::Rng;
        let a: f64 = RngState::new(42).to_rng().random();
        let b: f64 = RngState::new(42).to_rng().random();
        assert_eq!(a, b);
    }
}
