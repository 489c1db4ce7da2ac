//! Deterministic simulation core
//!
//! Everything here is pure and reproducible:
//! - Seeded RNG only
//! - Stable mover order (by spawn index)
//! - No rendering dependencies beyond `Renderer` trait calls

pub mod kinematics;
pub mod predict;
pub mod schedule;
pub mod state;

pub use kinematics::{assign_random_velocity, heading_from_vector, sample_signed_speed};
pub use predict::predict_wall_impact;
pub use schedule::{Scene, coincides, mirror_heading, reflect};
pub use state::{Arena, Mover, Outcome, PredictedEvent, RngState, SimState, Wall};
