//! Operational parameters
//!
//! Defaults match the reference constants. A JSON file passed on the command
//! line can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Everything the simulation needs to set up a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width (x spans [0, arena_width])
    pub arena_width: f64,
    /// Arena height (y spans [0, arena_height])
    pub arena_height: f64,
    /// Viewport padding around the arena, forwarded to the renderer
    pub border: f64,
    /// RMS of the per-axis speed-component distribution
    pub rms_speed: f64,
    /// Per-axis component clamp
    pub dim_speed_min: f64,
    pub dim_speed_max: f64,
    /// Scalar speed clamp; the floor must stay >= 1
    pub speed_min: u32,
    pub speed_max: u32,
    /// Wall hits before the run gives up
    pub bounce_budget: u32,
    /// Number of movers to spawn
    pub mover_count: usize,
    /// Coincidence tolerance; 0.0 means exact position equality
    pub coincidence_eps: f64,
    /// Fixed seed; None draws one from entropy at startup
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            border: BORDER_PADDING,
            rms_speed: RMS_SPEED,
            dim_speed_min: DIM_SPEED_MIN,
            dim_speed_max: DIM_SPEED_MAX,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            bounce_budget: BOUNCE_BUDGET,
            mover_count: MOVER_COUNT,
            coincidence_eps: 0.0,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

impl SimConfig {
    /// Load and validate a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: SimConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::Invalid("arena dimensions must be positive"));
        }
        if self.speed_min < 1 {
            return Err(ConfigError::Invalid("speed_min must be at least 1"));
        }
        if self.speed_min > self.speed_max {
            return Err(ConfigError::Invalid("speed_min must not exceed speed_max"));
        }
        if self.dim_speed_min < 0.0 || self.dim_speed_min > self.dim_speed_max {
            return Err(ConfigError::Invalid(
                "dim speed clamp must satisfy 0 <= min <= max",
            ));
        }
        if self.mover_count < 2 {
            return Err(ConfigError::Invalid("need at least two movers"));
        }
        if self.coincidence_eps < 0.0 {
            return Err(ConfigError::Invalid("coincidence_eps must be non-negative"));
        }
        Ok(())
    }
}
