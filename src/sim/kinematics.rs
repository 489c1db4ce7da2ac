//! Random kinematics
//!
//! Initial velocities are drawn per axis from a piecewise-linear inverse-CDF
//! approximation of a standard half-normal, then folded into a heading and a
//! small integer speed.

use glam::DVec2;
use rand::Rng;

use super::state::{Arena, Mover};
use crate::error::SimError;
use crate::settings::SimConfig;

/// Draw one signed speed component.
///
/// The magnitude is `rms` times a z-score interpolated from the standard
/// normal quantile table, clipped into `[lo, hi]` (a non-zero `lo` raises
/// small magnitudes up to the floor). The sign comes from folding the
/// percentile around 50. The effective maximum magnitude is `2.326 * rms`.
pub fn sample_signed_speed(rng: &mut impl Rng, rms: f64, lo: f64, hi: f64) -> f64 {
    signed_speed_from_percentile(rng.random::<f64>() * 100.0, rms, lo, hi)
}

fn signed_speed_from_percentile(percentile: f64, rms: f64, lo: f64, hi: f64) -> f64 {
    let (sign, rank) = if percentile >= 50.0 {
        (1.0, percentile - 50.0)
    } else {
        (-1.0, 50.0 - percentile)
    };
    let z = if rank <= 25.0 {
        0.675 * rank / 25.0
    } else if rank <= 40.0 {
        0.675 + (1.282 - 0.675) * (rank - 25.0) / 15.0
    } else if rank <= 45.0 {
        1.282 + (1.645 - 1.282) * (rank - 40.0) / 5.0
    } else if rank <= 47.5 {
        1.645 + (1.96 - 1.645) * (rank - 45.0) / 2.5
    } else {
        1.96 + (2.326 - 1.96) * (rank - 47.5) / 1.5
    };
    sign * (rms * z).clamp(lo, hi)
}

/// Angle of `(vx, vy)` in degrees, covering all four quadrants.
///
/// `atan` alone only answers in quadrants 1 and 4; a negative `vx` shifts
/// the result by half a turn toward the correct side, so third-quadrant
/// vectors come back in [-180, -90).
pub fn heading_from_vector(vx: f64, vy: f64) -> Result<f64, SimError> {
    if vx == 0.0 {
        if vy == 0.0 {
            return Err(SimError::DegenerateVector);
        }
        return Ok(90.0 * vy.signum());
    }
    let mut rad = (vy / vx).atan();
    if vx < 0.0 {
        if vy <= 0.0 {
            rad -= std::f64::consts::PI;
        } else {
            rad += std::f64::consts::PI;
        }
    }
    Ok(rad.to_degrees())
}

/// Give a mover a random orientation and speed.
///
/// Two independent signed components pick the direction, applied as a left
/// rotation from the current heading. Their magnitude clamps into
/// `[speed_min, speed_max]` and rounds to the integer speed the scheduler
/// uses as its time-unit divisor.
pub fn assign_random_velocity(
    mover: &mut Mover,
    rng: &mut impl Rng,
    config: &SimConfig,
) -> Result<(), SimError> {
    let vx = sample_signed_speed(
        rng,
        config.rms_speed,
        config.dim_speed_min,
        config.dim_speed_max,
    );
    let vy = sample_signed_speed(
        rng,
        config.rms_speed,
        config.dim_speed_min,
        config.dim_speed_max,
    );
    mover.turn_left(heading_from_vector(vx, vy)?);
    let scalar = vx.hypot(vy);
    mover.speed = scalar
        .clamp(f64::from(config.speed_min), f64::from(config.speed_max))
        .round() as u32;
    Ok(())
}

/// Uniform spawn position with integer-truncated coordinates
pub fn random_spawn(rng: &mut impl Rng, arena: &Arena) -> DVec2 {
    let x = (rng.random::<f64>() * arena.width).floor();
    let y = (rng.random::<f64>() * arena.height).floor();
    DVec2::new(x, y)
}
