//! Event-driven bounce scheduler
//!
//! Keeps a time-to-next-wall estimate per mover, jumps simulation time to
//! the soonest event, reflects the struck mover and re-predicts only that
//! one. A run ends on mover coincidence, an exhausted bounce budget, or
//! renderer shutdown.

use crate::consts::ARENA_SLACK;
use crate::error::SimError;
use crate::normalize_heading;
use crate::render::{MoverStyle, Renderer};
use crate::settings::SimConfig;

use super::kinematics::{assign_random_velocity, random_spawn};
use super::predict::predict_wall_impact;
use super::state::{Arena, Mover, Outcome, RngState, SimState, Wall};

/// Mirror a heading across a wall's normal, keeping it in [0, 360).
///
/// Vertical walls negate the x velocity component (180 - theta); horizontal
/// walls negate the y component (360 - theta). Total and self-inverse.
pub fn mirror_heading(heading: f64, wall: Wall) -> f64 {
    if wall.is_vertical() {
        normalize_heading(180.0 - heading)
    } else {
        normalize_heading(360.0 - heading)
    }
}

/// Quadrants a heading can strike each wall from
fn striking_quadrants(wall: Wall) -> [u8; 2] {
    match wall {
        Wall::Right => [1, 4],
        Wall::Top => [1, 2],
        Wall::Left => [2, 3],
        Wall::Bottom => [3, 4],
    }
}

/// Reflect a mover off the wall it was predicted to hit.
///
/// A wall the mover's heading quadrant cannot face means the predictor and
/// the scheduler disagree; that is fatal.
pub fn reflect(mover: &mut Mover, wall: Wall) -> Result<(), SimError> {
    let quadrant = mover.heading_quadrant();
    if !striking_quadrants(wall).contains(&quadrant) {
        return Err(SimError::ImpossibleBounce { wall, quadrant });
    }
    mover.set_heading(mirror_heading(mover.heading(), wall));
    Ok(())
}

/// Position equality, exact when `eps` is zero
pub fn coincides(a: &Mover, b: &Mover, eps: f64) -> bool {
    if eps == 0.0 {
        a.pos == b.pos
    } else {
        a.pos.distance_squared(b.pos) <= eps * eps
    }
}

/// First pair of movers occupying the same point, in spawn order
fn first_coincident_pair(movers: &[Mover], eps: f64) -> Option<(usize, usize)> {
    for i in 0..movers.len() {
        for j in (i + 1)..movers.len() {
            if coincides(&movers[i], &movers[j], eps) {
                return Some((i, j));
            }
        }
    }
    None
}

/// A scheduler plus its rendering collaborator
pub struct Scene<R: Renderer> {
    pub state: SimState,
    renderer: R,
}

impl<R: Renderer> Scene<R> {
    /// Spawn movers with random poses and velocities, prime the per-mover
    /// predictions, and register everything with the renderer.
    pub fn initialize(config: &SimConfig, seed: u64, renderer: R) -> Result<Self, SimError> {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let mut renderer = renderer;

        let mut movers = Vec::with_capacity(config.mover_count);
        for id in 0..config.mover_count as u32 {
            let pos = random_spawn(&mut rng, &arena);
            let mut mover = Mover::new(id, pos, 0.0, config.speed_min);
            assign_random_velocity(&mut mover, &mut rng, config)?;
            log::info!(
                "mover {id} spawned at ({}, {}) heading {:.2} speed {}",
                pos.x,
                pos.y,
                mover.heading(),
                mover.speed
            );
            renderer.add_mover(id, &MoverStyle::default(), pos);
            renderer.set_heading(id, mover.heading());
            movers.push(mover);
        }

        let mut events = Vec::with_capacity(movers.len());
        let mut time_to_event = Vec::with_capacity(movers.len());
        for mover in &movers {
            let event = predict_wall_impact(mover, &arena)?;
            time_to_event.push(event.distance / f64::from(mover.speed));
            events.push(event);
        }

        Ok(Self {
            state: SimState {
                seed,
                rng_state,
                arena,
                movers,
                events,
                time_to_event,
                bounces_remaining: config.bounce_budget,
                coincidence_detected: false,
                eps: config.coincidence_eps,
            },
            renderer,
        })
    }

    /// Rebuild a scene around previously captured state
    pub fn from_state(state: SimState, renderer: R) -> Self {
        Self { state, renderer }
    }

    /// Run until coincidence, an exhausted bounce budget, or renderer
    /// shutdown.
    pub fn run_until_coincidence_or_budget(&mut self) -> Result<Outcome, SimError> {
        while self.state.bounces_remaining > 0 {
            if self.renderer.closed() {
                log::info!("renderer closed, stopping");
                return Ok(Outcome::RendererClosed);
            }
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
        log::info!("bounce budget exhausted without a meeting");
        Ok(Outcome::BudgetExhausted)
    }

    /// One scheduler iteration: advance everyone to the soonest wall impact,
    /// reflect the struck mover, refresh only its prediction. Returns an
    /// outcome when a coincidence cut the advance short.
    ///
    /// Safe to abandon between calls; no mover is left half-updated.
    pub fn step(&mut self) -> Result<Option<Outcome>, SimError> {
        let state = &mut self.state;

        // Soonest wall impact; first index wins ties
        let mut k = 0;
        for i in 1..state.time_to_event.len() {
            if state.time_to_event[i] < state.time_to_event[k] {
                k = i;
            }
        }
        let delta = state.time_to_event[k];

        // Advance in integer unit steps, sweeping for meetings after each.
        // The fractional remainder of delta is not walked; the bookkeeping
        // below still subtracts the full delta, matching the event clock.
        for _ in 0..delta.floor() as u64 {
            for mover in &mut state.movers {
                mover.step();
                self.renderer.forward(mover.id, f64::from(mover.speed));
                if !state.arena.contains(mover.pos, ARENA_SLACK) {
                    return Err(SimError::OutOfArena {
                        id: mover.id,
                        x: mover.pos.x,
                        y: mover.pos.y,
                    });
                }
            }
            if let Some((i, j)) = first_coincident_pair(&state.movers, state.eps) {
                state.coincidence_detected = true;
                log::info!(
                    "movers {} and {} met at ({}, {})",
                    state.movers[i].id,
                    state.movers[j].id,
                    state.movers[i].pos.x,
                    state.movers[i].pos.y
                );
                return Ok(Some(Outcome::Coincidence));
            }
        }

        let wall = state.events[k].wall;
        reflect(&mut state.movers[k], wall)?;
        self.renderer
            .set_heading(state.movers[k].id, state.movers[k].heading());
        log::debug!(
            "mover {} bounced off the {wall} wall, new heading {:.2}",
            state.movers[k].id,
            state.movers[k].heading()
        );

        for t in &mut state.time_to_event {
            *t -= delta;
        }

        let event = predict_wall_impact(&state.movers[k], &state.arena)?;
        state.time_to_event[k] = event.distance / f64::from(state.movers[k].speed);
        state.events[k] = event;
        state.bounces_remaining -= 1;

        Ok(None)
    }

    /// Bounces consumed so far, given the budget the run started with
    pub fn bounces_taken(&self, budget: u32) -> u32 {
        budget.saturating_sub(self.state.bounces_remaining)
    }
}
