//! Renderer seam
//!
//! The scheduler owns positions and headings and pushes updates outward
//! through this trait; the only signal flowing back is window close. A
//! windowed implementation lives outside the crate.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::PEN_SIZE;

/// Visual styling for one mover, applied once at scene setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverStyle {
    pub color: String,
    pub fill_color: String,
    pub pen_size: f64,
    /// Whether the mover draws a trail as it travels
    pub pen_down: bool,
}

impl Default for MoverStyle {
    fn default() -> Self {
        Self {
            color: "blue".into(),
            fill_color: "red".into(),
            pen_size: PEN_SIZE,
            pen_down: true,
        }
    }
}

/// Drawing surface consumed by the scheduler
pub trait Renderer {
    /// Register a mover: teleport pen-up to `pos`, apply styling, pen down.
    fn add_mover(&mut self, id: u32, style: &MoverStyle, pos: DVec2);

    /// Point the mover at an absolute heading in degrees.
    fn set_heading(&mut self, id: u32, heading: f64);

    /// Advance the mover by `distance` along its current heading.
    fn forward(&mut self, id: u32, distance: f64);

    /// True once the window has been closed; polled between scheduler steps.
    fn closed(&self) -> bool;
}

/// No-op renderer for tests and headless runs
#[derive(Debug, Default)]
pub struct HeadlessRenderer;

impl Renderer for HeadlessRenderer {
    fn add_mover(&mut self, _id: u32, _style: &MoverStyle, _pos: DVec2) {}
    fn set_heading(&mut self, _id: u32, _heading: f64) {}
    fn forward(&mut self, _id: u32, _distance: f64) {}
    fn closed(&self) -> bool {
        false
    }
}

/// Renderer that logs every drawing command at trace level
#[derive(Debug, Default)]
pub struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn add_mover(&mut self, id: u32, style: &MoverStyle, pos: DVec2) {
        log::trace!(
            "mover {id}: pen {} size {} fill {} at ({}, {})",
            style.color,
            style.pen_size,
            style.fill_color,
            pos.x,
            pos.y
        );
    }

    fn set_heading(&mut self, id: u32, heading: f64) {
        log::trace!("mover {id}: heading {heading:.2}");
    }

    fn forward(&mut self, id: u32, distance: f64) {
        log::trace!("mover {id}: forward {distance}");
    }

    fn closed(&self) -> bool {
        false
    }
}
