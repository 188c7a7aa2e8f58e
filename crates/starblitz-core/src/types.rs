//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// 2D position in world units. +X is right, +Y is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// World-space rectangle visible to the camera.
///
/// The external scene layer unprojects its viewport corners once and hands
/// them in; the simulation never talks to a camera directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Bottom-left corner in world units.
    pub min: Vec2,
    /// Top-right corner in world units.
    pub max: Vec2,
}

impl Viewport {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Whether a point lies inside the viewport expanded by `margin`.
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x >= self.min.x - margin
            && point.x <= self.max.x + margin
            && point.y >= self.min.y - margin
            && point.y <= self.max.y + margin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(crate::constants::VIEW_WIDTH, crate::constants::VIEW_HEIGHT),
        }
    }
}

/// The axis-aligned rectangle the player ship is clamped to.
///
/// Computed once at spawn from the viewport and a padding margin, read-only
/// afterward. A collapsed rectangle (min > max after padding) is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl MoveBounds {
    /// Derive the movable rectangle from the viewport, inset by `padding`
    /// on every side.
    pub fn from_viewport(viewport: &Viewport, padding: f32) -> Self {
        Self {
            x_min: viewport.min.x + padding,
            x_max: viewport.max.x - padding,
            y_min: viewport.min.y + padding,
            y_max: viewport.max.y - padding,
        }
    }

    /// Clamp a point into the bounds, each axis independently.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.x_min, self.x_max),
            point.y.clamp(self.y_min, self.y_max),
        )
    }
}
