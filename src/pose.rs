//! Planar robot pose.

use crate::geometry;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and heading of the robot on the field.
///
/// `theta` is in degrees, measured clockwise from the +Y axis (see [`crate::geometry`]).
/// `Pose` is `Copy`: every command stores its own copy, so no recorded pose can be
/// changed through another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose {
    /// The field origin facing +Y.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        theta: 0.0,
    };

    /// Pose at `(x, y)` with heading `theta` in degrees.
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Position component as a point.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Unit vector the robot is facing.
    pub fn forward(&self) -> DVec2 {
        geometry::heading_vector(self.theta)
    }

    /// Same position, new heading.
    pub fn with_heading(self, theta: f64) -> Self {
        Self { theta, ..self }
    }

    /// Same heading, new position.
    pub fn with_position(self, position: DVec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    /// Pose after driving `distance` along the current heading (backwards if negative).
    pub fn advanced(self, distance: f64) -> Self {
        self.with_position(geometry::advance(self.position(), self.theta, distance))
    }

    /// Pose after turning in place to face `target`, or away from it when `reversed`.
    pub fn facing(self, target: DVec2, reversed: bool) -> Self {
        let heading = geometry::heading_to(self.position(), target);
        self.with_heading(if reversed { heading + 180.0 } else { heading })
    }
}

impl From<(f64, f64, f64)> for Pose {
    fn from((x, y, theta): (f64, f64, f64)) -> Self {
        Self::new(x, y, theta)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}, Theta: {}", self.x, self.y, self.theta)
    }
}
