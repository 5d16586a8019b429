//! Robot footprint and field-to-screen geometry for viewers.
//!
//! Nothing in here affects the program or the pose chain. These are the shapes and
//! coordinate mappings an external viewer needs to draw a step.

use crate::pose::Pose;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rectangular outline of the robot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Side-to-side extent.
    pub width: f64,
    /// Front-to-back extent, along the heading.
    pub height: f64,
}

impl Footprint {
    /// Outline `width` across and `height` along the heading.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Field-space corners of the outline centred on `pose`, in order
    /// front-left, front-right, back-right, back-left.
    pub fn corners(&self, pose: Pose) -> [DVec2; 4] {
        let forward = pose.forward();
        // Clockwise perpendicular of the heading.
        let right = DVec2::new(forward.y, -forward.x);
        let half_w = right * (self.width / 2.0);
        let half_h = forward * (self.height / 2.0);
        let center = pose.position();
        [
            center + half_h - half_w,
            center + half_h + half_w,
            center - half_h + half_w,
            center - half_h - half_w,
        ]
    }

    /// Midpoint of the front edge, where a heading marker is drawn.
    pub fn front_center(&self, pose: Pose) -> DVec2 {
        pose.position() + pose.forward() * (self.height / 2.0)
    }
}

/// Field and window dimensions used to map field inches onto a square viewer window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    /// Window side length in pixels.
    pub window_size: u32,
    /// Field side length in inches, including the perimeter margin.
    pub field_width: f64,
    /// Side length of one field tile in inches.
    pub tile_size: f64,
}

impl FieldGeometry {
    /// Side of a standard 600 mm foam tile, in inches.
    pub const TILE_SIZE: f64 = 3600.0 / 6.0 / 25.4;

    /// Pixels per field inch.
    pub fn scale(&self) -> f64 {
        f64::from(self.window_size) / self.field_width
    }

    /// Window pixel for a field point. The field origin sits at the window centre
    /// and +Y points up the screen.
    pub fn to_screen(&self, point: DVec2) -> (i32, i32) {
        let half = f64::from(self.window_size) / 2.0;
        let scale = self.scale();
        let x = point.x * scale + half;
        let y = -point.y * scale + half;
        (x as i32, y as i32)
    }

    /// Field point `(column, row)` tiles from the origin.
    pub fn tiles(&self, column: f64, row: f64) -> DVec2 {
        DVec2::new(column, row) * self.tile_size
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            window_size: 700,
            field_width: 3600.0 / 25.6 + 4.0,
            tile_size: Self::TILE_SIZE,
        }
    }
}
