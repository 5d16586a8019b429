//! Angle conversion and heading math.
//!
//! Headings are measured in degrees from the field's +Y axis ("north"), growing
//! clockwise: heading 0 drives along +Y and heading 90 drives along +X. This is
//! why [`heading_to`] feeds `atan2` the X offset first.

use glam::DVec2;
use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}

/// Converts an angle in radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians / PI * 180.0
}

/// Heading (degrees) of the straight line from `from` towards `to`.
///
/// A zero-length offset yields `0.0`, matching `atan2(0, 0)`.
pub fn heading_to(from: DVec2, to: DVec2) -> f64 {
    let delta = to - from;
    radians_to_degrees(delta.x.atan2(delta.y))
}

/// Unit vector pointing along `heading` (degrees).
pub fn heading_vector(heading: f64) -> DVec2 {
    let radians = degrees_to_radians(heading);
    DVec2::new(radians.sin(), radians.cos())
}

/// Point reached by driving `distance` from `position` along `heading` (degrees).
///
/// Negative distances drive backwards without changing the heading.
pub fn advance(position: DVec2, heading: f64, distance: f64) -> DVec2 {
    position + heading_vector(heading) * distance
}
