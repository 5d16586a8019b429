//! # auton-builder
//!
//! Authoring for linear autonomous routines on wheeled robots.
//!
//! Append high-level motions (drive to a point, drive a distance, turn to a heading
//! or a point, set the pose, wait) to a [`CommandLog`]. Each one is resolved against
//! the pose the previous one ended at, producing a chain of kinematic end poses and a
//! controller statement per step. [`CommandLog::render_program`] concatenates the
//! statements; [`CommandLog::query_state`] and the [`playback`] helpers let a viewer
//! step through the routine.
//!
//! Only end poses are computed. There is no dynamics or collision model.

pub mod command;
pub mod error;
pub mod field;
pub mod geometry;
pub mod options;
pub mod playback;
pub mod pose;
pub mod program;

pub use command::*;
pub use error::*;
pub use field::*;
pub use options::*;
pub use playback::*;
pub use pose::*;
pub use program::*;
