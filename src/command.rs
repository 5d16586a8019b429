//! Motion intents and the resolved commands built from them.
//!
//! A [`Motion`] is what the caller asks for. A [`Command`] is that request pinned to
//! the pose the robot starts it from, together with the pose it ends at. The end pose
//! is computed once, in [`Command::new`], and never recomputed.

use crate::options::MotionOptions;
use crate::pose::Pose;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statement names understood by the robot controller.
pub struct FunctionName;

impl FunctionName {
    pub const MOVE_TO_POINT: &'static str = "MoveToPoint";
    pub const MOVE_DISTANCE: &'static str = "MoveDistance";
    pub const TURN_TO_POINT: &'static str = "TurnToPoint";
    pub const TURN_TO_HEADING: &'static str = "TurnToHeading";
    pub const SET_POSE: &'static str = "SetPose";
    pub const DELAY: &'static str = "pros::delay";
}

/// A single high-level step requested by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Overwrite the tracked pose (`SetPose(x, y, theta)`).
    SetPose(Pose),
    /// Turn to face `target`, then drive the straight-line distance to it.
    MoveToPoint {
        target: DVec2,
        options: MotionOptions,
    },
    /// Drive along the current heading.
    MoveDistance {
        distance: f64,
        options: MotionOptions,
    },
    /// Turn in place to face `target`.
    TurnToPoint {
        target: DVec2,
        options: MotionOptions,
    },
    /// Turn in place to an absolute heading (degrees).
    TurnToHeading {
        heading: f64,
        options: MotionOptions,
    },
    /// Pause for the given number of milliseconds.
    Delay { millis: u32 },
    /// Literal program text inserted as-is.
    Text(String),
}

impl Motion {
    /// Pose reached by performing this motion from `start`.
    pub fn end_pose(&self, start: Pose) -> Pose {
        match self {
            Motion::SetPose(pose) => *pose,
            Motion::TurnToHeading { heading, .. } => start.with_heading(*heading),
            Motion::TurnToPoint { target, options } => {
                start.facing(*target, options.is_reversed())
            }
            Motion::MoveDistance { .. } => start.advanced(self.signed_distance(start)),
            Motion::MoveToPoint { target, options } => {
                // Turn first, then drive from the turned pose.
                let turned = start.facing(*target, options.is_reversed());
                turned.advanced(self.signed_distance(start))
            }
            Motion::Delay { .. } | Motion::Text(_) => start,
        }
    }

    /// Distance driven along the heading, negative when reversed. Zero for turns and text.
    pub fn signed_distance(&self, start: Pose) -> f64 {
        let (distance, options) = match self {
            Motion::MoveDistance { distance, options } => (*distance, options),
            Motion::MoveToPoint { target, options } => {
                ((target.x - start.x).hypot(target.y - start.y), options)
            }
            _ => return 0.0,
        };
        if options.is_reversed() { -distance } else { distance }
    }

    /// Whether this motion leaves the pose untouched regardless of where it starts.
    pub fn is_pose_neutral(&self) -> bool {
        matches!(self, Motion::Delay { .. } | Motion::Text(_))
    }

    /// Controller statement name, or `None` for literal text.
    pub fn function_name(&self) -> Option<&'static str> {
        match self {
            Motion::SetPose(_) => Some(FunctionName::SET_POSE),
            Motion::MoveToPoint { .. } => Some(FunctionName::MOVE_TO_POINT),
            Motion::MoveDistance { .. } => Some(FunctionName::MOVE_DISTANCE),
            Motion::TurnToPoint { .. } => Some(FunctionName::TURN_TO_POINT),
            Motion::TurnToHeading { .. } => Some(FunctionName::TURN_TO_HEADING),
            Motion::Delay { .. } => Some(FunctionName::DELAY),
            Motion::Text(_) => None,
        }
    }
}

/// A motion resolved against the pose it starts from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Command {
    start_pose: Pose,
    motion: Motion,
    end_pose: Pose,
}

impl Command {
    /// Resolves `motion` starting at `start_pose`.
    pub fn new(start_pose: Pose, motion: Motion) -> Self {
        let end_pose = motion.end_pose(start_pose);
        Self {
            start_pose,
            motion,
            end_pose,
        }
    }

    /// Pose before the command runs.
    pub fn start_pose(&self) -> Pose {
        self.start_pose
    }

    /// Pose after the command runs.
    pub fn end_pose(&self) -> Pose {
        self.end_pose
    }

    /// The intent this command was built from.
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// True for delays and inserted text.
    pub fn is_text(&self) -> bool {
        self.motion.is_pose_neutral()
    }
}

impl fmt::Display for Command {
    /// Writes the controller statement, terminated by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.motion.function_name().unwrap_or_default();
        match &self.motion {
            Motion::SetPose(pose) => {
                writeln!(f, "{name}({}, {}, {});", pose.x, pose.y, pose.theta)
            }
            Motion::MoveToPoint { target, options } | Motion::TurnToPoint { target, options } => {
                writeln!(f, "{name}({}, {}, {options});", target.x, target.y)
            }
            Motion::MoveDistance { options, .. } => {
                let distance = self.motion.signed_distance(self.start_pose);
                writeln!(f, "{name}({distance}, {options});")
            }
            Motion::TurnToHeading { heading, options } => {
                writeln!(f, "{name}({heading}, {options});")
            }
            Motion::Delay { millis } => writeln!(f, "{name}({millis});"),
            Motion::Text(text) => writeln!(f, "{text}"),
        }
    }
}
