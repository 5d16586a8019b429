//! The append-only command log that turns motion intents into a controller program.
//!
//! The entry point is [`CommandLog`]. Create it from a [`RobotConfig`], append
//! motions in the order the robot should run them, then call
//! [`CommandLog::render_program`] for the controller source or
//! [`CommandLog::query_state`] to step through the routine.

use crate::command::{Command, Motion};
use crate::error::{ProgramError, Result};
use crate::field::Footprint;
use crate::options::MotionOptions;
use crate::pose::Pose;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Construction-time settings for a [`CommandLog`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Robot width in field units (inches), used only for drawing.
    pub width: f64,
    /// Robot length along its heading, used only for drawing.
    pub height: f64,
    /// Pose before the first command.
    pub initial_pose: Pose,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            width: 18.0,
            height: 18.0,
            initial_pose: Pose::ORIGIN,
        }
    }
}

impl RobotConfig {
    /// Config with the given footprint, starting at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Starts the chain at `pose` instead of the origin.
    pub fn with_initial_pose(mut self, pose: Pose) -> Self {
        self.initial_pose = pose;
        self
    }
}

/// Result of a playback query: the pose(s) around one step of the routine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepState<'a> {
    /// Step 0: the robot before any command.
    Start(Pose),
    /// Step `k > 0`: the `k`-th command.
    Command(&'a Command),
}

impl<'a> StepState<'a> {
    /// `[initial]` for the start step, `[start, end]` for a command step.
    pub fn poses(&self) -> Vec<Pose> {
        match self {
            StepState::Start(pose) => vec![*pose],
            StepState::Command(cmd) => vec![cmd.start_pose(), cmd.end_pose()],
        }
    }

    /// The command for this step, `None` at the start.
    pub fn command(&self) -> Option<&'a Command> {
        match self {
            StepState::Start(_) => None,
            StepState::Command(cmd) => Some(*cmd),
        }
    }

    /// Pose at the beginning of this step.
    pub fn before(&self) -> Pose {
        match self {
            StepState::Start(pose) => *pose,
            StepState::Command(cmd) => cmd.start_pose(),
        }
    }

    /// Pose at the end of this step.
    pub fn after(&self) -> Pose {
        match self {
            StepState::Start(pose) => *pose,
            StepState::Command(cmd) => cmd.end_pose(),
        }
    }
}

/// Ordered history of resolved commands plus the pose they start from.
///
/// Every appended command starts where the previous one ended (or at the initial
/// pose), and its end pose is fixed at append time, so later appends never change
/// what earlier steps report.
#[derive(Clone, Debug, Serialize)]
pub struct CommandLog {
    config: RobotConfig,
    commands: Vec<Command>,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new(RobotConfig::default())
    }
}

impl CommandLog {
    /// Empty log; the first command starts at `config.initial_pose`.
    pub fn new(config: RobotConfig) -> Self {
        Self {
            config,
            commands: Vec::new(),
        }
    }

    /// Resolves `motion` against the current tail pose and appends it.
    pub fn append(&mut self, motion: Motion) {
        let command = Command::new(self.current_tail_state(), motion);
        debug!(
            step = self.commands.len() + 1,
            end = %command.end_pose(),
            "appended {}",
            command.to_string().trim_end()
        );
        self.commands.push(command);
    }

    /// Turns toward `target` and drives to it.
    pub fn move_to_point(&mut self, target: impl Into<DVec2>, options: MotionOptions) {
        self.append(Motion::MoveToPoint {
            target: target.into(),
            options,
        });
    }

    /// Drives `distance` along the current heading.
    pub fn move_distance(&mut self, distance: f64, options: MotionOptions) {
        self.append(Motion::MoveDistance { distance, options });
    }

    /// Turns in place to face `target`.
    pub fn turn_to_point(&mut self, target: impl Into<DVec2>, options: MotionOptions) {
        self.append(Motion::TurnToPoint {
            target: target.into(),
            options,
        });
    }

    /// Turns in place to `heading` degrees.
    pub fn turn_to_heading(&mut self, heading: f64, options: MotionOptions) {
        self.append(Motion::TurnToHeading { heading, options });
    }

    /// Overwrites the tracked pose.
    pub fn set_pose(&mut self, pose: impl Into<Pose>) {
        self.append(Motion::SetPose(pose.into()));
    }

    /// Waits `millis` milliseconds.
    pub fn delay(&mut self, millis: u32) {
        self.append(Motion::Delay { millis });
    }

    /// Inserts a literal statement into the program.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.append(Motion::Text(text.into()));
    }

    /// Controller source for the whole routine, one statement per command.
    pub fn render_program(&self) -> String {
        self.commands.iter().map(ToString::to_string).collect()
    }

    /// Before/after poses of step `index`, where step 0 is the initial pose and
    /// step `k` is the `k`-th command.
    pub fn query_state(&self, index: usize) -> Result<StepState<'_>> {
        if index == 0 {
            return Ok(StepState::Start(self.config.initial_pose));
        }
        match self.commands.get(index - 1) {
            Some(command) => Ok(StepState::Command(command)),
            None => {
                warn!(index, steps = self.step_count(), "playback step out of range");
                Err(ProgramError::StepOutOfRange {
                    index,
                    steps: self.step_count(),
                })
            }
        }
    }

    /// End pose of the last command, or the initial pose if there is none.
    pub fn current_tail_state(&self) -> Pose {
        self.commands
            .last()
            .map_or(self.config.initial_pose, Command::end_pose)
    }

    /// Pose before any command.
    pub fn initial_pose(&self) -> Pose {
        self.config.initial_pose
    }

    /// Robot outline for drawing.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.config.width, self.config.height)
    }

    /// Settings the log was created with.
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Resolved commands in append order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of playback steps: the start plus one per command.
    pub fn step_count(&self) -> usize {
        self.commands.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_has_only_the_start_step() {
        let log = CommandLog::new(RobotConfig::new(10.0, 10.0));
        let state = log.query_state(0).unwrap();
        assert_eq!(state.poses(), vec![Pose::ORIGIN]);
        assert!(state.command().is_none());
        assert_eq!(log.render_program(), "");
        assert_eq!(log.step_count(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn set_pose_then_turn() {
        let mut log = CommandLog::new(RobotConfig::new(10.0, 10.0));
        log.set_pose((0.0, -20.0, 0.0));
        log.turn_to_heading(-45.0, MotionOptions::new());

        assert_eq!(
            log.query_state(1).unwrap().poses(),
            vec![Pose::ORIGIN, Pose::new(0.0, -20.0, 0.0)]
        );
        assert_eq!(
            log.query_state(2).unwrap().poses(),
            vec![Pose::new(0.0, -20.0, 0.0), Pose::new(0.0, -20.0, -45.0)]
        );
        assert_eq!(
            log.render_program(),
            "SetPose(0, -20, 0);\nTurnToHeading(-45, { });\n"
        );
    }

    #[test]
    fn initial_pose_seeds_the_chain() {
        let start = Pose::new(12.0, -36.0, 90.0);
        let mut log = CommandLog::new(RobotConfig::default().with_initial_pose(start));
        assert_eq!(log.current_tail_state(), start);
        log.move_distance(6.0, MotionOptions::new());
        assert_eq!(log.query_state(1).unwrap().before(), start);
        assert!((log.current_tail_state().x - 18.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_query_fails_without_mutation() {
        let mut log = CommandLog::default();
        log.delay(250);
        let before = log.render_program();

        let err = log.query_state(log.len() + 1).unwrap_err();
        assert_eq!(err, ProgramError::StepOutOfRange { index: 2, steps: 2 });
        assert_eq!(log.len(), 1);
        assert_eq!(log.render_program(), before);
    }
}
