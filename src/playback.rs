//! Read-only helpers for stepping through a [`CommandLog`] in a viewer.
//!
//! The log itself holds no playback position. A viewer owns a [`PlaybackCursor`],
//! moves it in response to input, and asks for a [`StepView`] describing what to
//! draw for the current step.

use crate::error::{ProgramError, Result};
use crate::pose::Pose;
use crate::program::{CommandLog, StepState};
use tracing::trace;

/// Alpha of the pose a step starts from.
pub const BEFORE_ALPHA: u8 = 128;
/// Alpha of the pose a step ends at.
pub const AFTER_ALPHA: u8 = 156;

/// Wrap-around position over `0..steps`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackCursor {
    position: usize,
    steps: usize,
}

impl PlaybackCursor {
    /// Cursor at step 0 over `steps` positions.
    pub fn new(steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(ProgramError::EmptyTimeline);
        }
        Ok(Self { position: 0, steps })
    }

    /// Cursor at the start step of `log`.
    pub fn for_log(log: &CommandLog) -> Self {
        Self {
            position: 0,
            steps: log.step_count(),
        }
    }

    /// Current step index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of positions the cursor cycles over.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advances one step, wrapping from the last step back to the start.
    pub fn step_forward(&mut self) -> usize {
        self.position = (self.position + 1) % self.steps;
        trace!(position = self.position, "playback forward");
        self.position
    }

    /// Goes back one step, wrapping from the start to the last step.
    pub fn step_back(&mut self) -> usize {
        self.position = (self.position + self.steps - 1) % self.steps;
        trace!(position = self.position, "playback back");
        self.position
    }

    /// Jumps to `index`.
    pub fn seek(&mut self, index: usize) -> Result<usize> {
        if index >= self.steps {
            return Err(ProgramError::StepOutOfRange {
                index,
                steps: self.steps,
            });
        }
        self.position = index;
        Ok(index)
    }
}

/// A robot silhouette to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ghost {
    pub pose: Pose,
    pub alpha: u8,
}

/// Everything a viewer needs to draw one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepView {
    /// Silhouettes in draw order.
    pub ghosts: Vec<Ghost>,
    /// Caption lines: `Start`, or the step's program statement.
    pub caption: Vec<String>,
}

impl StepView {
    /// Builds the view for `state`.
    ///
    /// The start step shows the initial pose. Text and delay steps only show where the
    /// robot is, since they do not move it. Motion steps show both the pose before and
    /// the pose after.
    pub fn from_state(state: &StepState<'_>) -> Self {
        let before = Ghost {
            pose: state.before(),
            alpha: BEFORE_ALPHA,
        };
        let after = Ghost {
            pose: state.after(),
            alpha: AFTER_ALPHA,
        };
        match state {
            StepState::Start(_) => Self {
                ghosts: vec![before],
                caption: vec!["Start".to_string()],
            },
            StepState::Command(cmd) => {
                let text = cmd.to_string();
                Self {
                    ghosts: if cmd.is_text() {
                        vec![after]
                    } else {
                        vec![before, after]
                    },
                    caption: text.lines().map(str::to_string).collect(),
                }
            }
        }
    }

    /// View of the step under `cursor`.
    pub fn at(log: &CommandLog, cursor: &PlaybackCursor) -> Result<Self> {
        log.query_state(cursor.position())
            .map(|state| Self::from_state(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MotionOptions;

    fn sample_log() -> CommandLog {
        let mut log = CommandLog::default();
        log.move_distance(10.0, MotionOptions::new());
        log.delay(500);
        log
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let log = sample_log();
        let mut cursor = PlaybackCursor::for_log(&log);
        assert_eq!(cursor.steps(), 3);
        assert_eq!(cursor.step_back(), 2);
        assert_eq!(cursor.step_forward(), 0);
        assert_eq!(cursor.step_forward(), 1);
    }

    #[test]
    fn seek_rejects_past_end() {
        let mut cursor = PlaybackCursor::new(2).unwrap();
        assert_eq!(cursor.seek(1), Ok(1));
        assert_eq!(
            cursor.seek(2),
            Err(ProgramError::StepOutOfRange { index: 2, steps: 2 })
        );
        assert_eq!(cursor.position(), 1);
        assert_eq!(PlaybackCursor::new(0), Err(ProgramError::EmptyTimeline));
    }

    #[test]
    fn views_pick_ghosts_by_step_kind() {
        let log = sample_log();
        let mut cursor = PlaybackCursor::for_log(&log);

        let start = StepView::at(&log, &cursor).unwrap();
        assert_eq!(start.ghosts.len(), 1);
        assert_eq!(start.ghosts[0].alpha, BEFORE_ALPHA);
        assert_eq!(start.caption, vec!["Start"]);

        cursor.step_forward();
        let motion = StepView::at(&log, &cursor).unwrap();
        assert_eq!(motion.ghosts.len(), 2);
        assert_eq!(motion.ghosts[1].pose, Pose::new(0.0, 10.0, 0.0));
        assert_eq!(motion.caption, vec!["MoveDistance(10, { });"]);

        cursor.step_forward();
        let delay = StepView::at(&log, &cursor).unwrap();
        assert_eq!(delay.ghosts.len(), 1);
        assert_eq!(delay.ghosts[0].alpha, AFTER_ALPHA);
        assert_eq!(delay.caption, vec!["pros::delay(500);"]);
    }
}
