//! Controller flags attached to motion statements.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Optional controller flags for a motion statement.
///
/// Only flags that were explicitly set are emitted, in declaration order, as
/// `.name = value` pairs inside the statement's option brace. Leaving every flag
/// unset renders `{ }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionOptions {
    /// Drive (or face) backwards. Negates the travel distance and adds 180° to point turns.
    pub reversed: Option<bool>,
    /// Upper bound on controller output, in the controller's own units.
    pub max_speed: Option<f64>,
    /// Lower bound on controller output.
    pub min_speed: Option<f64>,
    /// Distance (or angle) from the target at which the controller may move on.
    pub early_exit_range: Option<f64>,
}

impl MotionOptions {
    /// No flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for `MotionOptions::new().with_reversed(true)`.
    pub fn reversed() -> Self {
        Self::new().with_reversed(true)
    }

    /// Sets the `reversed` flag.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = Some(reversed);
        self
    }

    /// Caps controller output.
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    /// Floors controller output.
    pub fn with_min_speed(mut self, min_speed: f64) -> Self {
        self.min_speed = Some(min_speed);
        self
    }

    /// Lets the controller move on within `range` of the target.
    pub fn with_early_exit_range(mut self, range: f64) -> Self {
        self.early_exit_range = Some(range);
        self
    }

    /// Whether motion runs backwards. Unset means forwards.
    pub fn is_reversed(&self) -> bool {
        self.reversed.unwrap_or(false)
    }
}

impl fmt::Display for MotionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        if let Some(reversed) = self.reversed {
            write!(f, ".reversed = {reversed}, ")?;
        }
        let numeric = [
            ("maxSpeed", self.max_speed),
            ("minSpeed", self.min_speed),
            ("earlyExitRange", self.early_exit_range),
        ];
        for (name, value) in numeric {
            if let Some(value) = value {
                write!(f, ".{name} = {value}, ")?;
            }
        }
        f.write_char('}')
    }
}
