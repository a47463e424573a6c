//! Core constraint trait for judging a candidate placement.

use super::context::ScheduleContext;
use crate::model::Assignment;
use crate::schedule::Schedule;
use std::fmt::{self, Debug};

/// Whether a rule excludes a candidate or only penalises it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// Violation makes the candidate illegal.
    Hard,
    /// Violation adds `weight` to the candidate's penalty.
    Soft { weight: u32 },
}

/// Outcome of checking one candidate against one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintResult {
    pub ok: bool,
    pub message: Option<String>,
}

impl ConstraintResult {
    pub const fn pass() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }

    /// `pass()` when `ok`, otherwise `fail(message)`.
    pub fn check(ok: bool, message: &str) -> Self {
        if ok {
            Self::pass()
        } else {
            Self::fail(message)
        }
    }
}

impl fmt::Display for ConstraintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.ok, &self.message) {
            (true, _) => write!(f, "ok"),
            (false, Some(msg)) => write!(f, "violated: {msg}"),
            (false, None) => write!(f, "violated"),
        }
    }
}

/// A timetabling rule evaluated against the committed schedule.
///
/// # Contract
///
/// Implementations should:
/// - Consult only committed state in `schedule` and the read-only `ctx`
/// - Be deterministic for identical inputs
/// - Never mutate shared state (everything is borrowed immutably)
pub trait Constraint: Debug {
    /// Short rule name used when a failure carries no message.
    fn name(&self) -> &'static str;

    fn strength(&self) -> Strength;

    /// Judges `candidate` given what is already committed.
    fn check(
        &self,
        schedule: &Schedule,
        candidate: &Assignment,
        ctx: &ScheduleContext<'_>,
    ) -> ConstraintResult;

    fn is_hard(&self) -> bool {
        matches!(self.strength(), Strength::Hard)
    }

    /// Penalty contributed on violation; zero for hard rules.
    fn weight(&self) -> u32 {
        match self.strength() {
            Strength::Hard => 0,
            Strength::Soft { weight } => weight,
        }
    }
}
