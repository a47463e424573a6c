use crate::constraints::{Constraint, ConstraintResult, ScheduleContext, Strength};
use crate::model::Assignment;
use crate::schedule::Schedule;

/// Penalty applied to a lab hour that is split from its siblings.
pub const DEFAULT_CONSECUTIVE_LAB_WEIGHT: u32 = 10;

/// Prefers lab hours of a course to form one contiguous block per day.
///
/// A lab candidate is penalised when its course already has labs on the same
/// day and the candidate is adjacent to none of them. The first lab of a day
/// carries no penalty.
#[derive(Debug, Clone, Copy)]
pub struct PreferConsecutiveLabHours {
    weight: u32,
}

impl PreferConsecutiveLabHours {
    pub fn new(weight: u32) -> Self {
        Self { weight }
    }
}

impl Default for PreferConsecutiveLabHours {
    fn default() -> Self {
        Self::new(DEFAULT_CONSECUTIVE_LAB_WEIGHT)
    }
}

impl Constraint for PreferConsecutiveLabHours {
    fn name(&self) -> &'static str {
        "PreferConsecutiveLabHours"
    }

    fn strength(&self) -> Strength {
        Strength::Soft {
            weight: self.weight,
        }
    }

    fn check(&self, schedule: &Schedule, candidate: &Assignment, _: &ScheduleContext<'_>) -> ConstraintResult {
        if !candidate.session.is_lab() {
            return ConstraintResult::pass();
        }
        let mut same_day_labs = schedule
            .by_course(candidate.course_id())
            .iter()
            .filter(|a| a.session.is_lab() && a.day() == candidate.day())
            .peekable();
        if same_day_labs.peek().is_none() {
            return ConstraintResult::pass();
        }
        let adjacent = same_day_labs.any(|a| a.timeslot.is_adjacent_to(&candidate.timeslot));
        ConstraintResult::check(adjacent, "Prefer consecutive lab hours.")
    }
}
