//! Overlap bans between student cohorts that share a timetable.
//!
//! Both rules scan committed assignments on the candidate's day and reject
//! the candidate if it overlaps a course of the complementary cohort.

use super::unknown;
use crate::constraints::{Constraint, ConstraintResult, ScheduleContext, Strength};
use crate::model::{Assignment, Course};
use crate::schedule::Schedule;

/// Year whose compulsory courses must stay clear of electives.
pub const THIRD_YEAR: u8 = 3;

/// True if some committed assignment on the candidate's day overlaps it and
/// belongs to a course accepted by `conflicts_with`.
fn overlaps_cohort<'a>(
    schedule: &Schedule,
    candidate: &Assignment,
    ctx: &ScheduleContext<'a>,
    conflicts_with: impl Fn(&'a Course) -> bool,
) -> bool {
    schedule
        .iter()
        .filter(|a| a.day() == candidate.day() && a.timeslot.overlaps(&candidate.timeslot))
        .filter_map(|a| ctx.course(a.course_id()))
        .any(conflicts_with)
}

/// Third-year courses and electives must not overlap each other.
///
/// Only the cross pairing is banned: two electives, or two third-year
/// courses, may share a slot under this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThirdYearVsElectivesNoOverlap;

impl Constraint for ThirdYearVsElectivesNoOverlap {
    fn name(&self) -> &'static str {
        "ThirdYearVsElectivesNoOverlap"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, schedule: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        let Some(course) = ctx.course(candidate.course_id()) else {
            return unknown("course", candidate.course_id());
        };
        let third_year = course.year == THIRD_YEAR;
        if !(third_year || course.is_elective) {
            return ConstraintResult::pass();
        }
        let clash = overlaps_cohort(schedule, candidate, ctx, |other| {
            (third_year && other.is_elective) || (course.is_elective && other.year == THIRD_YEAR)
        });
        ConstraintResult::check(!clash, "3rd-year courses must not overlap with electives.")
    }
}

/// Electives of two sibling departments must not overlap each other.
#[derive(Debug, Clone)]
pub struct CengVsSengElectivesNoOverlap {
    departments: [String; 2],
}

impl CengVsSengElectivesNoOverlap {
    /// Bans overlaps between electives of `first` and electives of `second`.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            departments: [first.into(), second.into()],
        }
    }

    /// The other department of the pair, if `department` is one of them.
    fn counterpart(&self, department: &str) -> Option<&str> {
        let [a, b] = &self.departments;
        if department == a.as_str() {
            Some(b.as_str())
        } else if department == b.as_str() {
            Some(a.as_str())
        } else {
            None
        }
    }
}

impl Default for CengVsSengElectivesNoOverlap {
    fn default() -> Self {
        Self::new("CENG", "SENG")
    }
}

impl Constraint for CengVsSengElectivesNoOverlap {
    fn name(&self) -> &'static str {
        "CengVsSengElectivesNoOverlap"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, schedule: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        let Some(course) = ctx.course(candidate.course_id()) else {
            return unknown("course", candidate.course_id());
        };
        if !course.is_elective {
            return ConstraintResult::pass();
        }
        let Some(counterpart) = self.counterpart(&course.department) else {
            return ConstraintResult::pass();
        };
        let clash = overlaps_cohort(schedule, candidate, ctx, |other| {
            other.is_elective && other.department == counterpart
        });
        if clash {
            let [a, b] = &self.departments;
            return ConstraintResult::fail(format!("{a} and {b} electives must not overlap."));
        }
        ConstraintResult::pass()
    }
}
