//! Instructor-keyed rules.

use qtty::{Hour, Quantity};

use super::{unknown, MAX_THEORY_HOURS_PER_DAY};
use crate::constraints::{Constraint, ConstraintResult, ScheduleContext, Strength};
use crate::model::Assignment;
use crate::schedule::Schedule;

/// The course's instructor must be available during the candidate slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstructorAvailability;

impl Constraint for InstructorAvailability {
    fn name(&self) -> &'static str {
        "InstructorAvailability"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, _: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        let Some(instructor) = ctx.instructor_of(candidate.course_id()) else {
            return unknown("instructor for course", candidate.course_id());
        };
        ConstraintResult::check(
            instructor.is_available(&candidate.timeslot),
            "Instructor not available in this timeslot.",
        )
    }
}

/// Caps the THEORY hours an instructor teaches on a single day.
///
/// Lab hours do not count towards the cap.
#[derive(Debug, Clone, Copy)]
pub struct MaxTheoryHoursPerInstructorPerDay {
    limit: Quantity<Hour>,
}

impl MaxTheoryHoursPerInstructorPerDay {
    pub fn new(limit: Quantity<Hour>) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Quantity<Hour> {
        self.limit
    }
}

impl Default for MaxTheoryHoursPerInstructorPerDay {
    fn default() -> Self {
        Self::new(Quantity::new(MAX_THEORY_HOURS_PER_DAY))
    }
}

impl Constraint for MaxTheoryHoursPerInstructorPerDay {
    fn name(&self) -> &'static str {
        "MaxTheoryHoursPerInstructorPerDay"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, schedule: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        if !candidate.session.is_theory() {
            return ConstraintResult::pass();
        }
        let Some(instructor_id) = ctx.instructor_id_of(candidate.course_id()) else {
            return unknown("instructor for course", candidate.course_id());
        };
        let load = schedule.theory_hours(instructor_id, candidate.day()) + candidate.session.duration();
        if load.value() > self.limit.value() {
            return ConstraintResult::fail(format!(
                "Instructor exceeds max {} theory hours per day.",
                self.limit.value()
            ));
        }
        ConstraintResult::pass()
    }
}

/// An instructor cannot teach two overlapping sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInstructorOverlap;

impl Constraint for NoInstructorOverlap {
    fn name(&self) -> &'static str {
        "NoInstructorOverlap"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, schedule: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        let Some(instructor_id) = ctx.instructor_id_of(candidate.course_id()) else {
            return unknown("instructor for course", candidate.course_id());
        };
        let clash = schedule
            .by_instructor_day(instructor_id, candidate.day())
            .iter()
            .any(|a| a.timeslot.overlaps(&candidate.timeslot));
        ConstraintResult::check(!clash, "Instructor overlap conflict.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::fixtures::{asg, commit, course, slot, Catalog};
    use crate::model::{DayOfWeek, Instructor, SessionType, TimeSlot};

    fn catalog() -> Catalog {
        Catalog::new()
            .with_course(course("C1", 2, "CENG", false, 3, 2, "I1", 30))
            .with_course(course("C2", 1, "CENG", false, 3, 0, "I1", 30))
            .with_course(course("C3", 1, "SENG", false, 3, 0, "I2", 30))
    }

    #[test]
    fn availability_follows_instructor_windows() {
        let mut cat = catalog();
        cat.instructors[0] = Instructor::new("I1", "Dr. Ada", vec![slot(DayOfWeek::Tue, 10)]);
        let ctx = cat.ctx();
        let schedule = Schedule::new();

        let inside = asg("C1", SessionType::Theory, 0, slot(DayOfWeek::Tue, 10), "R1");
        let outside = asg("C1", SessionType::Theory, 0, slot(DayOfWeek::Tue, 11), "R1");
        assert!(InstructorAvailability.check(&schedule, &inside, &ctx).ok);
        let result = InstructorAvailability.check(&schedule, &outside, &ctx);
        assert_eq!(
            result.message.as_deref(),
            Some("Instructor not available in this timeslot.")
        );
    }

    #[test]
    fn theory_cap_counts_only_theory_on_that_day() {
        let cat = catalog();
        let ctx = cat.ctx();
        let rule = MaxTheoryHoursPerInstructorPerDay::default();
        let mut schedule = Schedule::new();

        // Four theory hours for I1 on Monday across two courses, plus a lab.
        commit(&mut schedule, &ctx, asg("C1", SessionType::Theory, 0, slot(DayOfWeek::Mon, 9), "R1"));
        commit(&mut schedule, &ctx, asg("C1", SessionType::Theory, 1, slot(DayOfWeek::Mon, 10), "R1"));
        commit(&mut schedule, &ctx, asg("C2", SessionType::Theory, 0, slot(DayOfWeek::Mon, 11), "R1"));
        commit(&mut schedule, &ctx, asg("C1", SessionType::Lab, 0, slot(DayOfWeek::Mon, 12), "L1"));

        let fourth = asg("C2", SessionType::Theory, 1, slot(DayOfWeek::Mon, 14), "R1");
        assert!(rule.check(&schedule, &fourth, &ctx).ok);
        commit(&mut schedule, &ctx, fourth);

        let fifth = asg("C2", SessionType::Theory, 2, slot(DayOfWeek::Mon, 15), "R1");
        let result = rule.check(&schedule, &fifth, &ctx);
        assert!(!result.ok);
        assert_eq!(
            result.message.as_deref(),
            Some("Instructor exceeds max 4 theory hours per day.")
        );

        // Labs are not capped, other days are separate, other instructors are separate.
        let lab = asg("C1", SessionType::Lab, 1, slot(DayOfWeek::Mon, 16), "L1");
        assert!(rule.check(&schedule, &lab, &ctx).ok);
        let tuesday = asg("C2", SessionType::Theory, 2, slot(DayOfWeek::Tue, 9), "R1");
        assert!(rule.check(&schedule, &tuesday, &ctx).ok);
        let other = asg("C3", SessionType::Theory, 0, slot(DayOfWeek::Mon, 15), "R2");
        assert!(rule.check(&schedule, &other, &ctx).ok);
    }

    #[test]
    fn theory_cap_is_configurable() {
        let cat = catalog();
        let ctx = cat.ctx();
        let rule = MaxTheoryHoursPerInstructorPerDay::new(Quantity::new(1.0));
        let mut schedule = Schedule::new();
        commit(&mut schedule, &ctx, asg("C1", SessionType::Theory, 0, slot(DayOfWeek::Wed, 9), "R1"));
        let next = asg("C2", SessionType::Theory, 0, slot(DayOfWeek::Wed, 10), "R1");
        assert!(!rule.check(&schedule, &next, &ctx).ok);
    }

    #[test]
    fn instructor_overlap_detected_across_courses() {
        let cat = catalog();
        let ctx = cat.ctx();
        let mut schedule = Schedule::new();
        commit(&mut schedule, &ctx, asg("C1", SessionType::Theory, 0, slot(DayOfWeek::Thu, 9), "R1"));

        let half_past = TimeSlot::new(DayOfWeek::Thu, 9 * 60 + 30, 10 * 60 + 30);
        let clash = asg("C2", SessionType::Theory, 0, half_past, "R2");
        let result = NoInstructorOverlap.check(&schedule, &clash, &ctx);
        assert_eq!(result.message.as_deref(), Some("Instructor overlap conflict."));

        let back_to_back = asg("C2", SessionType::Theory, 0, slot(DayOfWeek::Thu, 10), "R2");
        assert!(NoInstructorOverlap.check(&schedule, &back_to_back, &ctx).ok);

        let other_instructor = asg("C3", SessionType::Theory, 0, slot(DayOfWeek::Thu, 9), "R2");
        assert!(NoInstructorOverlap.check(&schedule, &other_instructor, &ctx).ok);
    }

    #[test]
    fn unknown_course_is_rejected() {
        let cat = catalog();
        let ctx = cat.ctx();
        let ghost = asg("GHOST", SessionType::Theory, 0, slot(DayOfWeek::Mon, 9), "R1");
        assert!(!NoInstructorOverlap.check(&Schedule::new(), &ghost, &ctx).ok);
        assert!(!InstructorAvailability.check(&Schedule::new(), &ghost, &ctx).ok);
    }
}
