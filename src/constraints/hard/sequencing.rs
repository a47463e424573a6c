use crate::constraints::{Constraint, ConstraintResult, ScheduleContext, Strength};
use crate::model::Assignment;
use crate::schedule::Schedule;

/// A lab may only be placed once some theory session of the same course
/// starts strictly earlier in the week.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabAfterTheory;

impl Constraint for LabAfterTheory {
    fn name(&self) -> &'static str {
        "LabAfterTheory"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, schedule: &Schedule, candidate: &Assignment, _: &ScheduleContext<'_>) -> ConstraintResult {
        if !candidate.session.is_lab() {
            return ConstraintResult::pass();
        }
        let theory_before = schedule
            .by_course(candidate.course_id())
            .iter()
            .any(|a| a.session.is_theory() && a.timeslot.starts_before(&candidate.timeslot));
        ConstraintResult::check(theory_before, "Lab must be scheduled after theory.")
    }
}
