use crate::constraints::{Constraint, ConstraintResult, ScheduleContext, Strength};
use crate::model::Assignment;
use crate::schedule::Schedule;

/// Nothing may be scheduled during the weekly exam block.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExamBlock;

impl Constraint for NoExamBlock {
    fn name(&self) -> &'static str {
        "NoExamBlock"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, _: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        let block = ctx.exam_block();
        if candidate.timeslot.overlaps(&block) {
            return ConstraintResult::fail(format!("No courses during the {block} exam block."));
        }
        ConstraintResult::pass()
    }
}
