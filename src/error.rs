//! Error taxonomy of a scheduling run.
//!
//! Validation failures and search exhaustion are distinct classes: the first
//! asks for corrected input, the second is presented with the violation log.

use crate::schedule::ScheduleError;
use crate::Id;
use thiserror::Error;

/// Input rejected before the search starts. No partial schedule exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataValidationError {
    #[error("No courses provided.")]
    NoCourses,

    #[error("No instructors provided.")]
    NoInstructors,

    #[error("No rooms provided.")]
    NoRooms,

    #[error("No timeslots provided.")]
    NoTimeslots,

    #[error("Course {course_id} references unknown instructor {instructor_id}.")]
    UnknownInstructor { course_id: Id, instructor_id: Id },
}

/// The search finished without a complete schedule.
///
/// Root causes are in the run's [`Report`](crate::report::Report) violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("No conflict-free schedule could be generated with current inputs ({sessions} sessions to place).")]
    Exhausted { sessions: usize },

    #[error("Search budget of {nodes} nodes exhausted before a schedule was found.")]
    BudgetExhausted { nodes: u64 },
}

/// Any failure of [`Scheduler::generate_schedule`](crate::algorithms::Scheduler::generate_schedule).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),

    #[error(transparent)]
    Scheduling(#[from] SchedulingError),

    /// Add/remove bookkeeping broke during search.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
