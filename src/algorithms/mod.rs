pub mod backtracking;

pub use backtracking::{default_constraints, Scheduler, SchedulerConfig};

use crate::error::PlanError;
use crate::model::{Course, Instructor, Room, TimeSlot};
use crate::report::Report;
use crate::schedule::Schedule;

/// Algorithm that turns a course catalogue into a weekly timetable.
pub trait SchedulingAlgorithm {
    /// Places every weekly session of `courses`.
    ///
    /// # Arguments
    ///
    /// * `courses` - Courses to timetable; each expands into one-hour sessions
    /// * `instructors` - Instructors referenced by the courses
    /// * `rooms` - Candidate rooms, tried in the given order
    /// * `timeslots` - The timeslot universe, tried in the given order
    ///
    /// # Returns
    ///
    /// A complete [`Schedule`], or the reason none was produced.
    fn schedule(
        &mut self,
        courses: &[Course],
        instructors: &[Instructor],
        rooms: &[Room],
        timeslots: &[TimeSlot],
    ) -> Result<Schedule, PlanError>;

    /// Diagnostics of the most recent run.
    fn report(&self) -> &Report;
}
