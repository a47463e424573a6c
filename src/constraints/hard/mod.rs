//! Hard constraints: a candidate violating any of these is illegal.
//!
//! Grouped by what the rule keys on:
//! - [`exam_block`] - the fixed weekly exam window
//! - [`instructor`] - availability, daily theory load, double booking
//! - [`room`] - capacity, room type, double booking
//! - [`sequencing`] - labs after theory within a course
//! - [`cohort`] - cross-course overlap bans between student cohorts

pub mod cohort;
pub mod exam_block;
pub mod instructor;
pub mod room;
pub mod sequencing;

pub use cohort::{CengVsSengElectivesNoOverlap, ThirdYearVsElectivesNoOverlap};
pub use exam_block::NoExamBlock;
pub use instructor::{
    InstructorAvailability, MaxTheoryHoursPerInstructorPerDay, NoInstructorOverlap,
};
pub use room::{NoRoomOverlap, RoomCapacity, RoomTypeCompatibility};
pub use sequencing::LabAfterTheory;

use super::constraint::ConstraintResult;

/// Largest lab group a single lab room session may hold.
pub const LAB_GROUP_LIMIT: u32 = 40;

/// Maximum theory hours an instructor may teach on one day.
pub const MAX_THEORY_HOURS_PER_DAY: f64 = 4.0;

/// Failure for a candidate that references an entity missing from the context.
pub(crate) fn unknown(kind: &str, id: &str) -> ConstraintResult {
    ConstraintResult::fail(format!("Unknown {kind} {id}."))
}
