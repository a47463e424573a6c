//! beeplan - constraint-based weekly timetabling for a university department
//!
//! Courses expand into one-hour THEORY and LAB sessions, which a backtracking
//! scheduler places into (timeslot, room) pairs under a pluggable set of hard
//! and soft constraints. Every run returns a [`Report`] with the warnings and
//! rejections it produced.
//!
//! ```
//! use beeplan::model::{Course, DayOfWeek, Instructor, Room, RoomType, TimeSlot};
//! use beeplan::Scheduler;
//!
//! let slots = vec![TimeSlot::parse(DayOfWeek::Mon, "09:00", "10:00").unwrap()];
//! let instructors = vec![Instructor::new("I1", "Dr. Ada", slots.clone())];
//! let rooms = vec![Room::new("R1", "C101", 60, RoomType::Classroom)];
//! let courses = vec![Course {
//!     id: "CENG201".to_string(),
//!     name: "Data Structures".to_string(),
//!     year: 2,
//!     department: "CENG".to_string(),
//!     is_elective: false,
//!     theory_hours_per_week: 1,
//!     lab_hours_per_week: 0,
//!     instructor_id: "I1".to_string(),
//!     enrolled_students: 38,
//! }];
//!
//! let mut scheduler = Scheduler::default();
//! let schedule = scheduler
//!     .generate_schedule(&courses, &instructors, &rooms, &slots)
//!     .unwrap();
//! assert_eq!(schedule.len(), 1);
//! assert!(scheduler.report().violations.is_empty());
//! ```

pub mod algorithms;
pub mod constraints;
pub mod error;
pub mod model;
pub mod report;
pub mod schedule;
pub mod units;

pub use algorithms::{Scheduler, SchedulerConfig, SchedulingAlgorithm};
pub use error::{DataValidationError, PlanError, SchedulingError};
pub use report::Report;
pub use schedule::Schedule;
pub use units::{convert, SameDim};

/// Identifier type used for courses, instructors, rooms and runs.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
