//! Immutable value types of the timetabling domain.
//!
//! - [`time`] - [`DayOfWeek`] and half-open [`TimeSlot`] intervals
//! - [`entities`] - [`Room`], [`Instructor`], [`Course`] as supplied by a loader
//! - [`session`] - [`Session`] units derived from courses and their [`Assignment`]s

pub mod entities;
pub mod error;
pub mod session;
pub mod time;

pub use entities::{Course, Instructor, Room, RoomType};
pub use error::ModelError;
pub use session::{Assignment, AssignmentRecord, Session, SessionType};
pub use time::{format_clock, parse_clock, DayOfWeek, TimeSlot};
