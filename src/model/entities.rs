//! Catalog entities supplied by the loader: rooms, instructors and courses.

use std::fmt::{self, Display};

use super::time::TimeSlot;
use crate::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of teaching space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum RoomType {
    Classroom,
    Lab,
}

impl Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Classroom => write!(f, "CLASSROOM"),
            RoomType::Lab => write!(f, "LAB"),
        }
    }
}

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub capacity: u32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub room_type: RoomType,
}

impl Room {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, capacity: u32, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            room_type,
        }
    }
}

/// An instructor and the windows in which they can teach.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instructor {
    pub id: Id,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub availability: Vec<TimeSlot>,
}

impl Instructor {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, availability: Vec<TimeSlot>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            availability,
        }
    }

    /// True iff some availability window overlaps `ts`.
    ///
    /// An instructor without availability windows is never available.
    pub fn is_available(&self, ts: &TimeSlot) -> bool {
        self.availability.iter().any(|window| window.overlaps(ts))
    }
}

/// A course in the catalog. Sessions are derived from its weekly hour counts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Course {
    pub id: Id,
    pub name: String,
    /// Study year, 1..=4.
    pub year: u8,
    /// Owning department, e.g. `CENG` or `SENG`.
    pub department: String,
    pub is_elective: bool,
    pub theory_hours_per_week: u32,
    pub lab_hours_per_week: u32,
    pub instructor_id: Id,
    pub enrolled_students: u32,
}

impl Course {
    pub fn total_weekly_hours(&self) -> u32 {
        self.theory_hours_per_week + self.lab_hours_per_week
    }

    pub fn has_lab(&self) -> bool {
        self.lab_hours_per_week > 0
    }

    /// Lab seats needed: enrolment capped at the lab group limit.
    pub fn lab_seats(&self, group_limit: u32) -> u32 {
        self.enrolled_students.min(group_limit)
    }
}
