//! Sessions (units of teaching to place) and their placements.

use std::fmt::{self, Display};

use qtty::{Hour, Quantity};

use super::time::{DayOfWeek, TimeSlot};
use crate::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SessionType {
    Theory,
    Lab,
}

impl SessionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SessionType::Theory => "THEORY",
            SessionType::Lab => "LAB",
        }
    }
}

impl Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indivisible teaching unit of a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Session {
    pub course_id: Id,
    pub session_type: SessionType,
    pub duration_hours: u32,
    /// Ordinal among the sessions of the same type for this course.
    pub index: u32,
}

impl Session {
    /// Sessions are one hour long in this model.
    pub const DEFAULT_DURATION_HOURS: u32 = 1;

    pub fn new(course_id: impl Into<Id>, session_type: SessionType, index: u32) -> Self {
        Self {
            course_id: course_id.into(),
            session_type,
            duration_hours: Self::DEFAULT_DURATION_HOURS,
            index,
        }
    }

    pub fn is_lab(&self) -> bool {
        self.session_type == SessionType::Lab
    }

    pub fn is_theory(&self) -> bool {
        self.session_type == SessionType::Theory
    }

    pub fn duration(&self) -> Quantity<Hour> {
        Quantity::new(f64::from(self.duration_hours))
    }

    /// Diagnostic label used in violation messages, e.g. `[CENG201 LAB]`.
    pub fn label(&self) -> String {
        format!("[{} {}]", self.course_id, self.session_type)
    }
}

impl Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}#{}", self.course_id, self.session_type, self.index)
    }
}

/// A placement of a session into a time slot and a room.
///
/// Used both for candidates and for committed entries of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub session: Session,
    pub timeslot: TimeSlot,
    pub room_id: Id,
}

impl Assignment {
    pub fn new(session: Session, timeslot: TimeSlot, room_id: impl Into<Id>) -> Self {
        Self {
            session,
            timeslot,
            room_id: room_id.into(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.session.course_id
    }

    pub fn day(&self) -> DayOfWeek {
        self.timeslot.day()
    }

    /// Flat view for external serializers.
    pub fn record(&self) -> AssignmentRecord {
        AssignmentRecord {
            course_id: self.session.course_id.clone(),
            session_type: self.session.session_type,
            index: self.session.index,
            duration_hours: self.session.duration_hours,
            day: self.timeslot.day(),
            start: self.timeslot.start(),
            end: self.timeslot.end(),
            room_id: self.room_id.clone(),
        }
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} in {}", self.session, self.timeslot, self.room_id)
    }
}

/// Flattened assignment as consumed by presenters and serializers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssignmentRecord {
    pub course_id: Id,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub session_type: SessionType,
    pub index: u32,
    pub duration_hours: u32,
    pub day: DayOfWeek,
    /// Minutes since midnight; `HH:MM` on the wire.
    #[cfg_attr(feature = "serde", serde(with = "super::time::clock_format"))]
    pub start: u32,
    /// Minutes since midnight, exclusive; `HH:MM` on the wire.
    #[cfg_attr(feature = "serde", serde(with = "super::time::clock_format"))]
    pub end: u32,
    pub room_id: Id,
}
