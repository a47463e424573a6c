use std::fmt;

use crate::model::Assignment;

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The assignment's course has no entry in the course → instructor map
    UnknownCourse(String),
    /// The assignment was never added (or was already removed)
    AssignmentNotFound(Box<Assignment>),
    /// An index bucket does not hold an assignment present in the list
    IndexOutOfSync { index: &'static str },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::UnknownCourse(id) => {
                write!(f, "Course {} has no instructor mapping", id)
            }
            ScheduleError::AssignmentNotFound(assignment) => {
                write!(f, "Assignment {} not found in schedule", assignment)
            }
            ScheduleError::IndexOutOfSync { index } => {
                write!(f, "Schedule index '{}' is out of sync with assignments", index)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
