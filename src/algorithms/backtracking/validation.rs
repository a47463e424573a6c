//! Pre-search input checks.

use std::collections::HashSet;

use crate::error::DataValidationError;
use crate::model::{Course, Instructor, Room, TimeSlot};

/// Rejects unusable inputs and collects advisories.
///
/// Fails on the first empty list (courses, instructors, rooms, timeslots in
/// that order) or on the first course whose instructor is unknown. Courses
/// with labs and more than `lab_group_limit` students produce a warning;
/// the capacity rule will later refuse every lab placement for them.
///
/// Pure: calling it twice on the same inputs gives the same result.
pub fn validate_inputs(
    courses: &[Course],
    instructors: &[Instructor],
    rooms: &[Room],
    timeslots: &[TimeSlot],
    lab_group_limit: u32,
) -> Result<Vec<String>, DataValidationError> {
    if courses.is_empty() {
        return Err(DataValidationError::NoCourses);
    }
    if instructors.is_empty() {
        return Err(DataValidationError::NoInstructors);
    }
    if rooms.is_empty() {
        return Err(DataValidationError::NoRooms);
    }
    if timeslots.is_empty() {
        return Err(DataValidationError::NoTimeslots);
    }

    let known: HashSet<&str> = instructors.iter().map(|i| i.id.as_str()).collect();
    let mut warnings = Vec::new();
    for course in courses {
        if !known.contains(course.instructor_id.as_str()) {
            return Err(DataValidationError::UnknownInstructor {
                course_id: course.id.clone(),
                instructor_id: course.instructor_id.clone(),
            });
        }
        if course.has_lab() && course.enrolled_students > lab_group_limit {
            warnings.push(format!(
                "Course {} lab has {} students > {}; split groups recommended.",
                course.id, course.enrolled_students, lab_group_limit
            ));
        }
    }
    Ok(warnings)
}
