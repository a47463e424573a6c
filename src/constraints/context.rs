//! Read-only lookup tables shared by every rule during one scheduling run.

use std::collections::HashMap;

use crate::model::{Course, DayOfWeek, Instructor, Room, TimeSlot};
use crate::schedule::CourseInstructorMap;

/// Weekly exam block: Friday 13:20-15:10.
pub const DEFAULT_EXAM_BLOCK: TimeSlot = TimeSlot::new(DayOfWeek::Fri, 13 * 60 + 20, 15 * 60 + 10);

/// Snapshot of the run's inputs, indexed for the rules.
///
/// Built once per run from the loader's slices and never mutated. Entity
/// tables borrow the caller's data; only the course → instructor map is owned
/// because the [`Schedule`](crate::schedule::Schedule) keys its instructor
/// index with it.
#[derive(Debug, Clone)]
pub struct ScheduleContext<'a> {
    courses: HashMap<&'a str, &'a Course>,
    instructors: HashMap<&'a str, &'a Instructor>,
    rooms_by_id: HashMap<&'a str, &'a Room>,
    rooms: &'a [Room],
    timeslots: &'a [TimeSlot],
    course_to_instructor: CourseInstructorMap,
    exam_block: TimeSlot,
}

impl<'a> ScheduleContext<'a> {
    pub fn new(
        courses: &'a [Course],
        instructors: &'a [Instructor],
        rooms: &'a [Room],
        timeslots: &'a [TimeSlot],
    ) -> Self {
        Self {
            courses: courses.iter().map(|c| (c.id.as_str(), c)).collect(),
            instructors: instructors.iter().map(|i| (i.id.as_str(), i)).collect(),
            rooms_by_id: rooms.iter().map(|r| (r.id.as_str(), r)).collect(),
            rooms,
            timeslots,
            course_to_instructor: courses
                .iter()
                .map(|c| (c.id.clone(), c.instructor_id.clone()))
                .collect(),
            exam_block: DEFAULT_EXAM_BLOCK,
        }
    }

    /// Replaces the exam block window.
    pub fn with_exam_block(mut self, exam_block: TimeSlot) -> Self {
        self.exam_block = exam_block;
        self
    }

    pub fn course(&self, id: &str) -> Option<&'a Course> {
        self.courses.get(id).copied()
    }

    pub fn instructor(&self, id: &str) -> Option<&'a Instructor> {
        self.instructors.get(id).copied()
    }

    pub fn room(&self, id: &str) -> Option<&'a Room> {
        self.rooms_by_id.get(id).copied()
    }

    /// Instructor id teaching `course_id`.
    pub fn instructor_id_of(&self, course_id: &str) -> Option<&str> {
        self.course_to_instructor.get(course_id).map(String::as_str)
    }

    /// Instructor teaching `course_id`.
    pub fn instructor_of(&self, course_id: &str) -> Option<&'a Instructor> {
        self.instructor_id_of(course_id)
            .and_then(|id| self.instructor(id))
    }

    /// Rooms in the order they were supplied.
    pub fn rooms(&self) -> &'a [Room] {
        self.rooms
    }

    /// The full timeslot universe, in the order it was supplied.
    pub fn timeslots(&self) -> &'a [TimeSlot] {
        self.timeslots
    }

    pub fn course_to_instructor(&self) -> &CourseInstructorMap {
        &self.course_to_instructor
    }

    pub fn exam_block(&self) -> TimeSlot {
        self.exam_block
    }
}
