//! Shared catalog builders for rule and scheduler tests.

use crate::constraints::ScheduleContext;
use crate::model::{
    Assignment, Course, DayOfWeek, Instructor, Room, RoomType, Session, SessionType, TimeSlot,
};
use crate::schedule::Schedule;

/// One-hour slot starting on the hour.
pub(crate) fn slot(day: DayOfWeek, hour: u32) -> TimeSlot {
    TimeSlot::new(day, hour * 60, hour * 60 + 60)
}

/// Every weekday 08:00-18:00.
pub(crate) fn whole_week() -> Vec<TimeSlot> {
    DayOfWeek::ALL
        .into_iter()
        .map(|d| TimeSlot::new(d, 8 * 60, 18 * 60))
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn course(
    id: &str,
    year: u8,
    department: &str,
    is_elective: bool,
    theory: u32,
    lab: u32,
    instructor_id: &str,
    enrolled: u32,
) -> Course {
    Course {
        id: id.to_string(),
        name: format!("{id} course"),
        year,
        department: department.to_string(),
        is_elective,
        theory_hours_per_week: theory,
        lab_hours_per_week: lab,
        instructor_id: instructor_id.to_string(),
        enrolled_students: enrolled,
    }
}

pub(crate) fn asg(course_id: &str, kind: SessionType, index: u32, ts: TimeSlot, room: &str) -> Assignment {
    Assignment::new(Session::new(course_id, kind, index), ts, room)
}

/// Input lists for one run. Defaults: instructors I1/I2 available all week,
/// classrooms R1 (60) and R2 (30), lab L1 (40), slots Mon-Fri 09:00-12:00.
pub(crate) struct Catalog {
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub rooms: Vec<Room>,
    pub slots: Vec<TimeSlot>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            instructors: vec![
                Instructor::new("I1", "Dr. Ada", whole_week()),
                Instructor::new("I2", "Dr. Turing", whole_week()),
            ],
            rooms: vec![
                Room::new("R1", "C101", 60, RoomType::Classroom),
                Room::new("R2", "C102", 30, RoomType::Classroom),
                Room::new("L1", "Lab A", 40, RoomType::Lab),
            ],
            slots: DayOfWeek::ALL
                .into_iter()
                .flat_map(|d| (9..12).map(move |h| slot(d, h)))
                .collect(),
        }
    }

    pub fn with_course(mut self, c: Course) -> Self {
        self.courses.push(c);
        self
    }

    pub fn ctx(&self) -> ScheduleContext<'_> {
        ScheduleContext::new(&self.courses, &self.instructors, &self.rooms, &self.slots)
    }
}

/// Commits `a`, panicking on bookkeeping errors.
pub(crate) fn commit(schedule: &mut Schedule, ctx: &ScheduleContext<'_>, a: Assignment) {
    schedule.add(a, ctx.course_to_instructor()).unwrap();
}
