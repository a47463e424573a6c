//! Candidate placements for a single session.

use crate::constraints::ScheduleContext;
use crate::model::{Assignment, Course, Room, RoomType, Session, SessionType};

/// A hard-feasible placement with its soft penalty.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub(crate) assignment: Assignment,
    pub(crate) penalty: u32,
}

impl Candidate {
    pub fn new(assignment: Assignment, penalty: u32) -> Self {
        Self { assignment, penalty }
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn penalty(&self) -> u32 {
        self.penalty
    }
}

/// Rooms worth trying for `session`, in input order.
///
/// Theory rooms must seat the whole enrolment. Lab rooms must be labs seating
/// one group of at most `lab_group_limit` students.
pub fn eligible_rooms<'a>(
    session: &Session,
    course: &Course,
    rooms: &'a [Room],
    lab_group_limit: u32,
) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|room| match session.session_type {
            SessionType::Theory => room.capacity >= course.enrolled_students,
            SessionType::Lab => {
                room.room_type == RoomType::Lab && room.capacity >= course.lab_seats(lab_group_limit)
            }
        })
        .collect()
}

/// Every (timeslot, room) placement of `session`: timeslot-major, then room.
pub fn placements<'s>(
    session: &'s Session,
    rooms: &'s [&'s Room],
    ctx: &ScheduleContext<'s>,
) -> impl Iterator<Item = Assignment> + 's {
    ctx.timeslots().iter().flat_map(move |ts| {
        rooms
            .iter()
            .map(move |room| Assignment::new(session.clone(), *ts, room.id.as_str()))
    })
}
