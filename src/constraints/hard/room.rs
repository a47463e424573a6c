//! Room-keyed rules.

use super::{unknown, LAB_GROUP_LIMIT};
use crate::constraints::{Constraint, ConstraintResult, ScheduleContext, Strength};
use crate::model::{Assignment, RoomType, SessionType};
use crate::schedule::Schedule;

/// The room must seat the session's students.
///
/// Theory needs seats for the whole enrolment. A lab group may not exceed
/// `group_limit` students; larger courses must be split into groups upstream,
/// so every lab candidate for them is rejected.
#[derive(Debug, Clone, Copy)]
pub struct RoomCapacity {
    group_limit: u32,
}

impl RoomCapacity {
    pub fn new(group_limit: u32) -> Self {
        Self { group_limit }
    }
}

impl Default for RoomCapacity {
    fn default() -> Self {
        Self::new(LAB_GROUP_LIMIT)
    }
}

impl Constraint for RoomCapacity {
    fn name(&self) -> &'static str {
        "RoomCapacity"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, _: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        let Some(course) = ctx.course(candidate.course_id()) else {
            return unknown("course", candidate.course_id());
        };
        let Some(room) = ctx.room(&candidate.room_id) else {
            return unknown("room", &candidate.room_id);
        };
        match candidate.session.session_type {
            SessionType::Lab => {
                if course.enrolled_students > self.group_limit {
                    return ConstraintResult::fail(format!(
                        "Lab capacity exceeds {}; split into groups required.",
                        self.group_limit
                    ));
                }
                ConstraintResult::check(
                    room.capacity >= course.lab_seats(self.group_limit),
                    "Selected lab room capacity insufficient.",
                )
            }
            SessionType::Theory => ConstraintResult::check(
                room.capacity >= course.enrolled_students,
                "Selected classroom capacity insufficient.",
            ),
        }
    }
}

/// Lab sessions need a lab room. Theory may use any room.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomTypeCompatibility;

impl Constraint for RoomTypeCompatibility {
    fn name(&self) -> &'static str {
        "RoomTypeCompatibility"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, _: &Schedule, candidate: &Assignment, ctx: &ScheduleContext<'_>) -> ConstraintResult {
        let Some(room) = ctx.room(&candidate.room_id) else {
            return unknown("room", &candidate.room_id);
        };
        let compatible = match (candidate.session.session_type, room.room_type) {
            (SessionType::Lab, RoomType::Lab) => true,
            (SessionType::Lab, RoomType::Classroom) => false,
            (SessionType::Theory, RoomType::Lab | RoomType::Classroom) => true,
        };
        ConstraintResult::check(compatible, "Lab sessions must be in lab rooms.")
    }
}

/// A room cannot host two overlapping sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoomOverlap;

impl Constraint for NoRoomOverlap {
    fn name(&self) -> &'static str {
        "NoRoomOverlap"
    }

    fn strength(&self) -> Strength {
        Strength::Hard
    }

    fn check(&self, schedule: &Schedule, candidate: &Assignment, _: &ScheduleContext<'_>) -> ConstraintResult {
        let clash = schedule
            .by_room_day(&candidate.room_id, candidate.day())
            .iter()
            .any(|a| a.timeslot.overlaps(&candidate.timeslot));
        ConstraintResult::check(!clash, "Room overlap conflict.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::fixtures::{asg, commit, course, slot, Catalog};
    use crate::model::DayOfWeek;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_course(course("SMALL", 2, "CENG", false, 2, 2, "I1", 25))
            .with_course(course("MID", 2, "CENG", false, 2, 2, "I1", 35))
            .with_course(course("BIG", 1, "SENG", false, 3, 1, "I2", 55))
    }

    fn check(rule: &dyn Constraint, ctx: &ScheduleContext<'_>, a: &Assignment) -> ConstraintResult {
        rule.check(&Schedule::new(), a, ctx)
    }

    #[test]
    fn theory_needs_full_enrolment_seats() {
        let cat = catalog();
        let ctx = cat.ctx();
        let rule = RoomCapacity::default();
        let ts = slot(DayOfWeek::Mon, 9);
        assert!(check(&rule, &ctx, &asg("BIG", SessionType::Theory, 0, ts, "R1")).ok);
        let result = check(&rule, &ctx, &asg("BIG", SessionType::Theory, 0, ts, "R2"));
        assert_eq!(
            result.message.as_deref(),
            Some("Selected classroom capacity insufficient.")
        );
    }

    #[test]
    fn oversized_lab_is_always_rejected() {
        let cat = catalog();
        let ctx = cat.ctx();
        let result = check(
            &RoomCapacity::default(),
            &ctx,
            &asg("BIG", SessionType::Lab, 0, slot(DayOfWeek::Mon, 9), "L1"),
        );
        assert_eq!(
            result.message.as_deref(),
            Some("Lab capacity exceeds 40; split into groups required.")
        );
    }

    #[test]
    fn lab_room_must_seat_the_group() {
        let mut cat = catalog();
        cat.rooms[2].capacity = 30;
        let ctx = cat.ctx();
        let rule = RoomCapacity::default();
        let ts = slot(DayOfWeek::Tue, 10);
        assert!(check(&rule, &ctx, &asg("SMALL", SessionType::Lab, 0, ts, "L1")).ok);
        let result = check(&rule, &ctx, &asg("MID", SessionType::Lab, 0, ts, "L1"));
        assert_eq!(
            result.message.as_deref(),
            Some("Selected lab room capacity insufficient.")
        );
    }

    #[test]
    fn labs_need_lab_rooms() {
        let cat = catalog();
        let ctx = cat.ctx();
        let ts = slot(DayOfWeek::Wed, 11);
        assert!(!check(&RoomTypeCompatibility, &ctx, &asg("SMALL", SessionType::Lab, 0, ts, "R1")).ok);
        assert!(check(&RoomTypeCompatibility, &ctx, &asg("SMALL", SessionType::Lab, 0, ts, "L1")).ok);
        assert!(check(&RoomTypeCompatibility, &ctx, &asg("SMALL", SessionType::Theory, 0, ts, "L1")).ok);
    }

    #[test]
    fn room_overlap_is_per_room_and_day() {
        let cat = catalog();
        let ctx = cat.ctx();
        let mut schedule = Schedule::new();
        commit(&mut schedule, &ctx, asg("SMALL", SessionType::Theory, 0, slot(DayOfWeek::Thu, 9), "R1"));

        let same_room = asg("BIG", SessionType::Theory, 0, slot(DayOfWeek::Thu, 9), "R1");
        assert_eq!(
            NoRoomOverlap.check(&schedule, &same_room, &ctx).message.as_deref(),
            Some("Room overlap conflict.")
        );
        let other_room = asg("BIG", SessionType::Theory, 0, slot(DayOfWeek::Thu, 9), "R2");
        assert!(NoRoomOverlap.check(&schedule, &other_room, &ctx).ok);
        let other_day = asg("BIG", SessionType::Theory, 0, slot(DayOfWeek::Fri, 9), "R1");
        assert!(NoRoomOverlap.check(&schedule, &other_day, &ctx).ok);
    }

    #[test]
    fn unknown_room_is_rejected() {
        let cat = catalog();
        let ctx = cat.ctx();
        let a = asg("SMALL", SessionType::Theory, 0, slot(DayOfWeek::Mon, 9), "NOWHERE");
        assert_eq!(
            check(&RoomTypeCompatibility, &ctx, &a).message.as_deref(),
            Some("Unknown room NOWHERE.")
        );
    }
}
