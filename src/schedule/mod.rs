use crate::model::{Assignment, AssignmentRecord, DayOfWeek};
use crate::Id;
use qtty::{Hour, Quantity};
use std::collections::{BTreeMap, HashMap};
pub mod errors;
pub use errors::ScheduleError;


/// Course id → instructor id lookup used to key the instructor index.
pub type CourseInstructorMap = HashMap<Id, Id>;

/// Per-day buckets of one instructor or one room.
type DayBuckets = BTreeMap<DayOfWeek, Vec<Assignment>>;

/// Committed assignments plus the conflict-lookup indices the rules consult.
///
/// # Internal Structure
/// - `assignments`: commit order
/// - `by_instructor_day`: instructor id → day → assignments
/// - `by_room_day`: room id → day → assignments
/// - `by_course`: course id → assignments
///
/// Every assignment in `assignments` sits in exactly one bucket of each index.
/// Buckets that become empty on [`remove`](Schedule::remove) are dropped, so
/// `add` followed by `remove` yields a schedule equal to the original.
///
/// # Complexity
/// - `add`: O(1) amortized
/// - `remove`: O(n) on the list, O(k) on each bucket of size k
/// - `by_*` lookups: O(1) hash lookup (+ O(log 5) for the day)
///
/// # Examples
///
/// ```
/// use beeplan::model::{Assignment, DayOfWeek, Session, SessionType, TimeSlot};
/// use beeplan::schedule::{CourseInstructorMap, Schedule};
///
/// let mut c2i = CourseInstructorMap::new();
/// c2i.insert("CENG201".to_string(), "I1".to_string());
///
/// let mut schedule = Schedule::new();
/// let slot = TimeSlot::parse(DayOfWeek::Mon, "09:00", "10:00").unwrap();
/// let a = Assignment::new(Session::new("CENG201", SessionType::Theory, 0), slot, "R1");
///
/// schedule.add(a.clone(), &c2i).unwrap();
/// assert_eq!(schedule.by_instructor_day("I1", DayOfWeek::Mon).len(), 1);
///
/// schedule.remove(&a, &c2i).unwrap();
/// assert!(schedule.is_empty());
/// assert!(schedule.remove(&a, &c2i).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    assignments: Vec<Assignment>,
    by_instructor_day: HashMap<Id, DayBuckets>,
    by_room_day: HashMap<Id, DayBuckets>,
    by_course: HashMap<Id, Vec<Assignment>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Committed assignments in commit order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignments.iter()
    }

    pub fn contains(&self, assignment: &Assignment) -> bool {
        self.assignments.contains(assignment)
    }

    /// Commits an assignment and files it under all three indices.
    pub fn add(
        &mut self,
        assignment: Assignment,
        course_to_instructor: &CourseInstructorMap,
    ) -> Result<(), ScheduleError> {
        let instructor_id = Self::instructor_of(&assignment, course_to_instructor)?;
        let day = assignment.day();

        self.by_instructor_day
            .entry(instructor_id.clone())
            .or_default()
            .entry(day)
            .or_default()
            .push(assignment.clone());
        self.by_room_day
            .entry(assignment.room_id.clone())
            .or_default()
            .entry(day)
            .or_default()
            .push(assignment.clone());
        self.by_course
            .entry(assignment.session.course_id.clone())
            .or_default()
            .push(assignment.clone());
        self.assignments.push(assignment);
        Ok(())
    }

    /// Undoes one prior [`add`](Schedule::add) of a structurally equal assignment.
    ///
    /// Every position is located before anything is touched, so on any error
    /// ([`ScheduleError::AssignmentNotFound`], [`ScheduleError::IndexOutOfSync`]
    /// or [`ScheduleError::UnknownCourse`]) the schedule is left unchanged.
    pub fn remove(
        &mut self,
        assignment: &Assignment,
        course_to_instructor: &CourseInstructorMap,
    ) -> Result<(), ScheduleError> {
        let instructor_id = Self::instructor_of(assignment, course_to_instructor)?;
        let day = assignment.day();
        let course_id = assignment.course_id();

        let pos = last_position(&self.assignments, assignment)
            .ok_or_else(|| ScheduleError::AssignmentNotFound(Box::new(assignment.clone())))?;
        let instructor_pos = last_position(day_bucket(&self.by_instructor_day, instructor_id, day), assignment)
            .ok_or(ScheduleError::IndexOutOfSync {
                index: "by_instructor_day",
            })?;
        let room_pos = last_position(day_bucket(&self.by_room_day, &assignment.room_id, day), assignment)
            .ok_or(ScheduleError::IndexOutOfSync {
                index: "by_room_day",
            })?;
        let course_pos = last_position(self.by_course(course_id), assignment)
            .ok_or(ScheduleError::IndexOutOfSync { index: "by_course" })?;

        self.assignments.remove(pos);
        remove_from_day_index(&mut self.by_instructor_day, instructor_id, day, instructor_pos);
        remove_from_day_index(&mut self.by_room_day, &assignment.room_id, day, room_pos);
        if let Some(bucket) = self.by_course.get_mut(course_id) {
            bucket.remove(course_pos);
            if bucket.is_empty() {
                self.by_course.remove(course_id);
            }
        }
        Ok(())
    }

    /// Assignments taught by `instructor_id` on `day`.
    pub fn by_instructor_day(&self, instructor_id: &str, day: DayOfWeek) -> &[Assignment] {
        day_bucket(&self.by_instructor_day, instructor_id, day)
    }

    /// Assignments held in `room_id` on `day`.
    pub fn by_room_day(&self, room_id: &str, day: DayOfWeek) -> &[Assignment] {
        day_bucket(&self.by_room_day, room_id, day)
    }

    /// Assignments of `course_id`, in commit order.
    pub fn by_course(&self, course_id: &str) -> &[Assignment] {
        self.by_course
            .get(course_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Committed theory load of an instructor on a day.
    pub fn theory_hours(&self, instructor_id: &str, day: DayOfWeek) -> Quantity<Hour> {
        self.by_instructor_day(instructor_id, day)
            .iter()
            .filter(|a| a.session.is_theory())
            .map(|a| a.session.duration())
            .fold(Quantity::new(0.0), |acc, d| acc + d)
    }

    /// Booked time of a room over the whole week, from slot lengths.
    pub fn room_hours(&self, room_id: &str) -> Quantity<Hour> {
        self.by_room_day
            .get(room_id)
            .into_iter()
            .flat_map(|days| days.values().flatten())
            .map(|a| a.timeslot.hours())
            .fold(Quantity::new(0.0), |acc, h| acc + h)
    }

    /// Timetable view: assignments grouped by day, ordered by start then room.
    pub fn by_day(&self) -> BTreeMap<DayOfWeek, Vec<&Assignment>> {
        let mut grid: BTreeMap<DayOfWeek, Vec<&Assignment>> = BTreeMap::new();
        for a in &self.assignments {
            grid.entry(a.day()).or_default().push(a);
        }
        for entries in grid.values_mut() {
            entries.sort_by(|a, b| {
                a.timeslot
                    .start()
                    .cmp(&b.timeslot.start())
                    .then_with(|| a.room_id.cmp(&b.room_id))
            });
        }
        grid
    }

    /// Flat records in commit order.
    pub fn records(&self) -> Vec<AssignmentRecord> {
        self.assignments.iter().map(Assignment::record).collect()
    }

    fn instructor_of<'m>(
        assignment: &Assignment,
        course_to_instructor: &'m CourseInstructorMap,
    ) -> Result<&'m Id, ScheduleError> {
        course_to_instructor
            .get(assignment.course_id())
            .ok_or_else(|| ScheduleError::UnknownCourse(assignment.session.course_id.clone()))
    }
}

fn day_bucket<'s>(index: &'s HashMap<Id, DayBuckets>, key: &str, day: DayOfWeek) -> &'s [Assignment] {
    index
        .get(key)
        .and_then(|days| days.get(&day))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Position of the last entry equal to `assignment`.
fn last_position(entries: &[Assignment], assignment: &Assignment) -> Option<usize> {
    entries.iter().rposition(|a| a == assignment)
}

/// Removes `index[key][day][pos]`, dropping emptied buckets.
///
/// `pos` must come from [`last_position`] on the same bucket.
fn remove_from_day_index(index: &mut HashMap<Id, DayBuckets>, key: &str, day: DayOfWeek, pos: usize) {
    let Some(days) = index.get_mut(key) else {
        return;
    };
    if let Some(bucket) = days.get_mut(&day) {
        bucket.remove(pos);
        if bucket.is_empty() {
            days.remove(&day);
        }
    }
    if days.is_empty() {
        index.remove(key);
    }
}

// =============================================================================
// Schedule Serde Support
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Serialize, Serializer};

    /// Serializes as the flat list of assignment records, in commit order.
    ///
    /// There is no `Deserialize`: rebuilding the instructor index needs the
    /// course → instructor map, so loaders replay records through `add`.
    impl Serialize for Schedule {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.assignments.iter().map(Assignment::record))
        }
    }
}
