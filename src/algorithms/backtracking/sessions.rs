//! Expansion of courses into one-hour sessions.

use crate::model::{Course, Session, SessionType};

/// Expands every course into its weekly sessions.
///
/// Per course, in input order: `theory_hours_per_week` THEORY sessions with
/// indices `0..`, then `lab_hours_per_week` LAB sessions with indices `0..`.
pub fn build_sessions(courses: &[Course]) -> Vec<Session> {
    let total = courses.iter().map(|c| c.total_weekly_hours() as usize).sum();
    let mut sessions = Vec::with_capacity(total);
    for course in courses {
        sessions.extend(
            (0..course.theory_hours_per_week).map(|i| Session::new(course.id.as_str(), SessionType::Theory, i)),
        );
        sessions.extend(
            (0..course.lab_hours_per_week).map(|i| Session::new(course.id.as_str(), SessionType::Lab, i)),
        );
    }
    sessions
}
