//! Static session ordering heuristic.
//!
//! Theory is placed before labs so the lab-after-theory rule holds by
//! construction, and highly constrained courses go first so dead ends surface
//! near the root of the search tree.

use crate::constraints::hard::cohort::THIRD_YEAR;
use crate::constraints::ScheduleContext;
use crate::model::{Course, Session, SessionType};

use super::config::SchedulerConfig;

/// Sort key of a session: `(type rank, priority rank, -total weekly hours)`.
pub type SessionRank = (u8, u8, i64);

fn type_rank(session: &Session) -> u8 {
    match session.session_type {
        SessionType::Theory => 0,
        SessionType::Lab => 1,
    }
}

/// 0 for third-year courses, electives and priority departments.
fn priority_rank(course: &Course, config: &SchedulerConfig) -> u8 {
    if course.year == THIRD_YEAR || course.is_elective || config.is_priority_department(&course.department) {
        0
    } else {
        1
    }
}

pub fn session_rank(session: &Session, ctx: &ScheduleContext<'_>, config: &SchedulerConfig) -> SessionRank {
    match ctx.course(&session.course_id) {
        Some(course) => (
            type_rank(session),
            priority_rank(course, config),
            -i64::from(course.total_weekly_hours()),
        ),
        // Unreachable after validation; keep such sessions last.
        None => (type_rank(session), u8::MAX, 0),
    }
}

/// Orders sessions ascending by [`session_rank`]. Ties keep input order.
pub fn order_sessions(mut sessions: Vec<Session>, ctx: &ScheduleContext<'_>, config: &SchedulerConfig) -> Vec<Session> {
    sessions.sort_by_cached_key(|s| session_rank(s, ctx, config));
    sessions
}
