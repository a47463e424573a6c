//! Depth-first search with commit / recurse / undo over the shared schedule.

use log::{debug, trace};

use crate::constraints::{Constraint, ScheduleContext};
use crate::error::{PlanError, SchedulingError};
use crate::model::{Assignment, Session};
use crate::report::Report;
use crate::schedule::Schedule;

use super::candidate::{eligible_rooms, placements, Candidate};

/// State of one search: the rule sets, the run's report and the node counter.
pub(crate) struct Search<'r, 'c> {
    pub(crate) hard: &'r [Box<dyn Constraint>],
    pub(crate) soft: &'r [Box<dyn Constraint>],
    pub(crate) ctx: &'r ScheduleContext<'c>,
    pub(crate) report: &'r mut Report,
    pub(crate) lab_group_limit: u32,
    pub(crate) node_budget: Option<u64>,
}

impl Search<'_, '_> {
    /// Runs every hard rule and logs each rejection against the session.
    ///
    /// All rules are evaluated even after the first failure so the report
    /// lists every reason a placement was refused.
    fn passes_hard(&mut self, schedule: &Schedule, candidate: &Assignment) -> bool {
        let mut ok = true;
        for rule in self.hard {
            let result = rule.check(schedule, candidate, self.ctx);
            if !result.ok {
                let reason = result.message.as_deref().unwrap_or(rule.name());
                self.report.add_violation(&candidate.session, reason);
                ok = false;
            }
        }
        ok
    }

    /// Sum of weights of the soft rules `candidate` violates.
    fn soft_penalty(&self, schedule: &Schedule, candidate: &Assignment) -> u32 {
        self.soft
            .iter()
            .filter(|rule| !rule.check(schedule, candidate, self.ctx).ok)
            .fold(0u32, |acc, rule| acc.saturating_add(rule.weight()))
    }

    /// Hard-feasible placements of `session`, cheapest first.
    ///
    /// The sort is stable, so equal penalties keep generation order.
    fn candidates(&mut self, session: &Session, schedule: &Schedule) -> Vec<Candidate> {
        let Some(course) = self.ctx.course(&session.course_id) else {
            debug!("{} has no course in the catalogue, no placements", session.label());
            self.report
                .add_violation(session, &format!("Unknown course {}.", session.course_id));
            return Vec::new();
        };
        let rooms = eligible_rooms(session, course, self.ctx.rooms(), self.lab_group_limit);
        let mut accepted = Vec::new();
        for placement in placements(session, &rooms, self.ctx) {
            if self.passes_hard(schedule, &placement) {
                let penalty = self.soft_penalty(schedule, &placement);
                accepted.push(Candidate::new(placement, penalty));
            }
        }
        accepted.sort_by_key(Candidate::penalty);
        accepted
    }

    fn visit(&mut self) -> Result<(), PlanError> {
        self.report.nodes_explored += 1;
        match self.node_budget {
            Some(budget) if self.report.nodes_explored > budget => {
                Err(SchedulingError::BudgetExhausted { nodes: budget }.into())
            }
            _ => Ok(()),
        }
    }

    /// Places `sessions` in order on top of `schedule`.
    ///
    /// Returns `Ok(true)` with every session committed, or `Ok(false)` with
    /// `schedule` exactly as it was on entry. An `Err` also leaves `schedule`
    /// as it was on entry.
    pub(crate) fn backtrack(&mut self, sessions: &[Session], schedule: &mut Schedule, depth: usize) -> Result<bool, PlanError> {
        let Some((session, rest)) = sessions.split_first() else {
            return Ok(true);
        };
        self.visit()?;

        let candidates = self.candidates(session, schedule);
        trace!(
            "[{}] depth {depth}: {} has {} feasible candidates",
            self.report.run_id,
            session,
            candidates.len()
        );

        let ctx = self.ctx;
        let course_to_instructor = ctx.course_to_instructor();
        for candidate in candidates {
            schedule.add(candidate.assignment.clone(), course_to_instructor)?;
            let placed = self.backtrack(rest, schedule, depth + 1);
            if matches!(placed, Ok(true)) {
                return Ok(true);
            }
            schedule.remove(&candidate.assignment, course_to_instructor)?;
            placed?;
        }

        debug!(
            "[{}] depth {depth}: no placement left for {}, backtracking",
            self.report.run_id, session
        );
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::fixtures::{asg, commit, course, slot, Catalog};
    use crate::constraints::hard::{NoInstructorOverlap, NoRoomOverlap};
    use crate::constraints::soft::PreferConsecutiveLabHours;
    use crate::model::{DayOfWeek, SessionType};

    fn search<'r, 'c>(
        hard: &'r [Box<dyn Constraint>],
        soft: &'r [Box<dyn Constraint>],
        ctx: &'r ScheduleContext<'c>,
        report: &'r mut Report,
    ) -> Search<'r, 'c> {
        Search {
            hard,
            soft,
            ctx,
            report,
            lab_group_limit: 40,
            node_budget: None,
        }
    }

    #[test]
    fn rejections_are_logged_and_feasible_candidates_kept() {
        let cat = Catalog::new().with_course(course("C1", 2, "CENG", false, 1, 0, "I1", 50));
        let ctx = cat.ctx();
        let hard: Vec<Box<dyn Constraint>> = vec![Box::new(NoRoomOverlap)];
        let soft: Vec<Box<dyn Constraint>> = Vec::new();
        let mut report = Report::new("t");
        let mut schedule = Schedule::new();
        commit(
            &mut schedule,
            &ctx,
            asg("C1", SessionType::Theory, 5, slot(DayOfWeek::Mon, 9), "R1"),
        );

        let session = Session::new("C1", SessionType::Theory, 0);
        let mut s = search(&hard, &soft, &ctx, &mut report);
        let found = s.candidates(&session, &schedule);

        // Only R1 seats 50; one of its 15 slots is taken.
        assert_eq!(found.len(), 14);
        assert_eq!(report.violations, vec!["[C1 THEORY] Room overlap conflict.".to_string()]);
    }

    #[test]
    fn session_of_missing_course_is_reported() {
        let cat = Catalog::new().with_course(course("C1", 2, "CENG", false, 1, 0, "I1", 30));
        let ctx = cat.ctx();
        let hard: Vec<Box<dyn Constraint>> = vec![Box::new(NoRoomOverlap)];
        let soft: Vec<Box<dyn Constraint>> = Vec::new();
        let mut report = Report::new("t");

        let ghost = Session::new("GHOST", SessionType::Theory, 0);
        let found = search(&hard, &soft, &ctx, &mut report).candidates(&ghost, &Schedule::new());
        assert!(found.is_empty());
        assert_eq!(report.violations, vec!["[GHOST THEORY] Unknown course GHOST.".to_string()]);
    }

    #[test]
    fn candidates_sorted_by_penalty_stably() {
        let cat = Catalog::new().with_course(course("C1", 2, "CENG", false, 0, 2, "I1", 30));
        let ctx = cat.ctx();
        let hard: Vec<Box<dyn Constraint>> = vec![Box::new(NoRoomOverlap)];
        let soft: Vec<Box<dyn Constraint>> = vec![Box::new(PreferConsecutiveLabHours::default())];
        let mut report = Report::new("t");
        let mut schedule = Schedule::new();
        commit(
            &mut schedule,
            &ctx,
            asg("C1", SessionType::Lab, 0, slot(DayOfWeek::Tue, 11), "L1"),
        );

        let session = Session::new("C1", SessionType::Lab, 1);
        let found = search(&hard, &soft, &ctx, &mut report).candidates(&session, &schedule);
        let first = &found[0];
        assert_eq!(first.penalty(), 0);
        // Mon slots come first in generation order and are free of penalty too.
        assert_eq!(first.assignment().day(), DayOfWeek::Mon);
        let tue: Vec<(u32, u32)> = found
            .iter()
            .filter(|c| c.assignment().day() == DayOfWeek::Tue)
            .map(|c| (c.assignment().timeslot.start(), c.penalty()))
            .collect();
        assert_eq!(tue, vec![(600, 0), (540, 10)]);
    }

    #[test]
    fn failed_search_restores_schedule() {
        let mut cat = Catalog::new()
            .with_course(course("C1", 2, "CENG", false, 1, 0, "I1", 20))
            .with_course(course("C2", 2, "CENG", false, 1, 0, "I1", 20));
        cat.slots = vec![slot(DayOfWeek::Mon, 9)];
        let ctx = cat.ctx();
        let hard: Vec<Box<dyn Constraint>> = vec![Box::new(NoInstructorOverlap)];
        let soft: Vec<Box<dyn Constraint>> = Vec::new();
        let mut report = Report::new("t");
        let mut schedule = Schedule::new();
        let before = schedule.clone();
        let sessions = vec![
            Session::new("C1", SessionType::Theory, 0),
            Session::new("C2", SessionType::Theory, 0),
        ];

        let placed = search(&hard, &soft, &ctx, &mut report).backtrack(&sessions, &mut schedule, 0);
        assert_eq!(placed, Ok(false));
        assert_eq!(schedule, before);
        assert!(report.nodes_explored >= 4);
    }

    #[test]
    fn budget_stops_search_and_restores_schedule() {
        let mut cat = Catalog::new()
            .with_course(course("C1", 2, "CENG", false, 1, 0, "I1", 20))
            .with_course(course("C2", 2, "CENG", false, 1, 0, "I1", 20));
        cat.slots = vec![slot(DayOfWeek::Mon, 9)];
        let ctx = cat.ctx();
        let hard: Vec<Box<dyn Constraint>> = vec![Box::new(NoInstructorOverlap)];
        let soft: Vec<Box<dyn Constraint>> = Vec::new();
        let mut report = Report::new("t");
        let mut schedule = Schedule::new();
        let sessions = vec![
            Session::new("C1", SessionType::Theory, 0),
            Session::new("C2", SessionType::Theory, 0),
        ];

        let mut s = search(&hard, &soft, &ctx, &mut report);
        s.node_budget = Some(1);
        let placed = s.backtrack(&sessions, &mut schedule, 0);
        assert_eq!(
            placed,
            Err(PlanError::from(SchedulingError::BudgetExhausted { nodes: 1 }))
        );
        assert!(schedule.is_empty());
    }
}
