//! Constraint-based backtracking timetable scheduler.
//!
//! A run goes through these steps:
//!
//! 1. **Validation**: reject empty or dangling inputs, warn about lab groups
//!    over the size limit.
//! 2. **Session expansion**: every weekly teaching hour becomes one session.
//! 3. **Ordering** (static, computed once): theory before labs, constrained
//!    courses first, heavier courses first.
//! 4. **Search**: depth-first. For the head session, enumerate every
//!    (timeslot, room) placement, drop those that fail a hard rule (logging
//!    each reason), rank the rest by soft penalty, then commit, recurse and
//!    undo in order. The first complete assignment is returned.
//!
//! The search is single-threaded and owns its [`Schedule`] for the whole run.
//! Worst-case time is exponential; [`SchedulerConfig::node_budget`] bounds it.
//!
//! # Module Structure
//!
//! - [`config`] - Run parameters and defaults
//! - [`validation`] - Input checks
//! - [`sessions`] - Course to session expansion
//! - [`ordering`] - Session ordering heuristic
//! - [`candidate`] - Placement generation and room prefiltering
//! - [`engine`] - Recursive search

pub mod candidate;
pub mod config;
mod engine;
pub mod ordering;
pub mod sessions;
pub mod validation;


use log::{debug, info};

use crate::constraints::hard::{
    CengVsSengElectivesNoOverlap, InstructorAvailability, LabAfterTheory, MaxTheoryHoursPerInstructorPerDay,
    NoExamBlock, NoInstructorOverlap, NoRoomOverlap, RoomCapacity, RoomTypeCompatibility,
    ThirdYearVsElectivesNoOverlap,
};
use crate::constraints::soft::PreferConsecutiveLabHours;
use crate::constraints::{Constraint, ScheduleContext};
use crate::error::{PlanError, SchedulingError};
use crate::model::{Course, Instructor, Room, TimeSlot};
use crate::report::Report;
use crate::schedule::Schedule;

pub use config::SchedulerConfig;

use engine::Search;
use ordering::order_sessions;
use sessions::build_sessions;
use validation::validate_inputs;

/// The built-in rule set, parameterised from `config`.
///
/// Hard rules come in evaluation order, followed by the soft rule.
pub fn default_constraints(config: &SchedulerConfig) -> Vec<Box<dyn Constraint>> {
    let [first, second] = &config.elective_departments;
    vec![
        Box::new(NoExamBlock),
        Box::new(InstructorAvailability),
        Box::new(MaxTheoryHoursPerInstructorPerDay::new(config.max_theory_hours_per_day)),
        Box::new(RoomCapacity::new(config.lab_group_limit)),
        Box::new(RoomTypeCompatibility),
        Box::new(NoRoomOverlap),
        Box::new(NoInstructorOverlap),
        Box::new(LabAfterTheory),
        Box::new(ThirdYearVsElectivesNoOverlap),
        Box::new(CengVsSengElectivesNoOverlap::new(first.as_str(), second.as_str())),
        Box::new(PreferConsecutiveLabHours::new(config.consecutive_lab_weight)),
    ]
}

/// Backtracking timetable scheduler.
///
/// Holds the rule sets and the report of the most recent run. The report is
/// reset at the start of every [`generate_schedule`](Scheduler::generate_schedule).
#[derive(Debug)]
pub struct Scheduler {
    config: SchedulerConfig,
    hard: Vec<Box<dyn Constraint>>,
    soft: Vec<Box<dyn Constraint>>,
    report: Report,
}

impl Scheduler {
    /// Creates a scheduler with the built-in rules.
    pub fn new(config: SchedulerConfig) -> Self {
        let rules = default_constraints(&config);
        Self::with_constraints(config, rules)
    }

    /// Creates a scheduler with exactly `constraints`, split by strength.
    ///
    /// Relative order within the hard and within the soft rules is kept.
    pub fn with_constraints(config: SchedulerConfig, constraints: Vec<Box<dyn Constraint>>) -> Self {
        let (hard, soft): (Vec<_>, Vec<_>) = constraints.into_iter().partition(|c| c.is_hard());
        Self {
            config,
            hard,
            soft,
            report: Report::default(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn hard_constraints(&self) -> &[Box<dyn Constraint>] {
        &self.hard
    }

    pub fn soft_constraints(&self) -> &[Box<dyn Constraint>] {
        &self.soft
    }

    /// Diagnostics of the most recent run.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Builds a complete timetable or explains why none was found.
    ///
    /// # Errors
    ///
    /// - [`PlanError::Validation`] if an input list is empty or a course names
    ///   an unknown instructor. No search is attempted.
    /// - [`PlanError::Scheduling`] if the search space is exhausted or the
    ///   node budget runs out. The report's violations hold the reasons.
    pub fn generate_schedule(
        &mut self,
        courses: &[Course],
        instructors: &[Instructor],
        rooms: &[Room],
        timeslots: &[TimeSlot],
    ) -> Result<Schedule, PlanError> {
        self.report = Report::new(crate::generate_id());
        let run_id = self.report.run_id.clone();

        for warning in validate_inputs(courses, instructors, rooms, timeslots, self.config.lab_group_limit)? {
            self.report.add_warning(warning);
        }

        let ctx = ScheduleContext::new(courses, instructors, rooms, timeslots).with_exam_block(self.config.exam_block);
        let sessions = order_sessions(build_sessions(courses), &ctx, &self.config);
        info!(
            "[{run_id}] scheduling {} sessions of {} courses over {} timeslots and {} rooms",
            sessions.len(),
            courses.len(),
            timeslots.len(),
            rooms.len()
        );
        debug!(
            "[{run_id}] {} hard and {} soft rules active",
            self.hard.len(),
            self.soft.len()
        );

        let mut schedule = Schedule::new();
        let mut search = Search {
            hard: &self.hard,
            soft: &self.soft,
            ctx: &ctx,
            report: &mut self.report,
            lab_group_limit: self.config.lab_group_limit,
            node_budget: self.config.node_budget,
        };
        let outcome = search.backtrack(&sessions, &mut schedule, 0);

        let nodes = self.report.nodes_explored;
        let violations = self.report.violations.len();
        match outcome {
            Ok(true) => {
                info!(
                    "[{run_id}] placed {} assignments after {nodes} nodes ({violations} rejections)",
                    schedule.len()
                );
                Ok(schedule)
            }
            Ok(false) => {
                info!("[{run_id}] search exhausted after {nodes} nodes ({violations} rejections)");
                Err(SchedulingError::Exhausted {
                    sessions: sessions.len(),
                }
                .into())
            }
            Err(e) => {
                info!("[{run_id}] search aborted after {nodes} nodes: {e}");
                Err(e)
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl crate::algorithms::SchedulingAlgorithm for Scheduler {
    fn schedule(
        &mut self,
        courses: &[Course],
        instructors: &[Instructor],
        rooms: &[Room],
        timeslots: &[TimeSlot],
    ) -> Result<Schedule, PlanError> {
        self.generate_schedule(courses, instructors, rooms, timeslots)
    }

    fn report(&self) -> &Report {
        &self.report
    }
}
