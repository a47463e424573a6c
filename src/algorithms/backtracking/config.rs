//! Configuration for the backtracking scheduler and its default rule set.

use qtty::{Hour, Quantity};

use crate::constraints::hard::{LAB_GROUP_LIMIT, MAX_THEORY_HOURS_PER_DAY};
use crate::constraints::soft::consecutive_labs::DEFAULT_CONSECUTIVE_LAB_WEIGHT;
use crate::constraints::DEFAULT_EXAM_BLOCK;
use crate::model::TimeSlot;

/// Parameters of one scheduling run.
///
/// The defaults reproduce the institution's standing rules; every field can
/// be overridden with the `with_*` setters.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    // --- Calendar ---
    /// Weekly window in which nothing may be scheduled.
    pub exam_block: TimeSlot,

    // --- Rule parameters ---
    /// Daily THEORY load cap per instructor.
    pub max_theory_hours_per_day: Quantity<Hour>,
    /// Largest lab group; bigger courses must be split upstream.
    pub lab_group_limit: u32,
    /// Penalty for a lab hour not adjacent to its same-day siblings.
    pub consecutive_lab_weight: u32,
    /// Pair of departments whose electives must not overlap.
    pub elective_departments: [String; 2],

    // --- Search ---
    /// Departments whose courses are placed ahead of the rest.
    pub priority_departments: Vec<String>,
    /// Abort after visiting this many search nodes. `None` searches exhaustively.
    pub node_budget: Option<u64>,
}

impl SchedulerConfig {
    pub fn with_exam_block(mut self, exam_block: TimeSlot) -> Self {
        self.exam_block = exam_block;
        self
    }

    pub fn with_max_theory_hours_per_day(mut self, hours: f64) -> Self {
        self.max_theory_hours_per_day = Quantity::new(hours);
        self
    }

    pub fn with_lab_group_limit(mut self, limit: u32) -> Self {
        self.lab_group_limit = limit;
        self
    }

    pub fn with_consecutive_lab_weight(mut self, weight: u32) -> Self {
        self.consecutive_lab_weight = weight;
        self
    }

    pub fn with_elective_departments(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.elective_departments = [first.into(), second.into()];
        self
    }

    pub fn with_priority_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_departments = departments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    pub fn is_priority_department(&self, department: &str) -> bool {
        self.priority_departments.iter().any(|d| d == department)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            exam_block: DEFAULT_EXAM_BLOCK,
            max_theory_hours_per_day: Quantity::new(MAX_THEORY_HOURS_PER_DAY),
            lab_group_limit: LAB_GROUP_LIMIT,
            consecutive_lab_weight: DEFAULT_CONSECUTIVE_LAB_WEIGHT,
            elective_departments: ["CENG".to_string(), "SENG".to_string()],
            priority_departments: vec!["CENG".to_string(), "SENG".to_string()],
            node_budget: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayOfWeek;

    #[test]
    fn default_config_matches_standing_rules() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.exam_block.to_string(), "FRI 13:20-15:10");
        assert_eq!(cfg.max_theory_hours_per_day.value(), 4.0);
        assert_eq!(cfg.lab_group_limit, 40);
        assert_eq!(cfg.consecutive_lab_weight, 10);
        assert!(cfg.is_priority_department("SENG"));
        assert!(!cfg.is_priority_department("EEE"));
        assert!(cfg.node_budget.is_none());
    }

    #[test]
    fn setters_override_fields() {
        let block = TimeSlot::new(DayOfWeek::Wed, 600, 720);
        let cfg = SchedulerConfig::default()
            .with_exam_block(block)
            .with_max_theory_hours_per_day(3.0)
            .with_lab_group_limit(30)
            .with_priority_departments(["EEE"])
            .with_node_budget(1_000);
        assert_eq!(cfg.exam_block, block);
        assert_eq!(cfg.max_theory_hours_per_day.value(), 3.0);
        assert_eq!(cfg.lab_group_limit, 30);
        assert!(cfg.is_priority_department("EEE"));
        assert!(!cfg.is_priority_department("CENG"));
        assert_eq!(cfg.node_budget, Some(1_000));
    }
}
