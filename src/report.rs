//! Diagnostics collected during one scheduling run.

use std::collections::HashMap;

use log::warn;

use crate::model::Session;
use crate::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Warnings and hard-constraint rejections seen during a run.
///
/// Returned to the caller instead of living in process-wide logger state.
/// `violations` includes rejections from branches that were later
/// backtracked away, so it is a search trace rather than a list of defects
/// in the final schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    /// Identifier of the run, also present in its log lines.
    pub run_id: Id,
    /// Informational advisories, e.g. lab groups over the size limit.
    pub warnings: Vec<String>,
    /// Every hard-constraint rejection, as `[<course> <TYPE>] <reason>`.
    pub violations: Vec<String>,
    /// Search nodes (session placements attempted) visited.
    pub nodes_explored: u64,
}

impl Report {
    pub fn new(run_id: impl Into<Id>) -> Self {
        Self {
            run_id: run_id.into(),
            ..Self::default()
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("[{}] {}", self.run_id, message);
        self.warnings.push(message);
    }

    pub fn add_violation(&mut self, session: &Session, reason: &str) {
        self.violations.push(format!("{} {}", session.label(), reason));
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.violations.is_empty()
    }

    /// Violation counts per `[<course> <TYPE>]` label, most frequent first.
    ///
    /// Ties are ordered by label. A failed run's top entries usually point at
    /// the course/session type that proved infeasible.
    pub fn hotspots(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for v in &self.violations {
            let label = v
                .split_once("] ")
                .map_or_else(|| v.clone(), |(head, _)| format!("{head}]"));
            *counts.entry(label).or_default() += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}
