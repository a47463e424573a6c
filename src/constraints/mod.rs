//! Constraint framework and the built-in timetabling rules.
//!
//! Every rule implements [`Constraint`] and is judged against the committed
//! [`Schedule`](crate::schedule::Schedule) plus a read-only
//! [`ScheduleContext`]. The scheduler keeps hard and soft rules in two ordered
//! collections and never special-cases a rule by name.

pub mod constraint;
pub mod context;
pub mod hard;
pub mod soft;

#[cfg(test)]
pub(crate) mod fixtures;

pub use constraint::{Constraint, ConstraintResult, Strength};
pub use context::{ScheduleContext, DEFAULT_EXAM_BLOCK};
