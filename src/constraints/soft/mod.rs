//! Soft constraints: violations are tolerated but add a weighted penalty
//! used to rank otherwise legal candidates.

pub mod consecutive_labs;

pub use consecutive_labs::PreferConsecutiveLabHours;
