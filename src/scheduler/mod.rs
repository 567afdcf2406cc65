//! Running-order construction, violation scoring, and comparison.
//!
//! # Algorithm
//!
//! `ScheduleBuilder` is a greedy/stochastic constructor: pinned openers,
//! then a middle section chosen one performance at a time by a
//! [`crate::dispatching::SelectionStrategy`], then pinned closers. It is a
//! heuristic and does not guarantee a zero-violation order.
//!
//! # Scoring
//!
//! `score_schedule` sums sliding-window spacing penalties; `Comparison`
//! re-scores named variations into a summary table.

mod builder;
mod comparison;
mod violation;

pub use builder::{generate_variations, ScheduleBuilder, Variation};
pub use comparison::{Comparison, ComparisonRow, PREVIEW_LEN};
pub use violation::{check_violation, repeated_performers, score_schedule, PENALTY_PER_REPEAT};
