//! Candidate selection for running-order construction.
//!
//! Picks which unscheduled performance goes next. All strategies share one
//! scoring primitive, [`adjacency_score`], and differ only in how they turn
//! scores into a choice.
//!
//! # Usage
//!
//! ```
//! use running_order::dispatching::{SelectionContext, SelectionStrategy};
//! use running_order::models::{Performance, PerformerSet};
//!
//! let pool = vec![
//!     Performance::new("A").with_performers(["x"]),
//!     Performance::new("B").with_performers(["y"]),
//! ];
//! let scheduled = vec![Performance::new("Opener").with_performers(["x"])];
//! let set = PerformerSet::from_performances(&pool);
//! let ctx = SelectionContext::new(&scheduled, &set);
//!
//! let mut rng = rand::rng();
//! assert_eq!(SelectionStrategy::Greedy.select(&pool, &ctx, &mut rng), Some(1));
//! ```

mod context;
mod strategy;

pub use context::SelectionContext;
pub use strategy::SelectionStrategy;

use std::collections::HashSet;

use crate::models::Performance;

/// Score of a candidate given the schedule so far.
///
/// Higher = better. 0 when nothing has been placed yet; otherwise the
/// negated number of the candidate's (wildcard-expanded) performers that
/// also appear in the immediately preceding performance.
pub type CandidateScore = i64;

/// Scores `candidate` against the last element of `context.scheduled`.
pub fn adjacency_score(candidate: &Performance, context: &SelectionContext<'_>) -> CandidateScore {
    let Some(previous) = context.previous() else {
        return 0;
    };

    let previous: HashSet<&str> = previous
        .expanded_performers(context.performers)
        .into_iter()
        .collect();

    let shared = candidate
        .expanded_performers(context.performers)
        .into_iter()
        .filter(|p| previous.contains(p))
        .count();

    -(shared as CandidateScore)
}
