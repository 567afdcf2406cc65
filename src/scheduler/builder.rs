//! Running-order construction.
//!
//! # Algorithm
//!
//! 1. Partition performances into first / middle / last, keeping input order.
//! 2. Shuffle the middle bucket with the variation seed.
//! 3. Seed the schedule with the first bucket.
//! 4. Repeatedly select a candidate from the middle pool, append it, and
//!    record a warning if its spacing window is violated.
//! 5. Append the last bucket unchecked.
//! 6. Score the finished schedule.
//!
//! # Complexity
//! O(n^2 * p) for n middle performances with p performers each.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::violation::{check_violation, score_schedule};
use crate::config::RunConfig;
use crate::dispatching::{SelectionContext, SelectionStrategy};
use crate::error::{Result, RunningOrderError};
use crate::models::{Performance, PerformerSet, PositionConstraint, Schedule, Warning};
use crate::random::shuffle;
use crate::validation::{duplicate_names, validate_input};

/// One generated running order with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Display label, e.g. "Variation 1".
    pub label: String,
    /// Seed for the shuffle and strategy choice.
    pub seed: u64,
    /// Selection strategy used for the middle section.
    pub strategy: SelectionStrategy,
    /// The running order.
    pub schedule: Schedule,
    /// Spacing warnings recorded during construction.
    pub warnings: Vec<Warning>,
    /// Violation score of the finished schedule.
    pub score: u64,
}

impl Variation {
    /// Default label for a seed: seeds count from 0, labels from 1.
    pub fn default_label(seed: u64) -> String {
        format!("Variation {}", u128::from(seed) + 1)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Warning recorded for the named performance, if any.
    pub fn warning_for(&self, performance: &str) -> Option<&Warning> {
        self.warnings.iter().find(|w| w.performance == performance)
    }
}

/// Builds running orders from performances.
///
/// # Example
///
/// ```
/// use running_order::models::{Performance, PerformerSet};
/// use running_order::scheduler::ScheduleBuilder;
///
/// let performances = vec![
///     Performance::new("Opening").with_performers(["ana", "ben"]).first(),
///     Performance::new("Duet").with_performers(["ana", "cy"]),
///     Performance::new("Solo").with_performers(["dee"]),
/// ];
/// let set = PerformerSet::from_performances(&performances);
///
/// let variation = ScheduleBuilder::new().build(&performances, &set, 0).unwrap();
/// assert_eq!(variation.schedule.names(), vec!["Opening", "Solo", "Duet"]);
/// assert_eq!(variation.score, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    max_in_row: usize,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self { max_in_row: 1 }
    }

    /// Sets the run-length limit passed to selection and scoring.
    pub fn with_max_in_row(mut self, max_in_row: usize) -> Self {
        self.max_in_row = max_in_row;
        self
    }

    pub fn max_in_row(&self) -> usize {
        self.max_in_row
    }

    /// Builds one variation, drawing strategy randomness from OS entropy.
    pub fn build(
        &self,
        performances: &[Performance],
        performers: &PerformerSet,
        seed: u64,
    ) -> Result<Variation> {
        let mut rng = StdRng::from_os_rng();
        self.build_with_rng(performances, performers, seed, &mut rng)
    }

    /// Builds one variation with an explicit random source for the
    /// ScoreWeighted and TopThree strategies.
    ///
    /// The middle-bucket shuffle depends only on `seed`, never on `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        performances: &[Performance],
        performers: &PerformerSet,
        seed: u64,
        rng: &mut R,
    ) -> Result<Variation> {
        if performances.is_empty() {
            return Err(RunningOrderError::EmptyInput);
        }

        let strategy = SelectionStrategy::from_seed(seed);
        let (first, middle, last) = partition(performances);
        let mut pool = shuffle(&middle, seed);

        info!(
            event = "variation_start",
            seed,
            strategy = %strategy,
            deterministic = strategy.is_deterministic(),
            first = first.len(),
            pool = pool.len(),
            last = last.len(),
        );

        let mut order = first;
        let mut warnings = Vec::new();

        while !pool.is_empty() {
            let context =
                SelectionContext::new(&order, performers).with_max_in_row(self.max_in_row);
            let Some(idx) = strategy.select(&pool, &context, rng) else {
                break;
            };

            order.push(pool.remove(idx));
            let position = order.len() - 1;
            let newest = &order[position];
            debug!(event = "placed", position, performance = %newest.name);

            if let Some(message) = check_violation(newest, &order, performers) {
                debug!(event = "spacing_warning", performance = %newest.name, %message);
                warnings.push(Warning::new(newest.name.clone(), message).at(position));
            }
        }

        // Pinned closers are appended without a spacing check.
        order.extend(last);

        let score = score_schedule(&order, performers, self.max_in_row);

        info!(
            event = "variation_end",
            seed,
            strategy = %strategy,
            score,
            warnings = warnings.len(),
        );

        Ok(Variation {
            label: Variation::default_label(seed),
            seed,
            strategy,
            schedule: Schedule::from(order),
            warnings,
            score,
        })
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits into (first, middle, last), each in input order.
fn partition(
    performances: &[Performance],
) -> (Vec<Performance>, Vec<Performance>, Vec<Performance>) {
    let mut first = Vec::new();
    let mut middle = Vec::new();
    let mut last = Vec::new();
    for p in performances {
        match p.constraint {
            PositionConstraint::First => first.push(p.clone()),
            PositionConstraint::None => middle.push(p.clone()),
            PositionConstraint::Last => last.push(p.clone()),
        }
    }
    (first, middle, last)
}

/// Validates the input and builds every variation the config asks for.
pub fn generate_variations(
    performances: &[Performance],
    performers: &PerformerSet,
    config: &RunConfig,
) -> Result<Vec<Variation>> {
    config.validate()?;
    if performances.is_empty() {
        return Err(RunningOrderError::EmptyInput);
    }
    validate_input(performances).map_err(RunningOrderError::Validation)?;

    let dupes = duplicate_names(performances);
    if !dupes.is_empty() {
        warn!(event = "duplicate_names", names = ?dupes);
    }

    let builder = ScheduleBuilder::new().with_max_in_row(config.max_in_row);
    config
        .seeds()
        .map(|seed| builder.build(performances, performers, seed))
        .collect()
}
