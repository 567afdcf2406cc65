//! Selection strategies.
//!
//! # Strategies
//!
//! | Strategy | Rule | Deterministic |
//! |----------|------|---------------|
//! | Greedy | max score, first occurrence on ties | yes |
//! | ScoreWeighted | roulette wheel, weight `max(1, score + 2)` | no |
//! | TopThree | uniform among the 3 best scores | no |
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 1 (roulette-wheel selection)

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{adjacency_score, CandidateScore, SelectionContext};
use crate::models::Performance;

/// Number of candidates [`SelectionStrategy::TopThree`] chooses among.
const TOP_K: usize = 3;

/// Offset keeping roulette weights positive; scores are usually <= 0.
const WEIGHT_OFFSET: CandidateScore = 2;

/// Runtime-selectable rule for picking the next performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Highest score; ties go to the earliest pool entry.
    Greedy,
    /// Roulette-wheel selection weighted by score.
    ScoreWeighted,
    /// Uniform choice among the three best-scoring candidates.
    TopThree,
}

impl SelectionStrategy {
    /// Strategy for a variation seed: `seed mod 3` picks
    /// Greedy, ScoreWeighted, TopThree in that order.
    pub fn from_seed(seed: u64) -> Self {
        match seed % 3 {
            0 => Self::Greedy,
            1 => Self::ScoreWeighted,
            _ => Self::TopThree,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::ScoreWeighted => "score-weighted",
            Self::TopThree => "top-three",
        }
    }

    /// Whether repeated calls on the same state always agree.
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Greedy)
    }

    /// Picks an index into `pool`. Returns `None` only for an empty pool.
    pub fn select<R: Rng + ?Sized>(
        &self,
        pool: &[Performance],
        context: &SelectionContext<'_>,
        rng: &mut R,
    ) -> Option<usize> {
        if pool.is_empty() {
            return None;
        }

        let scores: Vec<CandidateScore> =
            pool.iter().map(|p| adjacency_score(p, context)).collect();

        let index = match self {
            Self::Greedy => select_greedy(&scores),
            Self::ScoreWeighted => select_weighted(&scores, rng),
            Self::TopThree => select_top_k(&scores, rng),
        };
        Some(index)
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn select_greedy(scores: &[CandidateScore]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}

fn select_weighted<R: Rng + ?Sized>(scores: &[CandidateScore], rng: &mut R) -> usize {
    let weights: Vec<CandidateScore> = scores
        .iter()
        .map(|&s| (s + WEIGHT_OFFSET).max(1))
        .collect();
    let total: CandidateScore = weights.iter().sum();

    let draw = rng.random::<f64>() * total as f64;
    let mut cumulative: CandidateScore = 0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative as f64 >= draw {
            return i;
        }
    }
    weights.len() - 1
}

fn select_top_k<R: Rng + ?Sized>(scores: &[CandidateScore], rng: &mut R) -> usize {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    // Stable: equal scores keep pool order.
    ranked.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
    let top = &ranked[..ranked.len().min(TOP_K)];
    top[rng.random_range(0..top.len())]
}
