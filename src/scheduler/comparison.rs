//! Cross-variation comparison.
//!
//! Re-scores each named variation and summarizes it in one row, so
//! candidate running orders can be ranked side by side.
//!
//! # Columns
//!
//! | Column | Definition |
//! |--------|-----------|
//! | Index | 1-based position in the requested label list |
//! | Warnings | Spacing warnings recorded during construction |
//! | Score | Violation score, recomputed from the schedule |
//! | First / Last | Names of the first and last 3 performances |

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::builder::Variation;
use super::violation::score_schedule;
use crate::models::PerformerSet;

/// Number of names shown at each end of a schedule.
pub const PREVIEW_LEN: usize = 3;

/// Summary of one variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// 1-based index in the requested label list.
    pub index: usize,
    pub label: String,
    pub warning_count: usize,
    pub score: u64,
    /// First [`PREVIEW_LEN`] performance names.
    pub first: Vec<String>,
    /// Last [`PREVIEW_LEN`] performance names.
    pub last: Vec<String>,
}

/// Comparison table over a set of variations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Compares the variations named by `labels`, looked up in `variations`.
    ///
    /// A label with no matching variation is skipped with a warning; the
    /// rest of the comparison proceeds.
    pub fn build<S: AsRef<str>>(
        labels: &[S],
        variations: &[Variation],
        performers: &PerformerSet,
        max_in_row: usize,
    ) -> Self {
        let mut rows = Vec::with_capacity(labels.len());

        for (i, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            let Some(variation) = variations.iter().find(|v| v.label == label) else {
                warn!(event = "comparison_skip", label, "variation output not found");
                continue;
            };

            let schedule = &variation.schedule;
            rows.push(ComparisonRow {
                index: i + 1,
                label: label.to_string(),
                warning_count: variation.warning_count(),
                score: score_schedule(schedule.as_slice(), performers, max_in_row),
                first: owned_names(schedule.head_names(PREVIEW_LEN)),
                last: owned_names(schedule.tail_names(PREVIEW_LEN)),
            });
        }

        Self { rows }
    }

    /// Compares every variation under its own label.
    pub fn of_all(variations: &[Variation], performers: &PerformerSet, max_in_row: usize) -> Self {
        let labels: Vec<&str> = variations.iter().map(|v| v.label.as_str()).collect();
        Self::build(&labels, variations, performers, max_in_row)
    }

    /// Row with the lowest score; ties go to the lower index.
    pub fn best(&self) -> Option<&ComparisonRow> {
        self.rows.iter().min_by_key(|r| (r.score, r.index))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn owned_names(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::SelectionStrategy;
    use crate::models::{Performance, Schedule, Warning};

    fn variation(label: &str, names: &[(&str, &str)], warnings: usize) -> Variation {
        let schedule: Schedule = names
            .iter()
            .map(|(n, who)| Performance::new(*n).with_performer(*who))
            .collect::<Vec<_>>()
            .into();
        Variation {
            label: label.to_string(),
            seed: 0,
            strategy: SelectionStrategy::Greedy,
            schedule,
            warnings: (0..warnings).map(|i| Warning::new(format!("P{i}"), "w")).collect(),
            score: 0,
        }
    }

    fn fixture() -> (Vec<Variation>, PerformerSet) {
        let variations = vec![
            variation(
                "Variation 1",
                &[("A", "x"), ("B", "x"), ("C", "y"), ("D", "z"), ("E", "w")],
                1,
            ),
            variation(
                "Variation 2",
                &[("B", "x"), ("C", "y"), ("A", "x"), ("D", "z"), ("E", "w")],
                0,
            ),
        ];
        let set: PerformerSet = ["w", "x", "y", "z"].into_iter().collect();
        (variations, set)
    }

    #[test]
    fn test_rows_rescored() {
        let (variations, set) = fixture();
        let cmp = Comparison::of_all(&variations, &set, 1);

        assert_eq!(cmp.len(), 2);
        // Stored score is 0; the comparison recomputes it.
        assert_eq!(cmp.rows[0].score, 10);
        assert_eq!(cmp.rows[1].score, 0);
        assert_eq!(cmp.rows[0].warning_count, 1);
    }

    #[test]
    fn test_head_tail_preview() {
        let (variations, set) = fixture();
        let cmp = Comparison::of_all(&variations, &set, 1);
        assert_eq!(cmp.rows[1].first, vec!["B", "C", "A"]);
        assert_eq!(cmp.rows[1].last, vec!["A", "D", "E"]);
    }

    #[test]
    fn test_missing_label_skipped() {
        let (variations, set) = fixture();
        let cmp = Comparison::build(
            &["Variation 1", "Variation 9", "Variation 2"],
            &variations,
            &set,
            1,
        );
        assert_eq!(cmp.len(), 2);
        assert_eq!(cmp.rows[0].index, 1);
        assert_eq!(cmp.rows[1].index, 3);
        assert_eq!(cmp.rows[1].label, "Variation 2");
    }

    #[test]
    fn test_best() {
        let (variations, set) = fixture();
        let cmp = Comparison::of_all(&variations, &set, 1);
        assert_eq!(cmp.best().map(|r| r.label.as_str()), Some("Variation 2"));
        assert!(Comparison::default().best().is_none());
    }
}
