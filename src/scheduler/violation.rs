//! Spacing-violation detection and scoring.
//!
//! A performance with spacing `s` requires that any window of `s + 1`
//! consecutive performances ending at it contains each performer at most
//! once. Both the per-placement detector and the whole-schedule scorer
//! count appearances the same way: each window element contributes at
//! most one appearance per performer.
//!
//! # Scoring
//!
//! | Quantity | Definition |
//! |----------|-----------|
//! | Window at `i` | `schedule[max(0, i - spacing_i) ..= i]` |
//! | Penalty per performer | `(count - 1) * 10` when `count > 1` |
//! | Score | Sum over all positions |
//!
//! Overlapping windows count the same clustering more than once, so
//! persistent clustering weighs more than a single near miss.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Performance, PerformerSet};

/// Penalty per extra appearance inside a window.
pub const PENALTY_PER_REPEAT: u64 = 10;

/// Appearance count per performer across `window`.
fn window_counts<'a>(
    window: &'a [Performance],
    performers: &'a PerformerSet,
) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for performance in window {
        let distinct: HashSet<&str> = performance
            .expanded_performers(performers)
            .into_iter()
            .collect();
        for performer in distinct {
            *counts.entry(performer).or_insert(0) += 1;
        }
    }
    counts
}

/// Performers appearing more than once in `window`, sorted.
pub fn repeated_performers<'a>(
    window: &'a [Performance],
    performers: &'a PerformerSet,
) -> Vec<&'a str> {
    window_counts(window, performers)
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(performer, _)| performer)
        .collect()
}

/// Checks the trailing window after `newest` was appended.
///
/// `schedule` must already end with `newest`. Returns a warning message
/// naming every repeated performer, or `None` when the window is clean or
/// the schedule is not yet longer than `newest.spacing`.
pub fn check_violation(
    newest: &Performance,
    schedule: &[Performance],
    performers: &PerformerSet,
) -> Option<String> {
    let spacing = newest.spacing;
    if schedule.len() <= spacing {
        return None;
    }

    let window = &schedule[schedule.len() - (spacing + 1)..];
    let violators = repeated_performers(window, performers);
    if violators.is_empty() {
        return None;
    }

    Some(format!(
        "Spacing violation (min spacing {spacing}): {} appear more than once in the last {} performances",
        violators.join(", "),
        spacing + 1
    ))
}

/// Aggregate spacing penalty for a complete schedule. Lower is better.
///
/// `_max_in_row` is accepted for signature stability; the score is
/// driven by spacing windows alone.
pub fn score_schedule(
    schedule: &[Performance],
    performers: &PerformerSet,
    _max_in_row: usize,
) -> u64 {
    schedule
        .iter()
        .enumerate()
        .map(|(i, performance)| {
            let start = i.saturating_sub(performance.spacing);
            window_counts(&schedule[start..=i], performers)
                .values()
                .filter(|&&c| c > 1)
                .map(|&c| (c as u64 - 1) * PENALTY_PER_REPEAT)
                .sum::<u64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WILDCARD;

    fn perf(name: &str, performers: &[&str]) -> Performance {
        Performance::new(name).with_performers(performers.iter().copied())
    }

    fn set_of(schedule: &[Performance]) -> PerformerSet {
        PerformerSet::from_performances(schedule)
    }

    #[test]
    fn test_no_window_when_too_short() {
        // Heavy overlap, but len <= spacing.
        let schedule = vec![
            perf("A", &["x"]),
            perf("B", &["x"]),
            perf("C", &["x"]).with_spacing(3),
        ];
        let set = set_of(&schedule);
        assert_eq!(check_violation(&schedule[2], &schedule, &set), None);
    }

    #[test]
    fn test_adjacent_repeat_detected() {
        let schedule = vec![perf("A", &["x", "y"]), perf("B", &["y", "x"])];
        let set = set_of(&schedule);

        let msg = check_violation(&schedule[1], &schedule, &set).unwrap();
        assert!(msg.contains("x, y"), "{msg}");
        assert!(msg.contains("min spacing 1"), "{msg}");
    }

    #[test]
    fn test_window_excludes_older_elements() {
        let schedule = vec![perf("A", &["x"]), perf("B", &["y"]), perf("C", &["x"])];
        let set = set_of(&schedule);
        assert_eq!(check_violation(&schedule[2], &schedule, &set), None);

        let wide = schedule[2].clone().with_spacing(2);
        let schedule = vec![schedule[0].clone(), schedule[1].clone(), wide];
        assert!(check_violation(&schedule[2], &schedule, &set).is_some());
    }

    #[test]
    fn test_duplicate_within_one_performance_is_not_a_violation() {
        let schedule = vec![perf("A", &["y"]), perf("B", &["x", "x"])];
        let set = set_of(&schedule);
        assert_eq!(check_violation(&schedule[1], &schedule, &set), None);
    }

    #[test]
    fn test_wildcard_overlaps_everyone() {
        let schedule = vec![perf("A", &["x"]), perf("Finale", &[WILDCARD])];
        let set: PerformerSet = ["x", "y"].into_iter().collect();
        let msg = check_violation(&schedule[1], &schedule, &set).unwrap();
        assert!(msg.contains(": x appear"), "{msg}");
    }

    #[test]
    fn test_score_zero_when_spaced() {
        let schedule = vec![
            perf("A", &["x"]),
            perf("B", &["y"]),
            perf("C", &["x"]),
            perf("D", &["y"]),
        ];
        let set = set_of(&schedule);
        assert_eq!(score_schedule(&schedule, &set, 1), 0);
    }

    #[test]
    fn test_score_positive_on_close_repeat() {
        let schedule = vec![perf("A", &["x"]), perf("B", &["x"])];
        let set = set_of(&schedule);
        assert_eq!(score_schedule(&schedule, &set, 1), 10);
    }

    #[test]
    fn test_score_counts_sliding_windows() {
        // x at 0, 1, 2 with spacing 2 everywhere.
        // i=1: [0,1] x=2 -> 10; i=2: [0..=2] x=3 -> 20.
        let schedule: Vec<Performance> = ["A", "B", "C"]
            .into_iter()
            .map(|n| perf(n, &["x"]).with_spacing(2))
            .collect();
        let set = set_of(&schedule);
        assert_eq!(score_schedule(&schedule, &set, 1), 30);
    }

    #[test]
    fn test_score_uses_each_positions_own_spacing() {
        // B has spacing 1, C has spacing 2: only C's window reaches A.
        let schedule = vec![
            perf("A", &["x"]),
            perf("B", &["y"]),
            perf("C", &["x"]).with_spacing(2),
        ];
        let set = set_of(&schedule);
        assert_eq!(score_schedule(&schedule, &set, 1), 10);
    }

    #[test]
    fn test_score_ignores_max_in_row() {
        let schedule = vec![perf("A", &["x"]), perf("B", &["x"]), perf("C", &["x"])];
        let set = set_of(&schedule);
        assert_eq!(
            score_schedule(&schedule, &set, 1),
            score_schedule(&schedule, &set, 5)
        );
    }

    #[test]
    fn test_score_empty() {
        assert_eq!(score_schedule(&[], &PerformerSet::new(), 1), 0);
    }
}
