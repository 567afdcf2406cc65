//! Schedule (running order) model.
//!
//! A schedule is one variation's complete running order, plus the spacing
//! warnings recorded while it was built.

use serde::{Deserialize, Serialize};

use super::Performance;

/// An ordered running order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Performances in running order.
    pub performances: Vec<Performance>,
}

/// A spacing violation observed when a performance was appended.
///
/// Advisory only: warnings never change later placement decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// 0-based schedule position of the placement that triggered it.
    pub position: usize,
    /// Name of the performance whose placement triggered the warning.
    pub performance: String,
    /// Human-readable description.
    pub message: String,
}

impl Warning {
    pub fn new(performance: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            position: 0,
            performance: performance.into(),
            message: message.into(),
        }
    }

    /// Sets the schedule position.
    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a performance.
    pub fn push(&mut self, performance: Performance) {
        self.performances.push(performance);
    }

    /// Number of placed performances.
    pub fn len(&self) -> usize {
        self.performances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }

    /// The most recently placed performance.
    pub fn last(&self) -> Option<&Performance> {
        self.performances.last()
    }

    /// Performance names in running order.
    pub fn names(&self) -> Vec<&str> {
        self.performances.iter().map(|p| p.name.as_str()).collect()
    }

    /// Names of the first `n` performances.
    pub fn head_names(&self, n: usize) -> Vec<&str> {
        self.performances
            .iter()
            .take(n)
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Names of the last `n` performances, in running order.
    pub fn tail_names(&self, n: usize) -> Vec<&str> {
        let start = self.performances.len().saturating_sub(n);
        self.performances[start..]
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Position of the first performance with the given name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.performances.iter().position(|p| p.name == name)
    }

    pub fn as_slice(&self) -> &[Performance] {
        &self.performances
    }
}

impl From<Vec<Performance>> for Schedule {
    fn from(performances: Vec<Performance>) -> Self {
        Self { performances }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(Performance::new)
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_head_and_tail_names() {
        let s = sample();
        assert_eq!(s.head_names(3), vec!["A", "B", "C"]);
        assert_eq!(s.tail_names(3), vec!["C", "D", "E"]);
    }

    #[test]
    fn test_head_tail_short_schedule() {
        let s: Schedule = vec![Performance::new("Only")].into();
        assert_eq!(s.head_names(3), vec!["Only"]);
        assert_eq!(s.tail_names(3), vec!["Only"]);
    }

    #[test]
    fn test_position_of() {
        let s = sample();
        assert_eq!(s.position_of("C"), Some(2));
        assert_eq!(s.position_of("Z"), None);
        assert_eq!(s.last().map(|p| p.name.as_str()), Some("E"));
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert!(s.tail_names(3).is_empty());
    }
}
