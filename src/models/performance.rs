//! Performance model.
//!
//! A performance is one slot in the running order: a named act performed
//! by a group of performers, optionally pinned to the start or end of the
//! show, with a minimum spacing before any of its performers may reappear.

use serde::{Deserialize, Serialize};

use super::PerformerSet;

/// Position pin for a performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionConstraint {
    /// Placed anywhere in the middle section.
    #[default]
    None,
    /// Placed at the very start, in input order.
    First,
    /// Placed at the very end, in input order.
    Last,
}

impl PositionConstraint {
    /// Parses a constraint cell (case-insensitive, whitespace-trimmed).
    ///
    /// Returns `None` for unrecognized non-empty text.
    pub fn parse(cell: &str) -> Option<Self> {
        match cell.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Some(Self::None),
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            _ => None,
        }
    }
}

/// A performance to be placed in the running order.
///
/// Immutable once constructed; scheduling only changes its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Display name.
    pub name: String,
    /// Performer identifiers, in input order. Duplicates are kept.
    /// May contain [`super::WILDCARD`].
    pub performers: Vec<String>,
    /// Start/end pin.
    pub constraint: PositionConstraint,
    /// Minimum number of other performances between two appearances of
    /// the same performer. Always at least 1.
    pub spacing: usize,
}

impl Performance {
    /// Default spacing when none is given.
    pub const DEFAULT_SPACING: usize = 1;

    /// Creates an unconstrained performance with default spacing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            performers: Vec::new(),
            constraint: PositionConstraint::None,
            spacing: Self::DEFAULT_SPACING,
        }
    }

    /// Adds a performer.
    pub fn with_performer(mut self, performer: impl Into<String>) -> Self {
        self.performers.push(performer.into());
        self
    }

    /// Replaces the performer list.
    pub fn with_performers<I, S>(mut self, performers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.performers = performers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the position constraint.
    pub fn with_constraint(mut self, constraint: PositionConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Sets the minimum spacing. Values below 1 are raised to 1.
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing.max(1);
        self
    }

    /// Pins this performance to the start.
    pub fn first(self) -> Self {
        self.with_constraint(PositionConstraint::First)
    }

    /// Pins this performance to the end.
    pub fn last(self) -> Self {
        self.with_constraint(PositionConstraint::Last)
    }

    /// Performer list with the wildcard expanded.
    pub fn expanded_performers<'a>(&'a self, set: &'a PerformerSet) -> Vec<&'a str> {
        set.resolve(&self.performers)
    }
}
