//! Performance rows to typed records.
//!
//! Columns are located by header name (case-insensitive, trimmed), so
//! they may appear in any order. Recognized headers:
//!
//! | Header | Field | Default when absent |
//! |--------|-------|---------------------|
//! | `performance name` | name | `Performance N` |
//! | `performers` | comma-separated performers | empty |
//! | `constraints` | `first` / `last` | none |
//! | `minimum spacing` | positive integer | 1 |
//!
//! Row problems never abort the parse: the row is skipped or defaulted
//! and reported as a [`RowIssue`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Table;
use crate::error::{Result, RunningOrderError};
use crate::models::{Performance, PerformerSet, PositionConstraint};

pub const NAME_HEADER: &str = "performance name";
pub const PERFORMERS_HEADER: &str = "performers";
pub const CONSTRAINTS_HEADER: &str = "constraints";
pub const SPACING_HEADER: &str = "minimum spacing";

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub performers: Option<usize>,
    pub constraints: Option<usize>,
    pub spacing: Option<usize>,
}

impl ColumnMap {
    /// Resolves columns from a header row. First match wins.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim().eq_ignore_ascii_case(wanted))
        };
        Self {
            name: find(NAME_HEADER),
            performers: find(PERFORMERS_HEADER),
            constraints: find(CONSTRAINTS_HEADER),
            spacing: find(SPACING_HEADER),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.name.is_some() || self.performers.is_some()
    }
}

/// Categories of row problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowIssueKind {
    /// Row had content but neither a name nor performers; dropped.
    Skipped,
    /// Constraint text not recognized; treated as none.
    UnknownConstraint,
    /// Spacing not a positive integer; defaulted to 1.
    InvalidSpacing,
}

/// A non-fatal problem with one data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// 1-based data row number (the header is row 0).
    pub row: usize,
    pub kind: RowIssueKind,
    pub message: String,
}

/// Parsed performances with their performer set and row diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    pub performances: Vec<Performance>,
    pub performers: PerformerSet,
    pub issues: Vec<RowIssue>,
}

/// Parses every data row of `table` into performances.
///
/// Fails only when the header row has neither a name nor a performers
/// column. An input with zero usable rows parses successfully; the
/// scheduler rejects it.
pub fn parse_performances(table: &Table) -> Result<ParsedInput> {
    let columns = ColumnMap::from_headers(&table.headers);
    if !columns.is_usable() {
        return Err(RunningOrderError::Table(format!(
            "header row needs a '{NAME_HEADER}' or '{PERFORMERS_HEADER}' column"
        )));
    }

    let mut parsed = ParsedInput::default();

    for (i, row) in table.rows.iter().enumerate() {
        let row_number = i + 1;
        let cell = move |col: Option<usize>| cell_at(row, col);

        if row.iter().all(|c| c.trim().is_empty()) {
            debug!(event = "blank_row", row = row_number);
            continue;
        }

        let name = cell(columns.name);
        let performers = split_performers(cell(columns.performers));

        if name.is_empty() && performers.is_empty() {
            let issue = RowIssue {
                row: row_number,
                kind: RowIssueKind::Skipped,
                message: "row has neither a name nor performers".into(),
            };
            warn!(event = "row_skipped", row = row_number, reason = %issue.message);
            parsed.issues.push(issue);
            continue;
        }

        let name = if name.is_empty() {
            format!("Performance {row_number}")
        } else {
            name.to_string()
        };

        let constraint_cell = cell(columns.constraints);
        let constraint = PositionConstraint::parse(constraint_cell).unwrap_or_else(|| {
            let message = format!("unknown constraint '{constraint_cell}', using none");
            warn!(event = "row_defaulted", row = row_number, %message);
            parsed.issues.push(RowIssue {
                row: row_number,
                kind: RowIssueKind::UnknownConstraint,
                message,
            });
            PositionConstraint::None
        });

        let spacing_cell = cell(columns.spacing);
        let spacing = parse_spacing(spacing_cell).unwrap_or_else(|| {
            let message = format!(
                "invalid minimum spacing '{spacing_cell}', using {}",
                Performance::DEFAULT_SPACING
            );
            warn!(event = "row_defaulted", row = row_number, %message);
            parsed.issues.push(RowIssue {
                row: row_number,
                kind: RowIssueKind::InvalidSpacing,
                message,
            });
            Performance::DEFAULT_SPACING
        });

        parsed.performances.push(
            Performance::new(name)
                .with_performers(performers)
                .with_constraint(constraint)
                .with_spacing(spacing),
        );
    }

    parsed.performers = PerformerSet::from_performances(&parsed.performances);
    Ok(parsed)
}

/// Trimmed cell text; missing cells read as empty.
fn cell_at(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).map_or("", |s| s.trim())
}

/// Splits a performers cell on commas, trimming and dropping empties.
pub fn split_performers(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a spacing cell. Empty means the default; integral floats such
/// as `2.0` are accepted since spreadsheets often export numbers that way.
fn parse_spacing(cell: &str) -> Option<usize> {
    if cell.is_empty() {
        return Some(Performance::DEFAULT_SPACING);
    }
    if let Ok(n) = cell.parse::<usize>() {
        return (n >= 1).then_some(n);
    }
    let f = cell.parse::<f64>().ok()?;
    (f.is_finite() && f >= 1.0 && f.fract() == 0.0).then_some(f as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WILDCARD;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_columns_by_header_any_order() {
        let t = table(
            &["Minimum Spacing", " PERFORMERS ", "Performance Name", "Constraints"],
            &[&["2", "ana, ben", "Duet", "first"]],
        );
        let parsed = parse_performances(&t).unwrap();
        let p = &parsed.performances[0];

        assert_eq!(p.name, "Duet");
        assert_eq!(p.performers, vec!["ana", "ben"]);
        assert_eq!(p.spacing, 2);
        assert_eq!(p.constraint, PositionConstraint::First);
        assert!(parsed.issues.is_empty());
    }

    #[test]
    fn test_optional_columns_default() {
        let t = table(&["Performance Name", "Performers"], &[&["Solo", "cy"]]);
        let parsed = parse_performances(&t).unwrap();
        let p = &parsed.performances[0];
        assert_eq!(p.spacing, 1);
        assert_eq!(p.constraint, PositionConstraint::None);
    }

    #[test]
    fn test_synthetic_name() {
        let t = table(
            &["Performance Name", "Performers"],
            &[&["Solo", "cy"], &["", "ana"]],
        );
        let parsed = parse_performances(&t).unwrap();
        assert_eq!(parsed.performances[1].name, "Performance 2");
    }

    #[test]
    fn test_blank_and_empty_rows_skipped() {
        let t = table(
            &["Performance Name", "Performers", "Constraints"],
            &[&["", "", ""], &["", "", "last"], &["Solo", "cy", ""]],
        );
        let parsed = parse_performances(&t).unwrap();

        assert_eq!(parsed.performances.len(), 1);
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].row, 2);
        assert_eq!(parsed.issues[0].kind, RowIssueKind::Skipped);
    }

    #[test]
    fn test_bad_cells_defaulted() {
        let t = table(
            &["Performance Name", "Performers", "Constraints", "Minimum Spacing"],
            &[&["A", "x", "middle", "soon"], &["B", "y", "", "0"], &["C", "z", "", "3.0"]],
        );
        let parsed = parse_performances(&t).unwrap();

        assert_eq!(parsed.performances.len(), 3);
        assert_eq!(parsed.performances[0].constraint, PositionConstraint::None);
        assert_eq!(parsed.performances[0].spacing, 1);
        assert_eq!(parsed.performances[1].spacing, 1);
        assert_eq!(parsed.performances[2].spacing, 3);

        let kinds: Vec<RowIssueKind> = parsed.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowIssueKind::UnknownConstraint,
                RowIssueKind::InvalidSpacing,
                RowIssueKind::InvalidSpacing,
            ]
        );
    }

    #[test]
    fn test_short_rows() {
        let t = table(
            &["Performance Name", "Performers", "Minimum Spacing"],
            &[&["A", "x"]],
        );
        let parsed = parse_performances(&t).unwrap();
        assert_eq!(parsed.performances[0].spacing, 1);
    }

    #[test]
    fn test_performer_set_excludes_wildcard() {
        let t = table(
            &["Performance Name", "Performers"],
            &[&["A", "x, y"], &["Finale", WILDCARD]],
        );
        let parsed = parse_performances(&t).unwrap();
        assert_eq!(parsed.performers.len(), 2);
        assert_eq!(
            parsed.performances[1].expanded_performers(&parsed.performers),
            vec!["x", "y"]
        );
    }

    #[test]
    fn test_unusable_headers() {
        let t = table(&["Title", "Cast"], &[&["A", "x"]]);
        assert!(matches!(
            parse_performances(&t),
            Err(RunningOrderError::Table(_))
        ));
    }

    #[test]
    fn test_split_performers() {
        assert_eq!(split_performers(" a, ,b ,a"), vec!["a", "b", "a"]);
        assert!(split_performers("").is_empty());
    }
}
