//! Tabular input and output at the edge of the scheduler.
//!
//! The scheduling core only sees typed [`crate::models::Performance`]
//! records. This module turns header-addressed rows into those records and
//! renders results back into rows and text tables.
//!
//! # Sources
//!
//! - Delimited text ([`Table::from_delimited`]). Tab is the usual
//!   delimiter because the performers cell itself contains commas.
//! - JSON array of string arrays ([`Table::from_json`]), header first.

mod parse;
mod render;

pub use parse::{
    parse_performances, split_performers, ColumnMap, ParsedInput, RowIssue, RowIssueKind,
    CONSTRAINTS_HEADER, NAME_HEADER, PERFORMERS_HEADER, SPACING_HEADER,
};
pub use render::{
    comparison_rows, render_comparison, render_variation, summary_line, variation_rows,
    VariationRow,
};

use crate::error::{Result, RunningOrderError};

/// Default delimiter for text input.
pub const DEFAULT_DELIMITER: char = '\t';

/// A header row plus data rows of raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Reads delimiter-separated text. The first non-empty line is the
    /// header row; trailing empty lines are dropped.
    pub fn from_delimited(text: &str, delimiter: char) -> Result<Self> {
        let mut lines = text
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .skip_while(|l| l.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| RunningOrderError::Table("input has no header row".into()))?;
        let headers = split_line(header, delimiter);

        let mut rows: Vec<Vec<String>> = lines.map(|l| split_line(l, delimiter)).collect();
        while rows
            .last()
            .is_some_and(|r| r.iter().all(|c| c.trim().is_empty()))
        {
            rows.pop();
        }

        Ok(Self { headers, rows })
    }

    /// Reads a JSON array of string arrays; the first array is the header.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut all: Vec<Vec<String>> = serde_json::from_str(json)?;
        if all.is_empty() {
            return Err(RunningOrderError::Table("input has no header row".into()));
        }
        let headers = all.remove(0);
        Ok(Self { headers, rows: all })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn split_line(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(String::from).collect()
}
