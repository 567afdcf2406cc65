//! Text rendering of variations and comparisons.

use serde::{Deserialize, Serialize};

use crate::scheduler::{Comparison, Variation};

/// One rendered line of a variation's running order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationRow {
    /// 1-based running-order position.
    pub order: usize,
    pub name: String,
    /// Performer list as written, comma-joined.
    pub performers: String,
    /// Spacing warning for this placement, or empty.
    pub warning: String,
}

/// Rows for a variation's running order.
pub fn variation_rows(variation: &Variation) -> Vec<VariationRow> {
    variation
        .schedule
        .performances
        .iter()
        .enumerate()
        .map(|(i, p)| VariationRow {
            order: i + 1,
            name: p.name.clone(),
            performers: p.performers.join(", "),
            warning: variation
                .warnings
                .iter()
                .find(|w| w.position == i)
                .map(|w| w.message.clone())
                .unwrap_or_default(),
        })
        .collect()
}

/// `"<label>: <n> warnings, violation score <s>"`.
pub fn summary_line(variation: &Variation) -> String {
    format!(
        "{}: {} warnings, violation score {}",
        variation.label,
        variation.warning_count(),
        variation.score
    )
}

/// Running-order table followed by the summary line.
pub fn render_variation(variation: &Variation) -> String {
    let rows: Vec<Vec<String>> = variation_rows(variation)
        .into_iter()
        .map(|r| vec![r.order.to_string(), r.name, r.performers, r.warning])
        .collect();

    let mut out = format!("== {} ({}) ==\n", variation.label, variation.strategy);
    out.push_str(&format_table(
        &["#", "Performance", "Performers", "Warning"],
        &rows,
    ));
    out.push_str(&summary_line(variation));
    out.push('\n');
    out
}

/// Comparison rows as cell text.
pub fn comparison_rows(comparison: &Comparison) -> Vec<Vec<String>> {
    comparison
        .rows
        .iter()
        .map(|r| {
            vec![
                r.index.to_string(),
                r.warning_count.to_string(),
                r.score.to_string(),
                r.first.join(", "),
                r.last.join(", "),
            ]
        })
        .collect()
}

/// Comparison table across variations.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::from("== Comparison ==\n");
    out.push_str(&format_table(
        &["Variation", "Warnings", "Score", "First 3", "Last 3"],
        &comparison_rows(comparison),
    ));
    if let Some(best) = comparison.best() {
        out.push_str(&format!("Lowest score: {} ({})\n", best.label, best.score));
    }
    out
}

/// Left-aligned columns separated by two spaces.
fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();

    let mut out = format_line(headers.iter().copied(), &widths);
    out.push_str(&format_line(rule.iter().map(String::as_str), &widths));
    for row in rows {
        out.push_str(&format_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let mut line = padded.join("  ").trim_end().to_string();
    line.push('\n');
    line
}
