//! Text bar chart of the mood trend, one row per entry, zero axis in the middle.

use crate::domain::TrendPoint;

/// Columns on each side of the zero axis.
pub const HALF_WIDTH: usize = 20;

/// One chart row, uncolored. `score` is kept so the caller can pick a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow {
    pub label: String,
    pub bar: String,
    pub score: i32,
}

fn bar_len(score: i32, half_width: usize) -> usize {
    let magnitude = score.unsigned_abs().min(100) as usize;
    (magnitude * half_width + 50) / 100
}

/// Render points in the order given (callers pass the ascending trend).
pub fn render_rows(points: &[TrendPoint], half_width: usize) -> Vec<ChartRow> {
    points
        .iter()
        .map(|p| {
            let len = bar_len(p.score, half_width);
            let (left, right) = if p.score < 0 {
                (
                    format!("{}{}", " ".repeat(half_width - len), "█".repeat(len)),
                    " ".repeat(half_width),
                )
            } else {
                (
                    " ".repeat(half_width),
                    format!("{}{}", "█".repeat(len), " ".repeat(half_width - len)),
                )
            };
            ChartRow {
                label: p.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                bar: format!("{}│{}", left, right),
                score: p.score,
            }
        })
        .collect()
}
