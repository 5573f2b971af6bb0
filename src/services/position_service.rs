use std::cmp::Ordering;

use crate::models::PositionRow;

/// How many holdings the positions panel shows.
pub const TOP_N: usize = 10;

/// Highest-weight rows first, at most `n` of them. The sort is stable,
/// so provider order is preserved among equal weights.
pub fn top_positions(mut rows: Vec<PositionRow>, n: usize) -> Vec<PositionRow> {
    rows.sort_by(|a, b| {
        b.weight_pct
            .partial_cmp(&a.weight_pct)
            .unwrap_or(Ordering::Equal)
    });
    rows.truncate(n);
    rows
}

/// Cells for the display table, in display-column order.
pub fn display_rows(rows: &[PositionRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.sec_desc.clone(),
                format!("{:.2}", row.weight_pct),
                format!("{:.2}", row.active_weight_pct),
            ]
        })
        .collect()
}
