use serde::{Deserialize, Serialize};

// One holding of a portfolio as reported by the positions endpoint.
// Weights are percentages of the portfolio; active weight is relative
// to the portfolio's benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRow {
    pub port_id: String,
    pub sec_desc: String,
    pub weight_pct: f64,
    pub active_weight_pct: f64,
}

/// Display headers for the top-positions table, in column order.
pub const POSITION_DISPLAY_COLUMNS: [&str; 3] = [
    "Security/Stock Name",
    "Portfolio Weight (%)",
    "Active Weight (%)",
];
