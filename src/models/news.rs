use serde::{Deserialize, Serialize};

/// Display headers for the headlines table, in column order.
pub const NEWS_DISPLAY_COLUMNS: [&str; 3] = ["Date", "Title/Source", "One-line Summary"];

/// One row of the headlines table, already shaped for display.
/// `title_source` carries pre-built anchor markup and is rendered
/// without escaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRow {
    pub date: String,
    pub title_source: String,
    pub summary: String,
}

/// A raw search hit before display shaping. `published` is the
/// first ten characters of the article's published-time metatag,
/// when the search engine surfaced one.
#[derive(Debug, Clone)]
pub struct NewsCandidate {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub published: Option<String>,
}
