use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::config::NewsSearchConfig;
use crate::models::{NewsCandidate, NewsRow};
use crate::render::html::anchor;

/// Result cap requested from the search engine.
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Error)]
pub enum NewsFetchError {
    #[error("Status code: {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Most recent articles matching the configured query.
    async fn latest(&self) -> Result<Vec<NewsCandidate>, NewsFetchError>;
}

/// Google Custom Search client for the headlines panel.
pub struct GoogleCseProvider {
    client: Client,
    config: NewsSearchConfig,
}

impl GoogleCseProvider {
    pub fn new(config: NewsSearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
    pagemap: Option<PageMap>,
}

#[derive(Debug, Deserialize)]
struct PageMap {
    #[serde(default)]
    metatags: Vec<serde_json::Value>,
}

impl SearchItem {
    /// First ten characters of the article's published-time metatag,
    /// when the search engine surfaced one.
    fn published(&self) -> Option<String> {
        let raw = self
            .pagemap
            .as_ref()?
            .metatags
            .first()?
            .get("article:published_time")?
            .as_str()?;
        let prefix = raw.get(..10).unwrap_or(raw);
        if prefix.is_empty() {
            None
        } else {
            Some(prefix.to_string())
        }
    }
}

#[async_trait]
impl NewsProvider for GoogleCseProvider {
    async fn latest(&self) -> Result<Vec<NewsCandidate>, NewsFetchError> {
        info!("Searching news for '{}'", self.config.query);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
                ("q", self.config.query.as_str()),
                ("sort", "date"),
                ("num", "5"),
                ("dateRestrict", "m1"),
            ])
            .send()
            .await
            .map_err(|e| NewsFetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NewsFetchError::Status(response.status().as_u16()));
        }

        let data = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| NewsFetchError::Transport(e.to_string()))?;

        Ok(data
            .items
            .into_iter()
            .take(MAX_RESULTS)
            .map(|item| NewsCandidate {
                published: item.published(),
                title: item.title,
                link: item.link,
                snippet: item.snippet,
            })
            .collect())
    }
}

/// `"2024-03-07..."` → `07 Mar 2024`. Anything that does not start
/// with an ISO date passes through unchanged.
pub fn format_date(raw: &str) -> String {
    let prefix = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Shapes one search hit for display. Articles without a published
/// date are dated today.
pub fn candidate_row(candidate: &NewsCandidate, today: NaiveDate) -> NewsRow {
    let date = candidate
        .published
        .clone()
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());
    NewsRow {
        date: format_date(&date),
        title_source: anchor(&candidate.link, &candidate.title),
        summary: candidate.snippet.clone(),
    }
}

/// The single synthetic row a failed search degrades into.
pub fn fetch_error_row(error: &NewsFetchError) -> NewsRow {
    let title = match error {
        NewsFetchError::Status(_) => "Error fetching news",
        NewsFetchError::Transport(_) => "Exception fetching news",
    };
    NewsRow {
        date: String::new(),
        title_source: title.to_string(),
        summary: error.to_string(),
    }
}

/// Static LinkedIn entries from the last 30 days, shown after the
/// live results.
pub fn placeholder_rows(today: NaiveDate) -> Vec<NewsRow> {
    let dated = |days: i64| (today - Duration::days(days)).format("%d %b %Y").to_string();
    vec![
        NewsRow {
            date: dated(7),
            title_source: anchor("https://www.linkedin.com/", "LinkedIn Post: Nest appoints new CIO"),
            summary: "Nest announced the appointment of a new Chief Investment Officer last week."
                .to_string(),
        },
        NewsRow {
            date: dated(14),
            title_source: anchor("https://www.linkedin.com/", "LinkedIn Post: Nest ESG update"),
            summary: "Nest shared an update on their ESG investment strategy.".to_string(),
        },
        NewsRow {
            date: dated(28),
            title_source: anchor(
                "https://www.linkedin.com/",
                "LinkedIn Post: Nest Pensions annual report highlights",
            ),
            summary: "Nest Pensions published their annual report with key highlights for members."
                .to_string(),
        },
    ]
}

/// One ordered table: live results (or the single error row) first,
/// placeholders last. No deduplication across the two sources.
pub fn news_rows(
    outcome: Result<Vec<NewsCandidate>, NewsFetchError>,
    today: NaiveDate,
) -> Vec<NewsRow> {
    let mut rows: Vec<NewsRow> = match outcome {
        Ok(candidates) => candidates
            .iter()
            .map(|candidate| candidate_row(candidate, today))
            .collect(),
        Err(error) => vec![fetch_error_row(&error)],
    };
    rows.extend(placeholder_rows(today));
    rows
}

/// Cells for the headlines table, in display-column order.
pub fn display_cells(rows: &[NewsRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.date.clone(),
                row.title_source.clone(),
                row.summary.clone(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_format_date_parses_iso_prefix() {
        assert_eq!(format_date("2024-03-07T12:00:00Z"), "07 Mar 2024");
        assert_eq!(format_date("2024-03-07"), "07 Mar 2024");
    }

    #[test]
    fn test_format_date_passes_garbage_through() {
        assert_eq!(format_date("last Tuesday"), "last Tuesday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_candidate_without_date_falls_back_to_today() {
        let candidate = NewsCandidate {
            title: "Nest in the news".to_string(),
            link: "https://example.com/a".to_string(),
            snippet: "snippet".to_string(),
            published: None,
        };
        let row = candidate_row(&candidate, today());
        assert_eq!(row.date, "15 Jun 2025");
    }

    #[test]
    fn test_live_rows_precede_placeholders() {
        let candidate = NewsCandidate {
            title: "Nest in the news".to_string(),
            link: "https://example.com/a".to_string(),
            snippet: "snippet".to_string(),
            published: Some("2025-06-01".to_string()),
        };
        let rows = news_rows(Ok(vec![candidate]), today());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].date, "01 Jun 2025");
        assert!(rows[1].title_source.contains("LinkedIn"));
    }

    #[test]
    fn test_published_time_extracted_from_metatags() {
        let item: SearchItem = serde_json::from_value(serde_json::json!({
            "title": "t",
            "link": "l",
            "snippet": "s",
            "pagemap": {
                "metatags": [{"article:published_time": "2025-05-30T08:00:00+00:00"}]
            }
        }))
        .unwrap();
        assert_eq!(item.published().as_deref(), Some("2025-05-30"));
    }

    #[test]
    fn test_missing_metatags_yield_no_date() {
        let item: SearchItem = serde_json::from_value(serde_json::json!({
            "title": "t",
            "link": "l",
            "snippet": "s"
        }))
        .unwrap();
        assert_eq!(item.published(), None);
    }
}
