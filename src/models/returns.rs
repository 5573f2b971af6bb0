use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default comparator code. The backend resolves it to the official
/// benchmark of each requested portfolio.
pub const DEFAULT_COMPARATOR: &str = "OFFICIAL";

/// Return measure requested from the performance service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnType {
    Absolute,
    Benchmark,
    Relative,
    Mvend,
}

/// Named time window for a periodic return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnPeriod {
    OneDay,
    OneWeek,
    MonthToDate,
    YearToDate,
    ThreeMonthsToDate,
    SixMonthsToDate,
    TwelveMonthsToDate,
    ThirtySixMonthsToDate,
    SixtyMonthsToDate,
    EarliestMonthAlignedLatest,
    Earliest,
}

/// One batched periodic-returns request.
///
/// Empty `types` or `periods` lists mean "all values of that dimension";
/// they are transmitted as-is and interpreted by the backend, never
/// substituted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodicReturnsRequest {
    pub port_ids: Vec<String>,
    pub dates: Vec<NaiveDate>,
    pub types: Vec<ReturnType>,
    pub periods: Vec<ReturnPeriod>,
    pub comparator: String,
}

impl PeriodicReturnsRequest {
    pub fn new(
        port_ids: Vec<String>,
        dates: Vec<NaiveDate>,
        types: Vec<ReturnType>,
        periods: Vec<ReturnPeriod>,
    ) -> Self {
        Self {
            port_ids,
            dates,
            types,
            periods,
            comparator: DEFAULT_COMPARATOR.to_string(),
        }
    }

    pub fn with_comparator(mut self, comparator: impl Into<String>) -> Self {
        self.comparator = comparator.into();
        self
    }
}

/// One result row, keyed by (date, portfolio, type) with one value per
/// requested period. Missing values stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodicReturnRow {
    pub date: NaiveDate,
    pub port_id: String,
    #[serde(rename = "type")]
    pub return_type: ReturnType,
    pub returns: BTreeMap<ReturnPeriod, Option<f64>>,
}

/// Grouped result of one periodic-returns request, returned unmodified
/// to the caller. `errors` carries the backend's per-row complaints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodicReturnsTable {
    pub rows: Vec<PeriodicReturnRow>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl PeriodicReturnsTable {
    /// First `n` rows, for quick inspection.
    pub fn head(&self, n: usize) -> &[PeriodicReturnRow] {
        &self.rows[..self.rows.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_type_wire_codes() {
        assert_eq!(
            serde_json::to_value(ReturnType::Mvend).unwrap(),
            serde_json::json!("MVEND")
        );
        assert_eq!(
            serde_json::to_value(ReturnType::Absolute).unwrap(),
            serde_json::json!("ABSOLUTE")
        );
    }

    #[test]
    fn test_return_period_wire_codes() {
        assert_eq!(
            serde_json::to_value(ReturnPeriod::ThirtySixMonthsToDate).unwrap(),
            serde_json::json!("THIRTY_SIX_MONTHS_TO_DATE")
        );
        assert_eq!(
            serde_json::to_value(ReturnPeriod::EarliestMonthAlignedLatest).unwrap(),
            serde_json::json!("EARLIEST_MONTH_ALIGNED_LATEST")
        );
    }

    #[test]
    fn test_empty_lists_serialize_as_empty_not_missing() {
        let request = PeriodicReturnsRequest::new(
            vec!["OGEMCORD".to_string()],
            vec![NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()],
            Vec::new(),
            Vec::new(),
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["types"], serde_json::json!([]));
        assert_eq!(body["periods"], serde_json::json!([]));
        assert_eq!(body["comparator"], serde_json::json!("OFFICIAL"));
    }

    #[test]
    fn test_head_is_bounded_by_row_count() {
        let table = PeriodicReturnsTable::default();
        assert!(table.head(5).is_empty());
    }
}
