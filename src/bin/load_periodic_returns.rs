//! Demonstrates loading performance periodic returns from the Jasmine
//! service.
//!
//! Use the list parameters instead of calling in a loop: the service
//! is slow, so one batched request is always cheaper than many narrow
//! ones. Avoid long date lists.

use anyhow::Result;
use chrono::NaiveDate;

use briefing_backend::external::jasmine::JasmineProvider;
use briefing_backend::external::portfolio_data::PortfolioDataProvider;
use briefing_backend::models::{PeriodicReturnsRequest, ReturnPeriod, ReturnType};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = JasmineProvider::from_env();

    // Month-end dates are the most likely to have data.
    let request = PeriodicReturnsRequest::new(
        vec!["OGEMCORD".to_string(), "FOGEMBLCR".to_string()],
        vec![
            NaiveDate::from_ymd_opt(2023, 12, 31).expect("valid date"),
            NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
        ],
        // An empty list would mean "all types".
        vec![
            ReturnType::Absolute,
            ReturnType::Benchmark,
            ReturnType::Relative,
            ReturnType::Mvend,
        ],
        // An empty list would mean "all periods".
        vec![
            ReturnPeriod::OneDay,
            ReturnPeriod::OneWeek,
            ReturnPeriod::MonthToDate,
            ReturnPeriod::YearToDate,
            ReturnPeriod::ThreeMonthsToDate,
            ReturnPeriod::SixMonthsToDate,
            ReturnPeriod::TwelveMonthsToDate,
            ReturnPeriod::ThirtySixMonthsToDate,
            ReturnPeriod::SixtyMonthsToDate,
            ReturnPeriod::EarliestMonthAlignedLatest,
            ReturnPeriod::Earliest,
        ],
    )
    // Defaults to "OFFICIAL"; a specific portfolio code works too.
    .with_comparator("OFFICIAL");

    let table = client.load_periodic_returns(&request).await?;

    // Rows are grouped by (date, portfolio, type) with one value per
    // requested period.
    for row in table.head(5) {
        println!(
            "{} {} {:?}: {:?}",
            row.date, row.port_id, row.return_type, row.returns
        );
    }

    if !table.errors.is_empty() {
        // The client already logs these; surface the count for scripts.
        eprintln!("{} row error(s) reported by the service", table.errors.len());
    }

    Ok(())
}
