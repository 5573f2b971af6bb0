use async_trait::async_trait;
use thiserror::Error;

use crate::models::{PeriodicReturnsRequest, PeriodicReturnsTable, PositionRow};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Access to the performance and positions endpoints of the
/// financial-data service. Requests are passed through as built by the
/// caller; list parameters batch several portfolios, dates, types and
/// periods into one call because the backing service is slow.
#[async_trait]
pub trait PortfolioDataProvider: Send + Sync {
    /// One batched periodic-returns request. The grouped result is
    /// returned unmodified, including the backend's error list.
    async fn load_periodic_returns(
        &self,
        request: &PeriodicReturnsRequest,
    ) -> Result<PeriodicReturnsTable, ProviderError>;

    /// Current holdings for the given portfolios.
    async fn load_positions(&self, port_ids: &[String]) -> Result<Vec<PositionRow>, ProviderError>;
}
