use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::config::JasmineConfig;
use crate::external::portfolio_data::{PortfolioDataProvider, ProviderError};
use crate::models::{PeriodicReturnsRequest, PeriodicReturnsTable, PositionRow};

/// HTTP client for the Jasmine performance service.
///
/// Keep request lists small; the service is latency-sensitive and one
/// batched call is always cheaper than a loop of narrow ones.
pub struct JasmineProvider {
    client: Client,
    config: JasmineConfig,
}

impl JasmineProvider {
    pub fn new(config: JasmineConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JasmineConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.post(self.endpoint(path));
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }
        request
    }
}

#[derive(Debug, Deserialize)]
struct PositionsResponse {
    rows: Vec<PositionRow>,
}

#[async_trait]
impl PortfolioDataProvider for JasmineProvider {
    async fn load_periodic_returns(
        &self,
        request: &PeriodicReturnsRequest,
    ) -> Result<PeriodicReturnsTable, ProviderError> {
        info!(
            "Loading periodic returns for {} portfolio(s), {} date(s)",
            request.port_ids.len(),
            request.dates.len()
        );

        let response = self
            .post("performance/periodic-returns")
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Periodic returns request failed with {}: {}", status, body);
            return Err(ProviderError::BadResponse(format!("{status}: {body}")));
        }

        let table = response
            .json::<PeriodicReturnsTable>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        if !table.errors.is_empty() {
            // The service reports per-row problems without failing the call.
            error!("Periodic returns came back with {} error(s)", table.errors.len());
        }

        Ok(table)
    }

    async fn load_positions(&self, port_ids: &[String]) -> Result<Vec<PositionRow>, ProviderError> {
        info!("Loading positions for {:?}", port_ids);

        let response = self
            .post("positions")
            .json(&serde_json::json!({ "port_ids": port_ids }))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Positions request failed with {}: {}", status, body);
            return Err(ProviderError::BadResponse(format!("{status}: {body}")));
        }

        let body = response
            .json::<PositionsResponse>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(body.rows)
    }
}
