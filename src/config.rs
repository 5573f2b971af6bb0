use std::path::PathBuf;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", "3000").parse().unwrap_or(3000),
        }
    }
}

/// Google Custom Search parameters for the headlines panel. A missing
/// key produces a non-200 response, which the panel degrades into a
/// single error row rather than failing the page.
#[derive(Debug, Clone)]
pub struct NewsSearchConfig {
    pub endpoint: String,
    pub api_key: String,
    pub engine_id: String,
    pub query: String,
}

impl NewsSearchConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: env_or(
                "GOOGLE_CSE_ENDPOINT",
                "https://www.googleapis.com/customsearch/v1",
            ),
            api_key: std::env::var("GOOGLE_CSE_API_KEY").unwrap_or_default(),
            engine_id: std::env::var("GOOGLE_CSE_ENGINE_ID").unwrap_or_default(),
            query: env_or("NEWS_QUERY", "Nest Pensions"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BiEmbedConfig {
    pub report_id: String,
    pub tenant_id: String,
}

impl BiEmbedConfig {
    pub fn from_env() -> Self {
        Self {
            report_id: std::env::var("POWERBI_REPORT_ID").unwrap_or_default(),
            tenant_id: std::env::var("POWERBI_TENANT_ID").unwrap_or_default(),
        }
    }

    /// Viewers must already be signed in to Power BI in their browser.
    pub fn embed_url(&self) -> String {
        format!(
            "https://app.powerbi.com/reportEmbed?reportId={}&autoAuth=true&ctid={}",
            self.report_id, self.tenant_id
        )
    }
}

/// Paths of the three briefing documents shown in the PDF panels.
#[derive(Debug, Clone)]
pub struct DocumentsConfig {
    pub briefing_pdf: PathBuf,
    pub presentation_pdf: PathBuf,
    pub engagement_pdf: PathBuf,
}

impl DocumentsConfig {
    pub fn from_env() -> Self {
        Self {
            briefing_pdf: PathBuf::from(env_or("BRIEFING_PDF", "documents/briefing.pdf")),
            presentation_pdf: PathBuf::from(env_or(
                "PRESENTATION_PDF",
                "documents/presentation.pdf",
            )),
            engagement_pdf: PathBuf::from(env_or("ENGAGEMENT_PDF", "documents/engagement.pdf")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PositionsConfig {
    pub port_id: String,
    pub label: String,
}

impl PositionsConfig {
    pub fn from_env() -> Self {
        Self {
            port_id: env_or("POSITIONS_PORT_ID", "FOGEMEQU"),
            label: env_or("POSITIONS_LABEL", "4Factor Emerging Markets Equity"),
        }
    }
}

/// Connection details for the Jasmine performance service.
#[derive(Debug, Clone)]
pub struct JasmineConfig {
    pub base_url: String,
    pub api_token: Option<String>,
}

impl JasmineConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("JASMINE_BASE_URL", "http://localhost:8085"),
            api_token: std::env::var("JASMINE_API_TOKEN").ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub server: ServerConfig,
    pub news: NewsSearchConfig,
    pub bi: BiEmbedConfig,
    pub documents: DocumentsConfig,
    pub positions: PositionsConfig,
    pub jasmine: JasmineConfig,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            news: NewsSearchConfig::from_env(),
            bi: BiEmbedConfig::from_env(),
            documents: DocumentsConfig::from_env(),
            positions: PositionsConfig::from_env(),
            jasmine: JasmineConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_carries_report_and_tenant() {
        let config = BiEmbedConfig {
            report_id: "report-1".to_string(),
            tenant_id: "tenant-9".to_string(),
        };
        let url = config.embed_url();
        assert!(url.contains("reportId=report-1"));
        assert!(url.contains("ctid=tenant-9"));
    }
}
