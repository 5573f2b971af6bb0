use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use briefing_backend::app;
use briefing_backend::config::DashboardConfig;
use briefing_backend::external::jasmine::JasmineProvider;
use briefing_backend::logging::{self, LoggingConfig};
use briefing_backend::services::chat_service::ChatStore;
use briefing_backend::services::news_service::GoogleCseProvider;
use briefing_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let config = DashboardConfig::from_env();

    let state = AppState {
        portfolio_data: Arc::new(JasmineProvider::new(config.jasmine.clone())),
        news: Arc::new(GoogleCseProvider::new(config.news.clone())),
        chat: ChatStore::new(),
        config: Arc::new(config),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server.port));
    let app = app::create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Briefing dashboard running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
