use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::external::portfolio_data::PortfolioDataProvider;
use crate::services::chat_service::ChatStore;
use crate::services::news_service::NewsProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub portfolio_data: Arc<dyn PortfolioDataProvider>,
    pub news: Arc<dyn NewsProvider>,
    pub chat: ChatStore,
}
