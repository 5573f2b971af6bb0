use std::path::Path;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::errors::PanelError;
use crate::models::{NEWS_DISPLAY_COLUMNS, POSITION_DISPLAY_COLUMNS};
use crate::render::html::{table_panel, warning_block};
use crate::render::page::{dashboard_page, DashboardView, PANEL_MAX_HEIGHT};
use crate::services::{chat_service, news_service, pdf_service, position_service};
use crate::state::AppState;

/// Page images take 70% of the panel width, as in the source decks.
const PDF_IMG_WIDTH: &str = "70%";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

#[derive(Debug, Deserialize)]
struct DashboardParams {
    session: Option<Uuid>,
}

/// Renders the whole briefing page. Panels are computed sequentially
/// and each carries its own failure boundary; one broken data source
/// never prevents the others from rendering.
async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Html<String> {
    info!("GET / - Rendering briefing dashboard");
    let session = params.session.unwrap_or_else(Uuid::new_v4);
    let config = &state.config;

    let briefing_pdf = pdf_panel(&config.documents.briefing_pdf);
    let presentation_pdf = pdf_panel(&config.documents.presentation_pdf);
    let engagement_pdf = pdf_panel(&config.documents.engagement_pdf);

    let today = Utc::now().date_naive();
    let outcome = state.news.latest().await;
    if let Err(e) = &outcome {
        warn!("News search degraded to an error row: {}", e);
    }
    let news_table = table_panel(
        &NEWS_DISPLAY_COLUMNS,
        &news_service::display_cells(&news_service::news_rows(outcome, today)),
        PANEL_MAX_HEIGHT,
    );

    let positions_panel = positions_panel(&state).await;

    let view = DashboardView {
        briefing_pdf,
        presentation_pdf,
        engagement_pdf,
        news_table,
        bi_embed_url: config.bi.embed_url(),
        positions_title: format!(
            "Jasmine Data: Top 10 Positions for {} ({})",
            config.positions.label, config.positions.port_id
        ),
        positions_panel,
        session,
        transcript_tail: state.chat.tail(session, chat_service::DISPLAY_TAIL),
    };

    Html(dashboard_page(view))
}

fn pdf_panel(path: &Path) -> Result<String, PanelError> {
    pdf_service::render_pdf_panel(path, PANEL_MAX_HEIGHT, PDF_IMG_WIDTH).map_err(|e| {
        error!("PDF panel failed for {}: {}", path.display(), e);
        e
    })
}

async fn positions_panel(state: &AppState) -> Result<String, PanelError> {
    let port_id = &state.config.positions.port_id;
    let rows = state
        .portfolio_data
        .load_positions(std::slice::from_ref(port_id))
        .await
        .map_err(|e| {
            error!("Positions panel failed for {}: {}", port_id, e);
            PanelError::from(e)
        })?;

    if rows.is_empty() {
        return Ok(warning_block(&format!(
            "No position data returned for {port_id}."
        )));
    }

    let top = position_service::top_positions(rows, position_service::TOP_N);
    Ok(table_panel(
        &POSITION_DISPLAY_COLUMNS,
        &position_service::display_rows(&top),
        PANEL_MAX_HEIGHT,
    ))
}
