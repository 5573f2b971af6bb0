use axum::extract::State;
use axum::response::Redirect;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::chat_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(send_message))
}

#[derive(Debug, Deserialize)]
struct ChatForm {
    session: String,
    message: String,
}

/// Appends the user's message and the canned reply, then sends the
/// browser back to the dashboard with the same session.
async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Result<Redirect, AppError> {
    info!("POST /chat - Chat submission");
    let session = Uuid::parse_str(&form.session)
        .map_err(|_| AppError::Validation("invalid session id".to_string()))?;

    chat_service::submit(&state.chat, session, &form.message);

    Ok(Redirect::to(&format!("/?session={session}")))
}
