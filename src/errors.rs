use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use crate::external::portfolio_data::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found")]
    NotFound,
    #[error("External error: {0}")]
    External(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::External(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
        }
    }
}

/// Failure of a single dashboard panel. Rendered as an inline message
/// in the panel's slot; never fails the page or its siblings.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Could not render PDF: {0}")]
    Pdf(String),
    #[error("Could not load position data: {0}")]
    Positions(String),
}

impl From<ProviderError> for PanelError {
    fn from(value: ProviderError) -> Self {
        PanelError::Positions(value.to_string())
    }
}
