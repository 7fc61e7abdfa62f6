use crate::utils::error::ProxyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Proxy(#[from] ProxyError),

    #[error("record not found")]
    RecordNotFound,

    #[error("no matching activity found within {timeout_ms}ms")]
    NoMatch { timeout_ms: u128 },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Proxy(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RecordNotFound | ApiError::NoMatch { .. } => StatusCode::NOT_FOUND,
        };

        match &self {
            ApiError::Proxy(e) if e.is_upstream() => tracing::warn!("Upstream failure: {}", e),
            ApiError::Proxy(e) => tracing::error!("Request failed: {}", e),
            _ => tracing::debug!("{}", self),
        }

        (status, self.to_string()).into_response()
    }
}
