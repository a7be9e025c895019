//! Error handling for the BFF.
//!
//! Upstream failures carry whatever status and body the backend service
//! answered with, so handlers can relay them to the caller verbatim.
//! Every other failure collapses to a fixed-message response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    PayloadTooLarge { message: String },

    /// The upstream service answered with a non-success status. The
    /// status is relayed as-is; the body too, when there is one, else
    /// the caller gets the per-operation fallback message.
    #[error("{service} returned HTTP {status}")]
    Upstream {
        service: &'static str,
        status: u16,
        body: Option<Value>,
        fallback: &'static str,
    },

    /// The upstream service could not be reached at all.
    #[error("failed to reach {service}: {message}")]
    Transport {
        service: &'static str,
        message: String,
        fallback: &'static str,
    },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::Upstream {
                body: Some(body), ..
            } => body.clone(),
            AppError::Upstream { fallback, .. } | AppError::Transport { fallback, .. } => {
                json!({ "error": fallback })
            }
            AppError::Validation { message }
            | AppError::PayloadTooLarge { message }
            | AppError::Configuration { message } => json!({ "error": message }),
        };

        tracing::error!("request failed: {}", self);

        (status, Json(body)).into_response()
    }
}
