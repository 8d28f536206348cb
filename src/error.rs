// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11y-analyzer

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors produced by the hardened fetch layer.
///
/// Every variant maps to a client-visible failure category; raw transport
/// detail is folded into `Network` as a human-readable message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("URL is blocked for security reasons (localhost/private IP)")]
    BlockedTarget,

    #[error("Request timed out. The website may be slow or unreachable.")]
    Timeout,

    #[error("Content exceeds the maximum size of 10 MB")]
    TooLarge,

    #[error("Failed to fetch website: {0}")]
    Network(String),
}

/// API-level error taxonomy.
///
/// Validation, security, and fetch failures are client errors (400) with a
/// readable `detail`; anything else is an internal error (500) with a
/// generic message, full detail logged server-side only.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Internal server error during accessibility analysis")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Fetch(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(err) => {
                error!("Unexpected error during analysis: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error during accessibility analysis".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
