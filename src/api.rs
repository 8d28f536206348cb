// SPDX-License-Identifier: PMPL-1.0-or-later
//! HTTP surface: router, handlers, and request validation.
//!
//! Three routes over JSON: a root banner, a health probe, and the
//! analysis endpoint. Each analysis request runs the pipeline end to end
//! and returns the full report; nothing is shared across requests beyond
//! the fetcher's connection pool.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use url::Url;

use crate::analyze_document;
use crate::error::ApiError;
use crate::fetcher::SafeFetcher;
use crate::report::AnalyzeResponse;

/// Shared application state: the process-wide fetcher.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<SafeFetcher>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Accessibility Analyzer API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let url = normalize_url(&request.url)?;

    info!("Analyzing URL: {}", url);

    let fetch = state.fetcher.fetch(&url).await?;
    let response = analyze_document(&url, &fetch);

    info!("Analysis complete. Score: {}", response.overall_score);

    Ok(Json(response))
}

/// Normalize and validate a user-supplied URL: trim, reject empty,
/// default to https when no scheme prefix is given, and require a host.
pub fn normalize_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ApiError::Validation("URL cannot be empty".to_string()));
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&with_scheme)
        .map_err(|_| ApiError::Validation("Invalid URL format".to_string()))?;

    if parsed.host_str().is_none() {
        return Err(ApiError::Validation("Invalid URL format".to_string()));
    }

    Ok(with_scheme)
}
