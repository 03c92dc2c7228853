// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::menu::StoreError;

/// Top-level handler error. Validation failures never reach this type;
/// they degrade to redirects. What remains is genuine server trouble,
/// which is to say trouble with the menu file.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Store(e) => {
                tracing::error!("menu store failure: {}", e);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
