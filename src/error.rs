use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::Stock;

/// Failures of the data-access layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row failed to decode partway through a full scan.
    #[error("Scan stopped after {} rows: {source}", .rows.len())]
    PartialScan {
        rows: Vec<Stock>,
        source: sqlx::Error,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid stock id: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        // Storage failures are reported the same way as bad input.
        match self {
            AppError::InvalidId(_) | AppError::InvalidBody(_) | AppError::Store(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        self.status().into_response()
    }
}
