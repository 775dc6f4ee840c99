//! Error types for number classification.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Reasons a `number` query parameter is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    /// The text does not parse as a decimal number at all.
    NonNumeric,
    /// The text is numeric but not integer-valued.
    NonInteger,
}

impl ClassifyError {
    /// The value reported in the `number` field of the rejection body.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NonNumeric => "alphabet",
            Self::NonInteger => "invalid",
        }
    }
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNumeric => write!(f, "Input is not a number"),
            Self::NonInteger => write!(f, "Input is not an integer"),
        }
    }
}

impl std::error::Error for ClassifyError {}

impl IntoResponse for ClassifyError {
    fn into_response(self) -> Response {
        let body = json!({
            "number": self.label(),
            "error": true,
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Errors that can occur while fetching a fact from the external service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactError {
    /// The request never produced a response (connect failure, timeout, body read).
    Transport(String),
    /// The service answered with a status other than 200.
    Status(u16),
}

impl std::fmt::Display for FactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Fact service transport error: {}", msg),
            Self::Status(code) => write!(f, "Fact service returned status {}", code),
        }
    }
}

impl From<reqwest::Error> for FactError {
    fn from(e: reqwest::Error) -> Self {
        FactError::Transport(e.to_string())
    }
}

impl std::error::Error for FactError {}
