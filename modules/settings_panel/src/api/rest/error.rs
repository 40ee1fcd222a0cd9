//! HTTP error mapping to RFC-9457 Problem Details
//!
//! Every failure reaches the panel as a single human-readable detail
//! string; there is no retry taxonomy.

use crate::contract::PanelError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: PanelError) -> Problem {
    let detail = error.to_string();
    match error {
        PanelError::UnknownSetting { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Setting Not Found").with_detail(detail)
        }

        PanelError::UnknownDataCenter { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Unknown Data Center").with_detail(detail)
        }

        PanelError::OverridesNotAllowed { .. } => {
            Problem::new(StatusCode::CONFLICT, "Overrides Not Allowed").with_detail(detail)
        }

        PanelError::InvalidValue { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Value").with_detail(detail)
        }

        PanelError::InvalidCopyTarget { .. } => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Copy Target").with_detail(detail)
        }

        PanelError::StoreUnavailable { .. } => {
            Problem::new(StatusCode::BAD_GATEWAY, "Settings Store Unavailable").with_detail(detail)
        }

        PanelError::Internal => {
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}
