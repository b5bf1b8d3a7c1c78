//! JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validation::ValidationError;
use crate::Error;

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M:%S";

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Reason phrase in upper snake case, e.g. `NOT_FOUND`
    pub status: String,
    /// Time of the failure, `dd-MM-yyyy hh:mm:ss`
    pub timestamp: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// An HTTP status paired with its [`ApiErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                status: status_name(status),
                timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
                message: message.into(),
                debug_message: None,
                errors: Vec::new(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn with_debug_message(mut self, debug_message: impl Into<String>) -> Self {
        self.body.debug_message = Some(debug_message.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.body.errors = errors;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ApiErrorBody {
        &self.body
    }
}

fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace([' ', '-'], "_")
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else if err.is_z_index_exhausted() {
            StatusCode::CONFLICT
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let debug_message = match &err {
            Error::Widget(widget_err) => widget_err
                .widget_id()
                .map(|id| format!("widget {id} ({} error)", err.module())),
        };

        let api_err = Self::new(status, err.to_string());
        match debug_message {
            Some(debug_message) => api_err.with_debug_message(debug_message),
            None => api_err,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let message = err.to_string();
        Self::bad_request(message).with_errors(err.errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("Malformed JSON request").with_debug_message(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request("Request contains invalid parameters or body")
            .with_debug_message(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, message = %self.body.message, "request failed");
        (self.status, Json(self.body)).into_response()
    }
}
