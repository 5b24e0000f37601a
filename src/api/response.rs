//! JSON response envelope.
//!
//! Successful calls return the raw entity or list; failures return
//! `{"Error": "<message>"}`. If a body cannot be serialized the client gets a bare
//! 500 with no body instead of a second error.

use crate::errors::Error;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

/// Error body: `{"Error": "<message>"}`
#[derive(Debug, Serialize)]
struct HttpError<'a> {
    #[serde(rename = "Error")]
    error: &'a str,
}

/// Serializes `body` as JSON with the given status.
pub fn send<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(json) => (status, [(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            error!("Failed to encode response body: {e}");
            internal_error()
        }
    }
}

/// Sends the error envelope with the given status.
pub fn send_error(status: StatusCode, message: &str) -> Response {
    send(status, &HttpError { error: message })
}

/// 204 with an empty body.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

fn internal_error() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

impl Error {
    /// HTTP status for this error kind.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        if self.is_not_found() {
            return StatusCode::NOT_FOUND;
        }
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            debug!(%status, "Request rejected: {self}");
        }
        send_error(status, &self.to_string())
    }
}
