//! Mapping of fetch outcomes onto HTTP responses.
//!
//! Success is `200` with `Content-Type: text/plain` and the script verbatim.
//! Every failure collapses to `500` with a fixed body; error details never
//! reach the caller.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::upstream::{FetchError, ScriptText};

/// Body returned for any fetch failure.
pub const FETCH_ERROR_BODY: &str = "Error fetching script";

/// Content type of a relayed script.
pub const SCRIPT_CONTENT_TYPE: &str = "text/plain";

/// Build the client response for one fetch result.
pub fn script_response(result: Result<ScriptText, FetchError>) -> Response {
    match result {
        Ok(script) => (
            [(header::CONTENT_TYPE, SCRIPT_CONTENT_TYPE)],
            script.into_string(),
        )
            .into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_BODY).into_response(),
    }
}
