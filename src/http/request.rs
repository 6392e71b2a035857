//! Request identification.
//!
//! # Responsibilities
//! - Honor a client-supplied request ID or generate one (UUID v4)
//! - Make the ID available to log events and the response

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The request ID for this request: the client's, if it sent a readable
/// one, otherwise freshly generated.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
