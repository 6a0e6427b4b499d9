use axum::http::HeaderValue;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use roster_core::AppError;

use crate::error::ApiError;

/// Payload that writes itself as JSON without recursing per nesting level.
pub trait JsonTree {
    /// Appends the JSON encoding of `self` to `out`.
    fn write_json(&self, out: &mut Vec<u8>) -> serde_json::Result<()>;
}

/// JSON response for [`JsonTree`] payloads, used in place of `axum::Json`
/// for hierarchies of unbounded depth.
#[derive(Debug)]
pub struct TreeJson<T>(pub T);

impl<T: JsonTree> IntoResponse for TreeJson<T> {
    fn into_response(self) -> Response {
        let mut body = Vec::new();
        if let Err(error) = self.0.write_json(&mut body) {
            return ApiError(AppError::Internal(format!(
                "failed to render response: {error}"
            )))
            .into_response();
        }

        (
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response()
    }
}
