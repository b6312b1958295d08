//! Integer id path parameter extractor with automatic validation.

use crate::errors::{ErrorCode, error_response};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

/// Extractor for integer id path parameters.
///
/// Automatically parses and validates an `i32` id from path parameters,
/// rejecting with an `INVALID_ID` error response if the segment is not
/// a valid integer (e.g. `/points/abc`).
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_point(IdPath(id): IdPath) -> String {
///     format!("Point ID: {}", id)
/// }
///
/// let app = Router::new().route("/points/{id}", get(get_point));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i32>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid id: {}", raw),
                ErrorCode::InvalidId,
            )),
        }
    }
}
