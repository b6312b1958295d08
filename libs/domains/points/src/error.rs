use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointError {
    #[error("Point not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("One or more item ids do not exist")]
    UnknownItem,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PointResult<T> = Result<T, PointError>;

/// Convert PointError to AppError for standardized error responses
impl From<PointError> for AppError {
    fn from(err: PointError) -> Self {
        match err {
            PointError::NotFound(id) => AppError::NotFound(format!("Point {} not found", id)),
            PointError::Validation(msg) => AppError::BadRequest(msg),
            PointError::UnknownItem => {
                AppError::UnknownReference("One or more item ids do not exist".to_string())
            }
            PointError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PointError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
