use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum VendorError {
    #[error("Vendor not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

pub type VendorResult<T> = Result<T, VendorError>;

/// Convert VendorError to AppError for standardized error responses
impl From<VendorError> for AppError {
    fn from(err: VendorError) -> Self {
        match err {
            VendorError::NotFound(id) => AppError::NotFound(format!("Vendor {} not found", id)),
            VendorError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for VendorError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for VendorError {
    fn from(err: mongodb::error::Error) -> Self {
        VendorError::Database(err.to_string())
    }
}
