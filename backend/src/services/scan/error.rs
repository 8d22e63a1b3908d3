use crate::scan_log::LogError;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use checkpoint_common::requests::ErrorResponse;
use thiserror::Error;

/// Everything that can go wrong while handling a scan submission.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("QR code data is required")]
    MissingIdentifier,

    #[error(transparent)]
    Persistence(#[from] LogError),

    #[error("scan log worker unavailable: {0}")]
    Worker(#[from] BlockingError),
}

impl ResponseError for ScanError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScanError::MissingIdentifier => StatusCode::BAD_REQUEST,
            ScanError::Persistence(_) | ScanError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ScanError::MissingIdentifier => "QR code data is required",
            ScanError::Persistence(_) | ScanError::Worker(_) => "Failed to record scan",
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(message))
    }
}
