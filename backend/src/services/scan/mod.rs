//! # Scan Submission Service
//!
//! Phones report a scanned checkpoint by opening the URL encoded in its QR
//! code (`GET /scan?qr_code=...`) or by posting the identifier as a form field
//! or JSON field named `qr_code` (`POST /scan`). Both methods share one
//! contract:
//!
//! - `200 OK` with an HTML confirmation page once the scan is saved.
//! - `400 Bad Request` with `{"error": "QR code data is required"}` when the
//!   identifier is missing or blank. Nothing is written.
//! - `500 Internal Server Error` with `{"error": "Failed to record scan"}`
//!   when the log cannot be saved. The failure is logged and the server keeps
//!   serving.

mod error;
mod get;
mod post;
mod record;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/scan";

/// Configures and returns the Actix `Scope` for the scan endpoint.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("", post().to(post::process))
}
