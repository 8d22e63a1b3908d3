use super::error::ScanError;
use super::record::record_scan;
use crate::context::ServiceContext;
use actix_web::{web, HttpRequest, HttpResponse};
use checkpoint_common::requests::ScanRequest;

/// `GET /scan?qr_code=...`, the URL encoded in every generated QR image.
///
/// Only the first `qr_code` in the query string is used.
pub(crate) async fn process(
    req: HttpRequest,
    ctx: web::Data<ServiceContext>,
) -> Result<HttpResponse, ScanError> {
    let request = ScanRequest::from_urlencoded(req.query_string().as_bytes());
    record_scan(ctx, request).await
}
