use super::error::ScanError;
use crate::context::ServiceContext;
use crate::pages;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use checkpoint_common::model::scan::ScanRecord;
use checkpoint_common::network::{local_ipv4, service_url};
use checkpoint_common::requests::ScanRequest;
use log::{debug, error, info};

/// Validates `request`, appends it to the log and renders the confirmation page.
///
/// The append blocks on the log mutex and on disk I/O, so it runs on actix's
/// blocking pool rather than on the request worker.
pub(crate) async fn record_scan(
    ctx: web::Data<ServiceContext>,
    request: ScanRequest,
) -> Result<HttpResponse, ScanError> {
    let Some(identifier) = request.identifier() else {
        debug!("Rejected scan without QR code data");
        return Err(ScanError::MissingIdentifier);
    };

    let record = ScanRecord::now(identifier);
    let stored = record.clone();
    let worker_ctx = ctx.clone();

    let appended = web::block(move || worker_ctx.log.append(stored))
        .await
        .map_err(ScanError::from)
        .and_then(|result| result.map_err(ScanError::from));

    match appended {
        Ok(total) => info!("Recorded scan '{}' ({} today)", record.identifier, total),
        Err(err) => {
            error!("Error saving scan '{}': {}", record.identifier, err);
            return Err(err);
        }
    }

    let page = pages::confirmation_page(&record, &service_url(local_ipv4(), ctx.port));
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(page))
}
