pub mod scan;
pub mod status;

use actix_web::web;

/// Registers every route of the checkpoint service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(status::configure_routes())
        .service(scan::configure_routes());
}
