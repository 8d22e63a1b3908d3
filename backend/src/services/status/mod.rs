//! `GET /`: usage instructions and the network address phones should use.
//!
//! The address is resolved on every request so the page stays correct when
//! the host moves between networks. Nothing is read from the scan log here.

use crate::context::ServiceContext;
use crate::pages;
use actix_web::http::header::ContentType;
use actix_web::web::{get, resource};
use actix_web::{web, HttpResponse, Resource, Responder};
use checkpoint_common::network::{local_ipv4, service_url};

pub fn configure_routes() -> Resource {
    resource("/").route(get().to(process))
}

pub(crate) async fn process(ctx: web::Data<ServiceContext>) -> impl Responder {
    let network_url = service_url(local_ipv4(), ctx.port);
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::status_page(&network_url))
}

#[cfg(test)]
mod tests {
    use crate::context::ServiceContext;
    use crate::scan_log::ScanLog;
    use crate::services;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn index_shows_instructions_without_touching_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never_created.csv");
        let ctx = web::Data::new(ServiceContext::new(ScanLog::new(&path), 9500));
        let app = test::init_service(App::new().app_data(ctx).configure(services::configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(":9500/scan?qr_code=YOUR_DATA"));
        assert!(!path.exists());
    }
}
