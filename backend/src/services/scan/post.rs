use super::error::ScanError;
use super::record::record_scan;
use crate::context::ServiceContext;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use checkpoint_common::requests::ScanRequest;

/// `POST /scan` with `qr_code` in a form body or a JSON body.
pub(crate) async fn process(
    req: HttpRequest,
    body: web::Bytes,
    ctx: web::Data<ServiceContext>,
) -> Result<HttpResponse, ScanError> {
    let request = parse_body(req.content_type(), &body);
    record_scan(ctx, request).await
}

/// Picks the decoder from the content type. Without a usable content type the
/// body is tried as a form first, then as JSON when the form has no non-empty
/// `qr_code`.
fn parse_body(content_type: &str, body: &[u8]) -> ScanRequest {
    match content_type {
        "application/x-www-form-urlencoded" => ScanRequest::from_urlencoded(body),
        "application/json" => from_json(body),
        _ => {
            let form = ScanRequest::from_urlencoded(body);
            if form.qr_code.as_deref().is_some_and(|code| !code.is_empty()) {
                form
            } else {
                from_json(body)
            }
        }
    }
}

fn from_json(body: &[u8]) -> ScanRequest {
    serde_json::from_slice(body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_by_content_type() {
        let form = parse_body("application/x-www-form-urlencoded", b"qr_code=Checkpoint_2");
        assert_eq!(form.qr_code.as_deref(), Some("Checkpoint_2"));

        let json = parse_body("application/json", br#"{"qr_code":"VISITOR_123"}"#);
        assert_eq!(json.qr_code.as_deref(), Some("VISITOR_123"));
    }

    #[test]
    fn untyped_body_tries_form_then_json() {
        let form = parse_body("", b"qr_code=Checkpoint_9");
        assert_eq!(form.qr_code.as_deref(), Some("Checkpoint_9"));

        let json = parse_body("text/plain", br#"{"qr_code":"Checkpoint_4"}"#);
        assert_eq!(json.qr_code.as_deref(), Some("Checkpoint_4"));
    }

    #[test]
    fn untyped_empty_form_value_falls_through_to_json() {
        let request = parse_body("", b"qr_code=");
        assert_eq!(request.qr_code, None);

        let repeated = parse_body("application/x-www-form-urlencoded", b"qr_code=A&qr_code=B");
        assert_eq!(repeated.qr_code.as_deref(), Some("A"));
    }

    #[test]
    fn malformed_bodies_have_no_identifier() {
        assert!(parse_body("application/json", b"{not json").qr_code.is_none());
        assert!(parse_body("application/json", br#"{"qr_code": 7}"#).qr_code.is_none());
        assert!(parse_body("application/x-www-form-urlencoded", b"other=1").qr_code.is_none());
    }
}
