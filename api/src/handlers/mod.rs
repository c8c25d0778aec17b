pub mod error;

use actix_web::HttpRequest;
use uuid::Uuid;

pub use error::{error_envelope, handle_domain_error};

/// Request id from the `X-Request-Id` header, or a fresh one
pub fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && value.len() <= 64)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_request_id_from_header() {
        let req = TestRequest::default()
            .insert_header(("x-request-id", "req-42"))
            .to_http_request();
        assert_eq!(request_id(&req), "req-42");
    }

    #[test]
    fn test_request_id_generated() {
        let req = TestRequest::default().to_http_request();
        assert!(Uuid::parse_str(&request_id(&req)).is_ok());
    }
}
