//! HTTP response helpers for the webhook.

use lambda_http::{Body, Response};
use serde::Serialize;

use crate::models::ErrorResponse;

/// CORS headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Create a JSON response with the given status code and body.
pub fn json_response<T: Serialize>(
    status: u16,
    body: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    let json = serde_json::to_string(body)?;
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json");
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    Ok(builder.body(Body::from(json))?)
}

/// Create an error response with the given status code and message.
pub fn error_response(
    status: u16,
    message: impl Into<String>,
) -> Result<Response<Body>, lambda_http::Error> {
    json_response(status, &ErrorResponse::new(message))
}

/// Empty 204 response for CORS preflight requests.
pub fn preflight_response() -> Result<Response<Body>, lambda_http::Error> {
    let mut builder = Response::builder().status(204);
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    Ok(builder
        .header("Access-Control-Max-Age", "86400")
        .body(Body::Empty)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusResponse;

    #[test]
    fn test_json_response_carries_cors_headers() {
        let response = json_response(200, &StatusResponse::ok()).unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        assert_eq!(
            response.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get("Access-Control-Allow-Methods").unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(response.body().as_ref(), br#"{"status":"ok"}"#);
    }

    #[test]
    fn test_error_response_body() {
        let response = error_response(404, "Not found").unwrap();

        assert_eq!(response.status(), 404);
        assert_eq!(response.body().as_ref(), br#"{"error":"Not found"}"#);
    }

    #[test]
    fn test_preflight_has_no_body() {
        let response = preflight_response().unwrap();

        assert_eq!(response.status(), 204);
        assert_eq!(
            response.headers().get("Access-Control-Max-Age").unwrap(),
            "86400"
        );
        assert!(response.body().as_ref().is_empty());
        assert!(response.headers().get("Content-Type").is_none());
    }
}
