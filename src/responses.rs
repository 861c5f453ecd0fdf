//! JSON request/response helpers shared by the serverless handlers.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::error::InsightError;

/// Build a JSON response with the given status.
pub fn json_response(status: StatusCode, payload: &Value) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

/// Build an `{"error", "message"}` response.
pub fn error_response(status: StatusCode, error: &str, message: &str) -> Result<Response<Body>, Error> {
    json_response(status, &json!({ "error": error, "message": message }))
}

/// 405 for anything but POST on a POST-only endpoint.
pub fn method_not_allowed(usage: &str) -> Result<Response<Body>, Error> {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", usage)
}

/// 422 for a computation that rejected its input.
pub fn unprocessable(err: &InsightError) -> Result<Response<Body>, Error> {
    tracing::warn!(error = %err, "rejected request input");
    error_response(StatusCode::UNPROCESSABLE_ENTITY, "Invalid input", &err.to_string())
}

/// Decode a JSON request body.
///
/// An empty body is decoded as `{}`, so request types whose fields all
/// have defaults still accept it.
pub fn parse_json_body<T: DeserializeOwned>(body: &Body) -> Result<T, serde_json::Error> {
    let bytes: &[u8] = match body {
        Body::Empty => b"{}",
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes,
    };
    serde_json::from_slice(bytes)
}
