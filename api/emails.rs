use record_insights::config::init_tracing;
use record_insights::models::report::EmailsRequest;
use record_insights::responses::{error_response, json_response, method_not_allowed, parse_json_body};
use record_insights::validation::count_valid_emails;
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    run(handler).await
}

/// POST /api/emails — Count structurally valid email entries.
///
/// A null or missing `emails` field counts as zero.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return method_not_allowed("Use POST with a JSON body {\"emails\": [...]}");
    }

    let request: EmailsRequest = match parse_json_body(req.body()) {
        Ok(request) => request,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, "Bad request", &err.to_string()),
    };

    let valid = count_valid_emails(request.emails.as_deref());
    tracing::info!(valid, "counted emails");

    json_response(StatusCode::OK, &json!({ "valid": valid }))
}
