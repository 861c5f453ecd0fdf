use record_insights::config::init_tracing;
use record_insights::metrics::average_valid_measurements;
use record_insights::models::report::MeasurementsRequest;
use record_insights::responses::{error_response, json_response, method_not_allowed, parse_json_body, unprocessable};
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    run(handler).await
}

/// POST /api/measurements — Average of present measurements.
///
/// Returns 422 when no reading is present or a reading is not numeric.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return method_not_allowed("Use POST with a JSON body {\"values\": [...]}");
    }

    let request: MeasurementsRequest = match parse_json_body(req.body()) {
        Ok(request) => request,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, "Bad request", &err.to_string()),
    };

    match average_valid_measurements(&request.values) {
        Ok(average) => json_response(
            StatusCode::OK,
            &json!({ "average": average, "values": request.values.len() }),
        ),
        Err(err) => unprocessable(&err),
    }
}
