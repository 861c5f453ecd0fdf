use record_insights::config::init_tracing;
use record_insights::metrics::average_non_cancelled;
use record_insights::models::report::OrdersRequest;
use record_insights::responses::{error_response, json_response, method_not_allowed, parse_json_body, unprocessable};
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    run(handler).await
}

/// POST /api/orders — Average order value over non-cancelled orders.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return method_not_allowed("Use POST with a JSON body {\"orders\": [...]}");
    }

    let request: OrdersRequest = match parse_json_body(req.body()) {
        Ok(request) => request,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, "Bad request", &err.to_string()),
    };

    match average_non_cancelled(&request.orders) {
        Ok(average) => {
            tracing::info!(orders = request.orders.len(), average, "averaged orders");
            json_response(
                StatusCode::OK,
                &json!({ "average": average, "orders": request.orders.len() }),
            )
        }
        Err(err) => unprocessable(&err),
    }
}
