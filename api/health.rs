use record_insights::config::init_tracing;
use record_insights::responses::json_response;
use record_insights::version;
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    run(handler).await
}

/// GET /api/health — Liveness check with the library version.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    json_response(StatusCode::OK, &json!({ "status": "ok", "version": version() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_insights::responses::parse_json_body;
    use serde_json::Value;

    #[tokio::test]
    async fn test_reports_status_and_version() {
        let req: Request = http::Request::builder()
            .method("GET")
            .body(Body::Empty)
            .unwrap();

        let response = handler(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload: Value = parse_json_body(response.body()).unwrap();
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["version"], version());
    }
}
