//! Worker Roster Lambda - Handles /getWorkers endpoint.
//!
//! Filters the static worker roster by requested working days. An empty
//! filter (or no request body at all) returns the full roster.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response};
use shared::models::WorkersRequest;
use shared::{roster, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let path = event.uri().path();
    let method = event.method().as_str();

    info!("Received request: method={}, path={}", method, path);

    match (method, path) {
        ("POST", "/getWorkers") => {
            let request = match parse_request(event.body()) {
                Ok(request) => request,
                Err(message) => return error_response(400, message),
            };

            if !roster::valid_work_days(&request.work_days) {
                return error_response(400, "Invalid value for parameter work_days!");
            }

            let config = Config::from_env();
            let list = match roster::load_worker_list(&config.worker_list_path) {
                Ok(list) => list,
                Err(e) => {
                    error!("Failed to load worker roster: {}", e);
                    return error_response(e.status_code(), e.to_string());
                }
            };

            json_response(200, &roster::filter_workers(list, &request.work_days))
        }
        _ => error_response(404, "Not found"),
    }
}

/// Parse the optional JSON body; an absent body means no filter.
fn parse_request(body: &Body) -> Result<WorkersRequest, String> {
    let raw = body.as_ref();
    if raw.is_empty() {
        return Ok(WorkersRequest::default());
    }
    serde_json::from_slice(raw).map_err(|_| "Invalid value for parameter work_days!".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}
