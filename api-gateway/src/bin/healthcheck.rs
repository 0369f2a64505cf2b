//! Healthcheck Lambda - Handles /healthcheck endpoint.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, html_response};
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    match (event.method().as_str(), event.uri().path()) {
        ("GET" | "HEAD", "/healthcheck") => html_response(200, "OK"),
        (_, "/healthcheck") => error_response(405, "Method not allowed"),
        _ => error_response(404, "Not found"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}
