//! Times Two Lambda - Handles /timestwo endpoint.
//!
//! Doubles the `num` form parameter.

use std::collections::HashMap;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, json_response};
use shared::models::TimesTwoResponse;
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let path = event.uri().path();
    let method = event.method().as_str();

    info!("Received request: method={}, path={}", method, path);

    match (method, path) {
        ("POST", "/timestwo") => {
            let params = form_params(event.body());

            let raw = match params.get("num") {
                Some(raw) => raw,
                None => return error_response(400, "'num' not present in request parameters."),
            };
            let num: i64 = match raw.parse() {
                Ok(num) => num,
                Err(_) => return error_response(400, "'num' must be an integer."),
            };
            let result = match num.checked_mul(2) {
                Some(result) => result,
                None => return error_response(400, "'num' is out of range."),
            };

            json_response(200, &TimesTwoResponse { num, result })
        }
        _ => error_response(404, "Not found"),
    }
}

/// Parse an application/x-www-form-urlencoded request body.
fn form_params(body: &Body) -> HashMap<String, String> {
    let raw = std::str::from_utf8(body.as_ref()).unwrap_or("");
    raw.split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = urlencoding::decode(key).ok()?;
            let value = urlencoding::decode(value).ok()?;
            Some((key.into_owned(), value.into_owned()))
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}
