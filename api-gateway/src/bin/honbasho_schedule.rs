//! Sumo Honbasho Schedule Lambda - Handles /getSumoHonbashoSchedule endpoint.
//!
//! Returns the Grand Sumo Tournament schedule for the requested year: six
//! tournaments, each with 15 consecutive dates starting on the 2nd Sunday
//! of the tournament month.

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use shared::devtest;
use shared::honbasho::{self, MAX_YEAR, MIN_YEAR};
use shared::http::{error_response, json_response};
use shared::models::ScheduleResponse;
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let path = event.uri().path();
    let method = event.method().as_str();

    info!("Received request: method={}, path={}", method, path);

    match (method, path) {
        ("GET", "/getSumoHonbashoSchedule") => {
            devtest::simulate_delay("HONBASHO_SCHEDULE").await;

            let year = match validate_year(&event) {
                Ok(year) => year,
                Err(message) => return error_response(400, message),
            };

            let schedule = honbasho::calculate_schedule(year);
            json_response(200, &ScheduleResponse::from(schedule.as_slice()))
        }
        _ => error_response(404, "Not found"),
    }
}

/// Validate the `year` request argument: present, an integer, and within the
/// supported range.
fn validate_year(event: &Request) -> Result<i32, String> {
    let params = event.query_string_parameters();
    let raw = match params.first("year") {
        Some(raw) => raw,
        None => return Err("'year' must be provided in the request arguments!".to_string()),
    };

    // Strict parse: a fractional value like "20027.7" is rejected, never
    // truncated.
    let year: i32 = raw
        .parse()
        .map_err(|_| "Request argument 'year' must be an integer!".to_string())?;

    if year < MIN_YEAR {
        return Err(format!("Request argument 'year' cannot be before {MIN_YEAR}!"));
    }
    if year > MAX_YEAR {
        return Err("Request argument 'year' exceeded maximum allowed year value!".to_string());
    }
    Ok(year)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}
