//! Calculate Date Lambda - Handles /calculateDate endpoint.
//!
//! Adds a (possibly negative) number of weeks to a date.

use chrono::{Duration, NaiveDate};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::Value;
use shared::http::{error_response, json_response};
use shared::models::DateResultResponse;
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let path = event.uri().path();
    let method = event.method().as_str();

    info!("Received request: method={}, path={}", method, path);

    match (method, path) {
        ("POST", "/calculateDate") => {
            let payload: Value =
                serde_json::from_slice(event.body().as_ref()).unwrap_or(Value::Null);

            let date = match parse_date(&payload) {
                Ok(date) => date,
                Err(message) => return error_response(400, message),
            };
            let weeks = match parse_weeks(&payload) {
                Ok(weeks) => weeks,
                Err(message) => return error_response(400, message),
            };

            let delta = weeks.checked_mul(7).and_then(Duration::try_days);
            match delta.and_then(|delta| date.checked_add_signed(delta)) {
                Some(result) => json_response(
                    200,
                    &DateResultResponse {
                        result: result.format("%Y-%m-%d").to_string(),
                    },
                ),
                None => error_response(400, "'weeks' is out of range!"),
            }
        }
        _ => error_response(404, "Not found"),
    }
}

fn parse_date(payload: &Value) -> Result<NaiveDate, String> {
    let raw = payload
        .get("date")
        .ok_or_else(|| "'date' is missing from request!".to_string())?;
    raw.as_str()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or_else(|| "'date' must be in YYYY-MM-DD format!".to_string())
}

fn parse_weeks(payload: &Value) -> Result<i64, String> {
    let raw = payload
        .get("weeks")
        .ok_or_else(|| "'weeks' is missing from request!".to_string())?;
    // Strict: 10.7 and "asdf10" are both rejected.
    raw.as_i64()
        .ok_or_else(|| "'weeks' must be an integer!".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http;
    use serde_json::json;

    async fn run_request(payload: Value) -> (u16, Value) {
        let request = http::Request::builder()
            .method("POST")
            .uri("/calculateDate")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        let response = handler(request).await.unwrap();
        let status = response.status().as_u16();
        let body: Value = serde_json::from_slice(response.body().as_ref()).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_calculate_date_future() {
        let (status, body) = run_request(json!({ "date": "2024-05-27", "weeks": 10 })).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "result": "2024-08-05" }));
    }

    #[tokio::test]
    async fn test_calculate_date_past() {
        let (status, body) = run_request(json!({ "date": "2024-03-24", "weeks": -2 })).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "result": "2024-03-10" }));
    }

    #[tokio::test]
    async fn test_calculate_date_weeks_is_zero() {
        let (status, body) = run_request(json!({ "date": "2024-05-27", "weeks": 0 })).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "result": "2024-05-27" }));
    }

    #[tokio::test]
    async fn test_calculate_date_missing_date() {
        let (status, body) = run_request(json!({ "weeks": 10 })).await;
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({
                "code": 400,
                "message": "'date' is missing from request!"
            })
        );
    }

    #[tokio::test]
    async fn test_calculate_date_invalid_date_format() {
        let (status, body) = run_request(json!({ "date": "2024/666/21", "weeks": 10 })).await;
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({
                "code": 400,
                "message": "'date' must be in YYYY-MM-DD format!"
            })
        );
    }

    #[tokio::test]
    async fn test_calculate_date_missing_weeks() {
        let (status, body) = run_request(json!({ "date": "2024-05-27" })).await;
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({
                "code": 400,
                "message": "'weeks' is missing from request!"
            })
        );
    }

    #[tokio::test]
    async fn test_calculate_date_weeks_is_not_integer() {
        let (status, body) = run_request(json!({ "date": "2024-05-27", "weeks": 10.7 })).await;
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({
                "code": 400,
                "message": "'weeks' must be an integer!"
            })
        );
    }

    #[tokio::test]
    async fn test_calculate_date_weeks_is_not_numeric() {
        let (status, body) = run_request(json!({ "date": "2024-05-27", "weeks": "asdf10" })).await;
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({
                "code": 400,
                "message": "'weeks' must be an integer!"
            })
        );
    }
}
