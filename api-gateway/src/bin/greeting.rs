//! Greeting Lambda - Handles / and /{name} endpoints.
//!
//! Endpoints:
//! - GET / - Hello World page
//! - GET /{name} - Personal greeting

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{error_response, escape_html, html_response};
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let path = event.uri().path();
    let method = event.method().as_str();

    info!("Received request: method={}, path={}", method, path);

    if method != "GET" {
        return error_response(405, "Method not allowed");
    }

    match path.trim_start_matches('/') {
        "" => html_response(200, "<h1>Hello World!</h1>"),
        name if !name.contains('/') => {
            let name = match urlencoding::decode(name) {
                Ok(name) => name,
                Err(_) => return error_response(400, "Invalid path encoding"),
            };
            html_response(200, format!("Hello, {}!", escape_html(&name)))
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http;

    async fn get(uri: &str) -> (u16, String) {
        let request = http::Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::Empty)
            .unwrap();
        let response = handler(request).await.unwrap();
        let status = response.status().as_u16();
        let body = String::from_utf8(response.body().as_ref().to_vec()).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_hello_world() {
        let (status, body) = get("/").await;
        assert_eq!(status, 200);
        assert_eq!(body, "<h1>Hello World!</h1>");
    }

    #[tokio::test]
    async fn test_personal_greeting() {
        let (status, body) = get("/Lulu").await;
        assert_eq!(status, 200);
        assert_eq!(body, "Hello, Lulu!");
    }

    #[tokio::test]
    async fn test_personal_greeting_escapes_markup() {
        let (status, body) = get("/%3Cb%3E").await;
        assert_eq!(status, 200);
        assert_eq!(body, "Hello, &lt;b&gt;!");
    }

    #[tokio::test]
    async fn test_nested_path_not_found() {
        let (status, _) = get("/a/b").await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/Lulu")
            .body(Body::Empty)
            .unwrap();
        let response = handler(request).await.unwrap();
        assert_eq!(response.status(), 405);
    }
}
