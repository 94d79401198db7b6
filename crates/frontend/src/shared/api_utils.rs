//! API utilities for frontend-backend communication
//!
//! Every request goes through [`send`], which attaches the bearer token from
//! localStorage when one is stored and turns non-2xx responses into a readable
//! error string for the page-local error banner.

use crate::system::auth::storage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Port the REST backend listens on.
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, e.g.
/// `"http://localhost:3000"`. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends url-encoded query parameters, skipping empty values.
///
/// ```rust
/// # use frontend::shared::api_utils::with_query;
/// let path = with_query("/api/overtime", &[("month", "3"), ("year", "2025")]);
/// assert_eq!(path, "/api/overtime?month=3&year=2025");
/// ```
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// Picks a human readable message out of an error response body.
///
/// The backend answers failures with `{"error": "..."}` or `{"message": "..."}`;
/// anything else falls back to the HTTP status.
pub fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let detail = parsed.as_ref().and_then(|v| {
        ["error", "message"]
            .iter()
            .find_map(|k| v.get(*k).and_then(|m| m.as_str()))
            .map(str::to_string)
    });
    match detail {
        Some(msg) if !msg.trim().is_empty() => format!("{} ({})", msg.trim(), status),
        _ => format!("Server error: {}", status),
    }
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(verb: Verb, url: &str) -> RequestBuilder {
    let builder = match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    };
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn send<B: Serialize>(verb: Verb, path: &str, body: Option<&B>) -> Result<Response, String> {
    let url = api_url(path);
    let request = builder(verb, &url);
    let sent = match body {
        Some(body) => {
            request
                .json(body)
                .map_err(|e| format!("Failed to serialize request: {}", e))?
                .send()
                .await
        }
        None => request.send().await,
    };

    let response = sent.map_err(|e| {
        log::warn!("{:?} {} failed: {}", verb, path, e);
        format!("Failed to send request: {}", e)
    })?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        log::warn!("{:?} {} -> {}", verb, path, status);
        return Err(error_message(status, &text));
    }

    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send::<()>(Verb::Get, path, None).await?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send(Verb::Post, path, Some(body)).await?;
    parse(response).await
}

/// POST whose response body is ignored.
pub async fn post_unit<B: Serialize>(path: &str, body: Option<&B>) -> Result<(), String> {
    send(Verb::Post, path, body).await.map(|_| ())
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send(Verb::Put, path, Some(body)).await?;
    parse(response).await
}

/// PUT whose response body is ignored.
pub async fn put_unit<B: Serialize>(path: &str, body: Option<&B>) -> Result<(), String> {
    send(Verb::Put, path, body).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    send::<()>(Verb::Delete, path, None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_and_skips_empty() {
        assert_eq!(
            with_query("/api/overtime", &[("month", "3"), ("year", "2025")]),
            "/api/overtime?month=3&year=2025"
        );
        assert_eq!(
            with_query("/api/budgets", &[("year", "FY 2025-26"), ("q", "")]),
            "/api/budgets?year=FY%202025-26"
        );
        assert_eq!(with_query("/api/periods", &[]), "/api/periods");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(409, r#"{"error":"Period already closed"}"#),
            "Period already closed (409)"
        );
        assert_eq!(
            error_message(400, r#"{"message":"Invalid amount"}"#),
            "Invalid amount (400)"
        );
        assert_eq!(error_message(500, "<html>oops</html>"), "Server error: 500");
        assert_eq!(error_message(401, r#"{"error":"  "}"#), "Server error: 401");
    }
}
