//! API endpoint configuration.

/// Backend port; the UI is served separately during development.
const API_PORT: u16 = 5000;

/// Common prefix for every dashboard endpoint.
pub const API_PREFIX: &str = "/api/laptops";

/// Uniform request timeout, applied to every call.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Base URL for API requests, built from the current window location.
///
/// Returns e.g. "http://localhost:5000" or an empty string when no window
/// is available (native test runs).
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

/// Full URL for an API path (path starts with "/", e.g. "/orders").
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", api_base(), API_PREFIX, path)
}
