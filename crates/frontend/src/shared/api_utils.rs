//! API utilities for frontend-backend communication.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, using
/// port 3000 for the backend server. Empty string if no window is available.
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Save failure split so dialogs can map key conflicts onto the key field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The natural key collided with an existing row (HTTP 409).
    Duplicate,
    Other(String),
}
