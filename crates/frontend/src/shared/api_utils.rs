//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from a path
///
/// When no base is configured the path is returned unchanged, so the
/// request goes to the origin that served the page.
///
/// # Arguments
/// * `api_base` - Optional base like "https://superset.example.com"
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url(None, "/savedqueryviewapi/api/create");
/// assert_eq!(url, "/savedqueryviewapi/api/create");
/// ```
pub fn api_url(api_base: Option<&str>, path: &str) -> String {
    match api_base.map(|base| base.trim_end_matches('/')) {
        Some(base) if !base.is_empty() => format!("{}{}", base, path),
        _ => path.to_string(),
    }
}
