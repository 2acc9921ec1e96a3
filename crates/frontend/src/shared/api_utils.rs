//! URL helpers for the REST API.
//!
//! The console is served from the same origin as the API gateway, so endpoint
//! URLs are `<origin><base_path><path>`.

/// Origin of the current page, e.g. `https://nsrs.example.com`.
///
/// Empty when no window is available, which keeps URLs relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Joins the configured base path and an endpoint path with exactly one `/`.
pub fn join_path(base_path: &str, path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, path)
}

/// Build a full API URL from the base path and an endpoint path
///
/// # Example
/// ```ignore
/// let url = api_url("/nsrs", "/simcard/supplier/page");
/// ```
pub fn api_url(base_path: &str, path: &str) -> String {
    format!("{}{}", api_base(), join_path(base_path, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_normalizes_slashes() {
        assert_eq!(join_path("/nsrs", "/simcard/type/page"), "/nsrs/simcard/type/page");
        assert_eq!(join_path("/nsrs/", "simcard/type/page"), "/nsrs/simcard/type/page");
        assert_eq!(join_path("", "/msisdn/numberLevel/page"), "/msisdn/numberLevel/page");
        assert_eq!(join_path("/nsrs", ""), "/nsrs");
    }
}
