//! Counting filter that records page visits before routing.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Path suffixes treated as static assets and never counted.
const ASSET_SUFFIXES: [&str; 6] = [".css", ".js", ".ico", ".png", ".jpg", ".svg"];

/// Returns true if the request looks like a page navigation.
///
/// Counts `GET` requests outside `/api` whose path does not end in a known
/// asset extension. Repeated loads of the same page are all counted.
pub fn is_page_visit(method: &Method, path: &str) -> bool {
    if method != Method::GET {
        return false;
    }

    if path == "/api" || path.starts_with("/api/") {
        return false;
    }

    !ASSET_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Records a visit for qualifying requests, then forwards the request.
///
/// A failure to persist the visit is logged and never fails the request.
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    if is_page_visit(req.method(), req.uri().path())
        && let Err(e) = st.visit_service.record_visit().await
    {
        tracing::warn!(error = %e, path = %req.uri().path(), "Failed to record visit");
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_counted() {
        assert!(is_page_visit(&Method::GET, "/"));
        assert!(is_page_visit(&Method::GET, "/login"));
        assert!(is_page_visit(&Method::GET, "/dashboard"));
        assert!(is_page_visit(&Method::GET, "/about.html"));
    }

    #[test]
    fn test_non_get_not_counted() {
        assert!(!is_page_visit(&Method::POST, "/login"));
        assert!(!is_page_visit(&Method::HEAD, "/"));
    }

    #[test]
    fn test_api_not_counted() {
        assert!(!is_page_visit(&Method::GET, "/api"));
        assert!(!is_page_visit(&Method::GET, "/api/me"));
        assert!(!is_page_visit(&Method::GET, "/api/stats"));
        assert!(is_page_visit(&Method::GET, "/apiary"));
    }

    #[test]
    fn test_assets_not_counted() {
        for path in [
            "/style.css",
            "/js/dashboard.js",
            "/favicon.ico",
            "/img/logo.png",
            "/img/photo.jpg",
            "/icons/chart.svg",
        ] {
            assert!(!is_page_visit(&Method::GET, path), "{path}");
        }
    }

    #[test]
    fn test_unlisted_extensions_are_counted() {
        assert!(is_page_visit(&Method::GET, "/fonts/inter.woff2"));
        assert!(is_page_visit(&Method::GET, "/img/photo.jpeg"));
    }
}
