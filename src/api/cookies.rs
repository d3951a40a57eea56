//! Session cookie parsing and `Set-Cookie` construction.

use axum::http::{HeaderMap, header::COOKIE};
use chrono::TimeDelta;

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "visit_session";

/// Extracts the session cookie value from the request headers.
///
/// Handles several cookies in one `Cookie` header and repeated `Cookie`
/// headers; other cookies are ignored.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(SESSION_COOKIE), Some(value)) if !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// `Set-Cookie` value installing a session cookie for `ttl`.
pub fn session_set_cookie(value: &str, ttl: TimeDelta, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        value,
        ttl.num_seconds().max(0)
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value removing the session cookie from the browser.
pub fn session_clear_cookie(secure: bool) -> String {
    session_set_cookie("", TimeDelta::zero(), secure)
}
