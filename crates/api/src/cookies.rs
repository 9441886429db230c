//! Session cookie construction and parsing.
//!
//! The session is carried by two HTTP-only cookies: the opaque session id
//! and the owning campus user id. Both are required for validation; the
//! pair keys the session store lookup.

use axum::http::header::{HeaderMap, COOKIE};

/// Cookie holding the opaque session id.
pub const SESSION_COOKIE: &str = "campus_sid";
/// Cookie holding the campus user id the session belongs to.
pub const USER_COOKIE: &str = "campus_uid";

/// Build the `Set-Cookie` values issued on login.
pub fn session_cookies(session_id: &str, user_id: &str, max_age_secs: i64) -> [String; 2] {
    [
        format!("{SESSION_COOKIE}={session_id}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax"),
        format!("{USER_COOKIE}={user_id}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax"),
    ]
}

/// Build the `Set-Cookie` values that clear the session cookies.
///
/// Logout sends these unconditionally, even when the session lookup
/// failed, so the client-facing token is always invalidated.
pub fn clear_session_cookies() -> [String; 2] {
    [
        format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
        format!("{USER_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
    ]
}

/// Extract a cookie value by name from the request headers.
///
/// Handles multiple `Cookie` headers and the usual `; `-separated pair
/// syntax. Returns the first match.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            if parts.next() == Some(name) {
                return parts.next().map(str::to_string);
            }
        }
    }
    None
}

/// The `(session_id, user_id)` pair from the request cookies, if both are
/// present.
pub fn session_pair(headers: &HeaderMap) -> Option<(String, String)> {
    let session_id = cookie_value(headers, SESSION_COOKIE)?;
    let user_id = cookie_value(headers, USER_COOKIE)?;
    Some((session_id, user_id))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn cookie_value_finds_named_cookie() {
        let headers = headers_with_cookie("campus_sid=abc123; campus_uid=S2024001; theme=dark");
        assert_eq!(cookie_value(&headers, SESSION_COOKIE).as_deref(), Some("abc123"));
        assert_eq!(cookie_value(&headers, USER_COOKIE).as_deref(), Some("S2024001"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_name_prefix_collisions() {
        let headers = headers_with_cookie("campus_sid_old=zzz; campus_sid=abc");
        assert_eq!(cookie_value(&headers, SESSION_COOKIE).as_deref(), Some("abc"));
    }

    #[test]
    fn session_pair_requires_both_cookies() {
        let headers = headers_with_cookie("campus_sid=abc123");
        assert_eq!(session_pair(&headers), None);

        let headers = headers_with_cookie("campus_sid=abc123; campus_uid=S2024001");
        assert_eq!(
            session_pair(&headers),
            Some(("abc123".to_string(), "S2024001".to_string()))
        );
    }

    #[test]
    fn issued_cookies_are_http_only() {
        for cookie in session_cookies("abc", "S1", 86400) {
            assert!(cookie.contains("HttpOnly"));
            assert!(cookie.contains("Max-Age=86400"));
        }
        for cookie in clear_session_cookies() {
            assert!(cookie.contains("Max-Age=0"));
        }
    }
}
