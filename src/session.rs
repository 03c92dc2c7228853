use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

/// Cookie carrying the admin session flag. The jar signs it, so a client
/// cannot forge the value; there is still only one admin identity and no
/// expiry beyond what the cookie transport provides.
pub const SESSION_COOKIE: &str = "admin_session";

pub fn is_admin(jar: &SignedCookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value() == "true")
        .unwrap_or(false)
}

pub fn log_in(jar: SignedCookieJar) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, "true"))
            .path("/")
            .http_only(true)
            .build(),
    )
}

pub fn log_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build())
}
