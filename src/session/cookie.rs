//! Session cookie encoding, signing, and parsing.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Fixed name of the session id cookie.
pub const SESSION_COOKIE: &str = "app-session";

/// Cookie lifetime: half a year, for the refresh token.
pub const COOKIE_MAX_AGE_SECS: u64 = 15_768_000;

fn signature(secret: &str, id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b".");
    hasher.update(id.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Encode a session id into the signed cookie value `<id>.<signature>`.
pub fn encode(secret: &str, id: &str) -> String {
    format!("{id}.{}", signature(secret, id))
}

/// Recover the session id from a signed cookie value.
///
/// Returns `None` when the value is malformed or the signature does not
/// match; callers treat that the same as an absent cookie.
pub fn verify<'a>(secret: &str, value: &'a str) -> Option<&'a str> {
    let (id, sig) = value.rsplit_once('.')?;
    if id.is_empty() || sig != signature(secret, id) {
        return None;
    }
    Some(id)
}

/// Render the full `Set-Cookie` header value for a signed cookie value.
///
/// HttpOnly mitigates script access; SameSite=Strict keeps the cookie
/// first-party only.
// TODO: add Secure once local tooling talks TLS to the server.
pub fn set_cookie_value(value: &str) -> String {
    format!("{SESSION_COOKIE}={value}; Max-Age={COOKIE_MAX_AGE_SECS}; Path=/; HttpOnly; SameSite=Strict")
}

/// Find this server's session cookie inside a `Cookie` request header.
pub fn from_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}
