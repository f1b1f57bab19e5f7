//! CSRF cookie access.
//!
//! The backend sets a `csrftoken` cookie that must be echoed back in the
//! `X-CSRFToken` header on state-changing requests. Parsing is pure so it can
//! be tested natively; reading `document.cookie` requires a browser.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

pub const CSRF_COOKIE: &str = "csrftoken";

/// Current CSRF token from `document.cookie`, or `""` when absent.
pub fn csrf_token() -> String {
    csrf_token_from(&document_cookie())
}

/// Extract and percent-decode the `csrftoken` value from a cookie string.
///
/// A cookie only counts when its name starts the string or follows a space,
/// and its value is non-empty. Returns `""` when no such cookie exists.
pub fn csrf_token_from(cookies: &str) -> String {
    cookie_value(cookies, CSRF_COOKIE).map(percent_decode).unwrap_or_default()
}

fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let value = pair.trim_start_matches(' ').strip_prefix(name)?.strip_prefix('=')?;
        (!value.is_empty()).then_some(value)
    })
}

/// `decodeURIComponent` equivalent. Malformed escapes are kept verbatim.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes.get(i + 1)), hex_digit(bytes.get(i + 2))) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    match String::from_utf8(out) {
        Ok(decoded) => decoded,
        Err(_) => raw.to_owned(),
    }
}

fn hex_digit(byte: Option<&u8>) -> Option<u8> {
    let c = char::from(*byte?);
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

fn document_cookie() -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
