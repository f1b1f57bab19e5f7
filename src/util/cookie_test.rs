use super::*;

#[test]
fn csrf_token_from_single_cookie() {
    assert_eq!(csrf_token_from("csrftoken=abc123"), "abc123");
}

#[test]
fn csrf_token_missing_returns_empty() {
    assert_eq!(csrf_token_from("other=1"), "");
    assert_eq!(csrf_token_from(""), "");
}

#[test]
fn csrf_token_found_among_other_cookies() {
    assert_eq!(csrf_token_from("sessionid=s1; csrftoken=tok; theme=dark"), "tok");
}

#[test]
fn csrf_token_ignores_names_with_prefix() {
    assert_eq!(csrf_token_from("xcsrftoken=nope"), "");
    assert_eq!(csrf_token_from("csrftokens=nope"), "");
}

#[test]
fn csrf_token_skips_empty_value() {
    assert_eq!(csrf_token_from("csrftoken=; csrftoken=second"), "second");
}

#[test]
fn csrf_token_is_percent_decoded() {
    assert_eq!(csrf_token_from("csrftoken=a%2Bb%3D"), "a+b=");
}

#[test]
fn percent_decode_keeps_malformed_escapes() {
    assert_eq!(percent_decode("100%"), "100%");
    assert_eq!(percent_decode("%zz"), "%zz");
}

#[test]
fn percent_decode_falls_back_on_invalid_utf8() {
    assert_eq!(percent_decode("%ff"), "%ff");
}

#[cfg(not(feature = "csr"))]
#[test]
fn csrf_token_is_empty_outside_browser() {
    assert_eq!(csrf_token(), "");
}
