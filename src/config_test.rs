use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://trivela.example/api//");
    assert_eq!(cfg.base_url(), "https://trivela.example/api");
}

#[test]
fn default_uses_local_backend() {
    assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn endpoint_joins_leading_slash_path() {
    let cfg = ApiConfig::new("http://localhost:8000/");
    assert_eq!(cfg.endpoint("/check_auth/"), "http://localhost:8000/check_auth/");
}

#[test]
fn endpoint_inserts_missing_slash() {
    let cfg = ApiConfig::new("http://localhost:8000");
    assert_eq!(cfg.endpoint("leaderboard"), "http://localhost:8000/leaderboard");
}

#[test]
fn resolve_base_url_falls_back_when_unset_or_blank() {
    assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_base_url_prefers_configured_value() {
    assert_eq!(resolve_base_url(Some(" https://trivela.example ")), "https://trivela.example");
}
