//! Backend endpoint configuration.
//!
//! The WASM bundle has no runtime environment, so the base URL is resolved
//! from `TRIVELA_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are dropped
    /// so endpoint paths can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Build the config from `TRIVELA_API_BASE_URL` captured at build time.
    ///
    /// Falls back to [`DEFAULT_API_BASE_URL`] when the variable was unset or
    /// blank.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(option_env!("TRIVELA_API_BASE_URL")))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path such as `/check_auth/`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn resolve_base_url(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE_URL,
    }
}
