//! Minimal HTTP transport seam.
//!
//! DESIGN
//! ======
//! The API client only needs "send a request, get a status and a body back".
//! Keeping that behind [`HttpClient`] lets state actions run against a
//! recording fake in native tests while the browser build uses `gloo-net`.
//! Futures are not `Send` on wasm, hence `?Send`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, url: url.into(), headers: Vec::new(), body: None }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Post, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body and the matching content type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the payload cannot be serialized.
    pub fn json<T: serde::Serialize>(self, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload)?;
        let mut req = self.header("Content-Type", "application/json");
        req.body = Some(body);
        Ok(req)
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// `true` for any 2xx status, mirroring `Response.ok` in the browser.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    /// Send one request and return whatever status the server answered with.
    /// Only transport failures are errors here; status handling is up to the
    /// caller.
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` transport. Every request carries credentials so the
/// backend session cookie is forwarded cross-origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use web_sys::RequestCredentials;

            let network = |e: gloo_net::Error| ApiError::Network(e.to_string());

            let mut builder = match req.method {
                HttpMethod::Get => Request::get(&req.url),
                HttpMethod::Post => Request::post(&req.url),
            }
            .credentials(RequestCredentials::Include);
            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }
            let request = match req.body {
                Some(body) => builder.body(body).map_err(network)?,
                None => builder.build().map_err(network)?,
            };
            let resp = request.send().await.map_err(network)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = req;
            Err(ApiError::Unavailable)
        }
    }
}
