//! HTTP dispatch for resolved iTunes Store URLs.
//!
//! Three request paths:
//!
//! 1. [`fetch_json`](ItunesClient::fetch_json) — GET a `ws` catalog URL and
//!    parse the body as JSON
//! 2. [`fetch_storefront`](ItunesClient::fetch_storefront) — GET a store
//!    page with the `X-Apple-Store-Front` header, body returned raw
//! 3. [`exists`](ItunesClient::exists) — HEAD probe, true iff status 200
//!
//! Each call is a single best-effort round trip: no retries, no backoff,
//! no caching. Typed endpoint wrappers are implemented in separate modules
//! (`search`, `store`) as `impl ItunesClient` blocks.

use crate::endpoint::Endpoint;
use crate::error::{ItunesError, Result};
use crate::types::{Args, Response};
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;

/// Store-front selector sent with storefront page requests
/// (US store, page format 5).
const STORE_FRONT: &str = "143441-1,5";

/// Client identity and transport settings.
///
/// The user-agent parts are assembled once at construction and attached to
/// every request; nothing here is ambient or process-global.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Client software name.
    pub name: String,
    /// Client version string.
    pub version: String,
    /// Build identifier appended to the user agent.
    pub build: String,
    /// Project URL advertised in the user agent.
    pub url: String,
    /// Per-request timeout. Requests never hang indefinitely.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            build: "0".to_owned(),
            url: concat!("https://crates.io/crates/", env!("CARGO_PKG_NAME")).to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Assemble the user-agent string:
    /// `name/version (iTunes Store Toolkit; url) Build/build`.
    pub fn user_agent(&self) -> String {
        format!(
            "{}/{} (iTunes Store Toolkit; {}) Build/{}",
            self.name, self.version, self.url, self.build
        )
    }
}

/// Blocking HTTP client for the iTunes Store web services.
///
/// Holds a [`reqwest::blocking::Client`] and the [`ClientConfig`] it was
/// built from. Stateless across calls; construct once and share freely.
pub struct ItunesClient {
    http: Client,
    config: ClientConfig,
}

impl ItunesClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with an explicit [`ClientConfig`].
    ///
    /// Fails with [`ItunesError::Config`] if the underlying HTTP client
    /// cannot be constructed; no network I/O is attempted.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ItunesError::Config(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Return the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve `method` + `args` against `endpoint`, then GET as JSON.
    ///
    /// The explicit counterpart of the legacy dynamic method dispatch:
    /// any catalog method name can be called without a dedicated wrapper.
    pub fn call(&self, endpoint: &Endpoint, method: &str, args: &Args) -> Result<Response<Value>> {
        let url = endpoint.resolve(method, args);
        self.fetch_json(&url)
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`ItunesError::Http`] — transport failure (connection refused,
    ///   timeout, DNS)
    /// - [`ItunesError::Json`] — body is not well-formed JSON; the body is
    ///   never silently coerced to null
    pub fn fetch_json(&self, url: &str) -> Result<Response<Value>> {
        let resp = self.http.get(url).send()?;
        let status = resp.status().as_u16();
        let headers = collect_headers(resp.headers());
        let text = resp.text()?;
        let body: Value = serde_json::from_str(&text)?;
        Ok(Response {
            status,
            headers,
            body,
        })
    }

    /// GET a storefront page, returning the body untouched.
    ///
    /// Sends `X-Apple-Store-Front` so the server renders the US store
    /// variant. The body is HTML as served; tidying it into XML is the
    /// caller's business.
    pub fn fetch_storefront(&self, url: &str) -> Result<Response<String>> {
        let resp = self
            .http
            .get(url)
            .header("X-Apple-Store-Front", STORE_FRONT)
            .send()?;
        let status = resp.status().as_u16();
        let headers = collect_headers(resp.headers());
        let body = resp.text()?;
        Ok(Response {
            status,
            headers,
            body,
        })
    }

    /// HEAD `url` and report whether it answered 200.
    ///
    /// Any other status (404 included) is `Ok(false)`. Only transport
    /// failures are errors, so callers can tell "doesn't exist" from
    /// "couldn't check".
    pub fn exists(&self, url: &str) -> Result<bool> {
        let resp = self.http.head(url).send()?;
        Ok(resp.status().as_u16() == 200)
    }
}

fn collect_headers(map: &HeaderMap) -> Vec<(String, String)> {
    map.iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                value.to_str().unwrap_or("").to_owned(),
            )
        })
        .collect()
}
