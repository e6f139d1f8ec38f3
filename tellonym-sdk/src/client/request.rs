//! Per-call request description and header merging.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use super::hosts::{HostAlias, HostMap};
use crate::errors::{AuthError, RequestError, Result};

/// How a response body is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decode {
    /// Parse the body as JSON. Error envelopes are detected.
    #[default]
    Json,
    /// Read the body as UTF-8 text, untouched.
    Text,
}

/// Everything the executor needs to perform one call.
///
/// Built fresh for each call with the chained constructors below and never
/// mutated once handed to the executor.
///
/// # Example
/// ```
/// use tellonym::{Decode, HostAlias, RequestSpec};
/// use serde_json::json;
///
/// let spec = RequestSpec::post("chat/send")
///     .host(HostAlias::Chat)
///     .json(&json!({ "userId": 1, "content": "hi", "type": 1 }))?
///     .decode(Decode::Json);
/// # Ok::<(), tellonym::Error>(())
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct RequestSpec {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) host: HostAlias,
    pub(crate) decode: Decode,
}

impl RequestSpec {
    /// A request with `method` on `path` (relative to the host alias root).
    ///
    /// The path is sent verbatim, including any literal `?query` it contains.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        RequestSpec {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
            host: HostAlias::Api,
            decode: Decode::Json,
        }
    }

    /// `GET path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT path`.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `DELETE path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Select the host alias (default [`HostAlias::Api`]).
    pub fn host(mut self, host: HostAlias) -> Self {
        self.host = host;
        self
    }

    /// Select how the body is decoded (default [`Decode::Json`]).
    pub fn decode(mut self, decode: Decode) -> Self {
        self.decode = decode;
        self
    }

    /// Append a percent-encoded query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Set a raw body. Ignored for `GET` and when empty.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        let encoded = serde_json::to_string(body).map_err(RequestError::json_decode)?;
        Ok(self.body(encoded))
    }

    /// Add a per-call header. Overrides base headers and the bearer token on
    /// key collision.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    // === Getters ===

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the host alias root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Selected host alias.
    pub fn host_alias(&self) -> &HostAlias {
        &self.host
    }

    /// Selected decode mode.
    pub fn decode_mode(&self) -> Decode {
        self.decode
    }

    /// The body that will actually be sent: none for `GET` or when empty.
    pub fn effective_body(&self) -> Option<&str> {
        if self.method == Method::GET {
            return None;
        }
        self.body.as_deref().filter(|body| !body.is_empty())
    }

    /// Resolve the full URL against `hosts`.
    pub fn url(&self, hosts: &HostMap) -> std::result::Result<Url, url::ParseError> {
        let mut url = hosts.url(&self.host, &self.path)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// `Bearer <token>` as a sensitive header value.
pub(crate) fn bearer(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| AuthError::InvalidCredential(e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Merge header layers in order: `base`, then `authorization`, then
/// `overrides`. A later layer replaces every value an earlier layer had for
/// the same name.
pub fn merge_headers(
    base: &HeaderMap,
    authorization: Option<HeaderValue>,
    overrides: &HeaderMap,
) -> HeaderMap {
    let mut merged = base.clone();
    if let Some(value) = authorization {
        merged.insert(AUTHORIZATION, value);
    }
    for name in overrides.keys() {
        merged.remove(name);
        for value in overrides.get_all(name) {
            merged.append(name.clone(), value.clone());
        }
    }
    merged
}
