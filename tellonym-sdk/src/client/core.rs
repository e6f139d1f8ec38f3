use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tellonym_common::constants::headers;
use url::Url;

use super::hosts::{HostAlias, HostMap};
use crate::errors::BuildError;

#[derive(Debug, Clone, Default)]
#[must_use]
/// Configures a [`TellonymHttpClient`] before construction.
///
/// Customize timeouts, the identifying headers, and where host aliases
/// resolve to. Most code obtains this via [`TellonymHttpClient::builder()`].
///
/// # Defaults
/// - Hosts: `https://{alias}.tellonym.me/`
/// - HTTP request timeout: reqwest default (no global timeout) unless set via
///   [`Self::request_timeout`]
/// - User-agent: the desktop browser string the web client sends
/// - `tellonym-client`: the web client version string
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// # use tellonym::TellonymHttpClient;
/// let client = TellonymHttpClient::builder()
///     .request_timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<_, tellonym::BuildError>(())
/// ```
pub struct TellonymHttpClientBuilder {
    http_request_timeout: Option<Duration>,
    user_agent: Option<String>,
    client_version: Option<String>,
    domain: Option<String>,
    origin: Option<Url>,
}

impl TellonymHttpClientBuilder {
    /// Set HTTP requests timeout.
    pub fn request_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.http_request_timeout = Some(timeout);

        self
    }

    /// Replace the default browser user-agent.
    pub fn user_agent<S: Into<String>>(&mut self, user_agent: S) -> &mut Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the `tellonym-client` header value (default `web:3.28.7`).
    pub fn client_version<S: Into<String>>(&mut self, version: S) -> &mut Self {
        self.client_version = Some(version.into());
        self
    }

    /// Use another top-level domain for the `https://{alias}.{domain}/` layout.
    pub fn domain<S: Into<String>>(&mut self, domain: S) -> &mut Self {
        self.domain = Some(domain.into());
        self
    }

    /// Route every host alias to `{origin}/{alias}/` instead of a subdomain.
    ///
    /// Meant for local mock servers, which listen on a single origin.
    /// Takes precedence over [`Self::domain`].
    pub fn origin(&mut self, origin: Url) -> &mut Self {
        self.origin = Some(origin);
        self
    }

    /// Build [`TellonymHttpClient`]
    pub fn build(&self) -> Result<TellonymHttpClient, BuildError> {
        let hosts = match (&self.origin, &self.domain) {
            (Some(origin), _) => HostMap::Origin {
                origin: origin.clone(),
            },
            (None, Some(domain)) => HostMap::Subdomains {
                domain: domain.trim().trim_matches('.').to_string(),
            },
            (None, None) => HostMap::default(),
        };
        // Surface a bad domain/origin now rather than on the first call.
        hosts.base_url(&HostAlias::Api)?;

        let user_agent = self
            .user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .unwrap_or(headers::USER_AGENT);
        let client_version = self
            .client_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(headers::CLIENT_VERSION);

        let mut base_headers = HeaderMap::new();
        base_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        base_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        base_headers.insert(USER_AGENT, header_value(user_agent)?);
        base_headers.insert(
            HeaderName::from_static(headers::CLIENT_HEADER),
            header_value(client_version)?,
        );

        #[allow(unused_mut, reason = "mutated on native targets only")]
        let mut http_builder = reqwest::Client::builder();

        // TODO: change this after Reqwest publish a release with timeout in wasm
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.http_request_timeout {
            http_builder = http_builder.timeout(timeout);
        }

        Ok(TellonymHttpClient {
            http: http_builder.build()?,
            hosts,
            base_headers,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, BuildError> {
    HeaderValue::from_str(value).map_err(|e| BuildError::Header(e.to_string()))
}

/// Transport client for the Tellonym API.
///
/// `TellonymHttpClient` is the low-level, stateless engine the session is built
/// on. It owns:
/// - A reqwest HTTP client (connection pool, TLS state).
/// - The [`HostMap`] that turns host aliases into base URLs.
/// - The base headers every request starts from.
///
/// ### What it *doesn’t* do
/// - It is **not** session aware: it never attaches a bearer token. For
///   authenticated calls use [`crate::TellonymSession`].
///
/// ### Construction
/// Use [`TellonymHttpClient::builder()`] to tweak timeouts, headers or hosts;
/// or pick the defaults via [`TellonymHttpClient::new()`].
///
/// Clones are cheap and share the connection pool.
#[derive(Clone, Debug)]
pub struct TellonymHttpClient {
    pub(crate) http: reqwest::Client,
    pub(crate) hosts: HostMap,
    pub(crate) base_headers: HeaderMap,
}

impl TellonymHttpClient {
    /// Creates a client for the production API.
    pub fn new() -> Result<TellonymHttpClient, BuildError> {
        Self::builder().build()
    }

    /// Returns a builder to edit settings before creating [`TellonymHttpClient`].
    pub fn builder() -> TellonymHttpClientBuilder {
        TellonymHttpClientBuilder::default()
    }

    // === Getters ===

    /// How host aliases resolve for this client.
    pub fn hosts(&self) -> &HostMap {
        &self.hosts
    }

    /// Headers every request starts from, before the bearer token and
    /// per-call overrides are merged in.
    pub fn base_headers(&self) -> &HeaderMap {
        &self.base_headers
    }

    /// Returns a reference to the internal reqwest client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers() {
        let client = TellonymHttpClient::new().unwrap();
        let base = client.base_headers();
        assert_eq!(base[CONTENT_TYPE], "application/json");
        assert_eq!(base[ACCEPT], "application/json");
        assert_eq!(base[USER_AGENT], headers::USER_AGENT);
        assert_eq!(base["tellonym-client"], "web:3.28.7");
    }

    #[test]
    fn overrides_and_blank_values() {
        let client = TellonymHttpClient::builder()
            .user_agent("tellonym-rs/0.1")
            .client_version("   ")
            .domain("tellonym.test.")
            .build()
            .unwrap();
        assert_eq!(client.base_headers()[USER_AGENT], "tellonym-rs/0.1");
        assert_eq!(client.base_headers()["tellonym-client"], "web:3.28.7");
        assert_eq!(
            client.hosts().base_url(&HostAlias::Chat).unwrap().as_str(),
            "https://chat-api.tellonym.test/"
        );
    }

    #[test]
    fn origin_wins_over_domain() {
        let client = TellonymHttpClient::builder()
            .domain("elsewhere.example")
            .origin(Url::parse("http://localhost:9000/").unwrap())
            .build()
            .unwrap();
        assert_eq!(
            client.hosts().base_url(&HostAlias::Api).unwrap().as_str(),
            "http://localhost:9000/api/"
        );
    }

    #[test]
    fn invalid_user_agent_is_rejected() {
        let err = TellonymHttpClient::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Header(_)));
    }
}
