use anyhow::Result;
use httpmock::prelude::*;
use httpmock::{Mock, MockServer};
use serde_json::{Value, json};
use tellonym::{HostAlias, TellonymHttpClient, TellonymHttpClientBuilder, TellonymSession};
use url::Url;

/// An ephemeral mock of the Tellonym API on a random local port.
///
/// Every host alias is routed to the same server under its own path prefix:
/// a call to `https://chat-api.tellonym.me/chat/send` arrives here as
/// `POST /chat-api/chat/send`. Use [`Self::path`] to build those paths when
/// mounting mocks.
///
/// The server shuts down when this value is dropped.
pub struct MockTellonym {
    server: MockServer,
}

impl std::fmt::Debug for MockTellonym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTellonym")
            .field("base_url", &self.server.base_url())
            .finish()
    }
}

impl MockTellonym {
    /// Start a new mock server.
    pub async fn start() -> Self {
        let server = MockServer::start_async().await;
        tracing::debug!("Mock Tellonym API listening on {}", server.base_url());
        Self { server }
    }

    /// The underlying `httpmock` server, for mounting arbitrary mocks.
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Origin every host alias resolves to.
    pub fn url(&self) -> Result<Url> {
        Ok(Url::parse(&self.server.base_url())?)
    }

    /// Request path the server sees for `path` on `alias`, e.g. `/api/tells/`.
    pub fn path(alias: &HostAlias, path: &str) -> String {
        format!("/{alias}/{}", path.trim_start_matches('/'))
    }

    /// A client builder pre-configured to route to this server.
    pub fn client_builder(&self) -> Result<TellonymHttpClientBuilder> {
        let mut builder = TellonymHttpClient::builder();
        builder.origin(self.url()?);
        Ok(builder)
    }

    /// A client routed to this server.
    pub fn client(&self) -> Result<TellonymHttpClient> {
        Ok(self.client_builder()?.build()?)
    }

    /// An anonymous session routed to this server.
    pub fn session(&self) -> Result<TellonymSession> {
        Ok(TellonymSession::with_client(self.client()?))
    }

    /// Mount `GET /api/accounts/myself/` answering for `token` with a minimal
    /// account. This is the call `login` makes.
    pub async fn mount_account(&self, token: &str, id: u64, username: &str) -> Mock<'_> {
        self.mount_account_body(token, json!({ "id": id, "username": username }))
            .await
    }

    /// Mount the account probe for `token` with an arbitrary body.
    pub async fn mount_account_body(&self, token: &str, body: Value) -> Mock<'_> {
        let bearer = format!("Bearer {token}");
        let path = Self::path(&HostAlias::Api, "accounts/myself/");
        self.server
            .mock_async(|when, then| {
                when.method(GET).path(path).header("authorization", bearer);
                then.status(200).json_body(body);
            })
            .await
    }

    /// A session already logged in as `username`.
    pub async fn logged_in_session(
        &self,
        token: &str,
        id: u64,
        username: &str,
    ) -> Result<TellonymSession> {
        self.mount_account(token, id, username).await;
        let mut session = self.session()?;
        session.login(Some(token)).await?;
        Ok(session)
    }
}
