//! High-level façade for the Tellonym crate.
//!
//! ## Mental model
//! - `Tellonym` - your entrypoint/handle to the SDK. Owns a `TellonymHttpClient`
//!   and hosts the few calls that need no account.
//! - `TellonymSession` - one account. Log in with a bearer token, then call
//!   endpoints "as me".
//!
//! ## Quick start
//! ```no_run
//! use tellonym::Tellonym;
//!
//! # async fn run() -> tellonym::Result<()> {
//! let tellonym = Tellonym::new()?;
//! let mut session = tellonym.session();
//! session.login(Some("<token>")).await?;
//!
//! for tell in session.tells(None).await? {
//!     if let Some(tell) = tell.item() {
//!         println!("{}", tell.tell);
//!     }
//! }
//! # Ok(()) }
//! ```

use reqwest::Method;
use serde_json::json;

use crate::client::hosts::HostAlias;
use crate::util::check_http_status;
use crate::{Result, TellonymHttpClient, TellonymSession, cross_log};

const FORGOT_PASSWORD_PATH: &str = "accounts/forgotpassword";

/// High-level façade. Owns a `TellonymHttpClient` and constructs sessions.
#[derive(Clone, Debug)]
pub struct Tellonym {
    client: TellonymHttpClient,
}

impl Tellonym {
    /// Construct with defaults (production hosts, browser headers).
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: TellonymHttpClient::new()?,
        })
    }

    /// Construct from an already-configured transport.
    pub fn with_client(client: TellonymHttpClient) -> Self {
        Self { client }
    }

    /// An anonymous session sharing this façade's client.
    pub fn session(&self) -> TellonymSession {
        TellonymSession::with_client(self.client.clone())
    }

    /// An anonymous session that will use `token` when
    /// [`TellonymSession::login`] is called without one.
    pub fn session_with_token(&self, token: impl Into<String>) -> Result<TellonymSession> {
        TellonymSession::builder()
            .client(self.client.clone())
            .token(token)
            .build()
    }

    /// Ask the service to mail a password reset link to `email`.
    ///
    /// Needs no account. Success is judged by the status class alone.
    ///
    /// # Errors
    /// - [`crate::errors::RequestError::UnexpectedStatus`] on a non-2xx status.
    /// - [`crate::errors::RequestError::Transport`] if the request could not be sent.
    pub async fn reset_password(&self, email: &str) -> Result<()> {
        let url = self.client.hosts.url(&HostAlias::Api, FORGOT_PASSWORD_PATH)?;
        let response = self
            .client
            .http
            .request(Method::POST, url)
            .headers(self.client.base_headers.clone())
            .body(json!({ "email": email }).to_string())
            .send()
            .await?;

        let response = check_http_status(response)?;
        cross_log!(debug, "password reset requested ({})", response.status());
        Ok(())
    }

    /// Access the underlying transport (advanced use).
    #[inline]
    pub fn client(&self) -> &TellonymHttpClient {
        &self.client
    }
}
