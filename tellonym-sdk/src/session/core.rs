use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tellonym_common::avatar::AvatarRef;
use tellonym_common::constants::avatars::LARGE_PREFIX;
use tellonym_common::models::Account;
use url::Url;

use crate::client::hosts::HostAlias;
use crate::client::request::{RequestSpec, bearer, merge_headers};
use crate::errors::{AuthError, Error, Result};
use crate::global::global_client;
use crate::response::unwrap_whole;
use crate::{TellonymHttpClient, cross_log};

pub(crate) const ACCOUNT_INFO_PATH: &str = "accounts/myself/";
pub(crate) const ACCOUNT_INFO_FAILED: &str = "Failed to get account info";
const TOKEN_DESTROY_PATH: &str = "tokens/destroy";

/// Stateful, per-account API driver built on a shared [`TellonymHttpClient`].
///
/// A `TellonymSession` represents one account. It is either anonymous or
/// authenticated:
/// - anonymous → authenticated via [`Self::login`], which probes the account
///   with the candidate token and commits only if the probe succeeds;
/// - authenticated → anonymous via [`Self::logout`] or [`Self::destroy_token`].
///
/// Every endpoint method borrows `&self` and never changes the session state;
/// only the three methods above take `&mut self`. Endpoint calls on an
/// anonymous session fail with [`AuthError::NotAuthenticated`] before any
/// network I/O.
///
/// Concurrency:
/// - Clones share the underlying HTTP client but carry independent session
///   state. Logging one clone in or out does not affect the others; keeping
///   them coherent is the caller's job.
///
/// # Example
/// ```no_run
/// # async fn run() -> tellonym::Result<()> {
/// let mut session = tellonym::TellonymSession::new()?;
/// let me = session.login(Some("<token>")).await?;
/// println!("logged in as {}", me.username());
///
/// let tells = session.tells(None).await?;
/// println!("{} tells", tells.len());
///
/// session.logout();
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct TellonymSession {
    pub(crate) client: TellonymHttpClient,

    /// Token used to sign requests. Only set while authenticated.
    pub(crate) credential: Option<String>,

    /// Token handed over at construction, used by `login(None)`.
    pub(crate) pending_credential: Option<String>,

    /// Profile fetched at login. `Some` iff authenticated.
    pub(crate) user: Option<Account>,

    /// Log failures and session transitions.
    pub(crate) debug: bool,
}

impl std::fmt::Debug for TellonymSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TellonymSession")
            .field("client", &self.client)
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.user.as_ref().map(Account::username))
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Configures a [`TellonymSession`] before construction.
#[derive(Debug, Default)]
#[must_use]
pub struct TellonymSessionBuilder {
    client: Option<TellonymHttpClient>,
    token: Option<String>,
    debug: bool,
}

impl TellonymSessionBuilder {
    /// Use this transport instead of the global default client.
    pub fn client(mut self, client: TellonymHttpClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Token to use when [`TellonymSession::login`] is called without one.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Log failures and session transitions.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build an anonymous session.
    pub fn build(self) -> Result<TellonymSession> {
        let client = match self.client {
            Some(client) => client,
            None => global_client()?,
        };
        Ok(TellonymSession {
            client,
            credential: None,
            pending_credential: self.token.filter(|token| !token.is_empty()),
            user: None,
            debug: self.debug,
        })
    }
}

impl TellonymSession {
    /// An anonymous session on the global default client.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// An anonymous session on `client`.
    pub fn with_client(client: TellonymHttpClient) -> Self {
        TellonymSession {
            client,
            credential: None,
            pending_credential: None,
            user: None,
            debug: false,
        }
    }

    /// Returns a builder to set the client, a stored token and the debug flag.
    pub fn builder() -> TellonymSessionBuilder {
        TellonymSessionBuilder::default()
    }

    // === Getters ===

    /// True between a successful `login` and the next `logout`/`destroy_token`.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.credential.is_some()
    }

    /// Profile fetched at login.
    pub fn current_user(&self) -> Option<&Account> {
        self.user.as_ref()
    }

    /// Returns a reference to the internal `TellonymHttpClient`.
    pub fn client(&self) -> &TellonymHttpClient {
        &self.client
    }

    /// Whether failures and session transitions are logged.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Toggle failure logging.
    pub fn set_debug(&mut self, debug: bool) -> &mut Self {
        self.debug = debug;
        self
    }

    // === Session lifecycle ===

    /// Log in with `token`, or with the token given at construction if `None`.
    ///
    /// The token is first used to fetch `accounts/myself/`. Only if that call
    /// succeeds and the profile has both an id and a username is the session
    /// committed. On any failure the session is left exactly as it was.
    ///
    /// # Errors
    /// - [`AuthError::AlreadyAuthenticated`] if already logged in.
    /// - [`AuthError::MissingCredential`] if no non-empty token is available.
    /// - [`AuthError::LoginFailed`] wrapping the probe failure otherwise.
    pub async fn login(&mut self, token: Option<&str>) -> Result<Account> {
        if self.is_authenticated() {
            return Err(self.fail(AuthError::AlreadyAuthenticated.into()));
        }

        let candidate = match token.filter(|token| !token.is_empty()) {
            Some(token) => token.to_string(),
            None => match self.pending_credential.clone() {
                Some(token) => token,
                None => return Err(self.fail(AuthError::MissingCredential.into())),
            },
        };

        let account = match self.probe_account(&candidate).await {
            Ok(account) => account,
            Err(e) => return Err(self.fail(AuthError::LoginFailed(Box::new(e)).into())),
        };

        if self.debug {
            cross_log!(info, "Successfully logged in as \"{}\"", account.username());
        }
        self.credential = Some(candidate);
        self.user = Some(account.clone());

        Ok(account)
    }

    /// Fetch the account behind `token` without touching session state.
    ///
    /// A zero, empty or null id counts as missing.
    async fn probe_account(&self, token: &str) -> Result<Account> {
        let value = self
            .send(token, RequestSpec::get(ACCOUNT_INFO_PATH))
            .await?
            .into_json()
            .unwrap_or(Value::Null);

        let has_id = value.get("id").is_some_and(|id| match id {
            Value::Null | Value::Bool(false) => false,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            _ => true,
        });
        let has_username = value
            .get("username")
            .and_then(Value::as_str)
            .is_some_and(|name| !name.is_empty());
        if !has_id || !has_username {
            return Err(Error::MissingField {
                operation: "Failed to login (no data, id or username)",
                field: if has_id { "username" } else { "id" },
            });
        }

        unwrap_whole(value, ACCOUNT_INFO_FAILED)
    }

    /// Forget the token and profile.
    ///
    /// Returns `false`, and logs [`AuthError::AlreadyLoggedOut`] when debug
    /// is on, if the session was not logged in.
    pub fn logout(&mut self) -> bool {
        if !self.is_authenticated() {
            self.fail(AuthError::AlreadyLoggedOut.into());
            return false;
        }

        self.clear();
        if self.debug {
            cross_log!(info, "Successfully logged out");
        }
        true
    }

    /// Revoke the token server-side, then log out.
    ///
    /// The revocation request is signed with the bearer token but is not
    /// gated on the session being logged in, so a token handed over at
    /// construction can be revoked without logging in first. Returns the
    /// result of the logout that follows.
    ///
    /// # Errors
    /// - [`AuthError::MissingCredential`] if there is no token at all.
    /// - [`AuthError::TokenDestroyFailed`] on a non-success status.
    /// - [`crate::errors::RequestError::Transport`] if the request could not be sent.
    pub async fn destroy_token(&mut self) -> Result<bool> {
        let Some(token) = self
            .credential
            .clone()
            .or_else(|| self.pending_credential.clone())
        else {
            return Err(self.fail(AuthError::MissingCredential.into()));
        };

        let url = self.client.hosts.url(&HostAlias::Api, TOKEN_DESTROY_PATH)?;
        let headers = merge_headers(
            &self.client.base_headers,
            Some(bearer(&token)?),
            &HeaderMap::new(),
        );
        let response = match self
            .client
            .http
            .request(Method::POST, url)
            .headers(headers)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Err(self.fail(e.into())),
        };
        let status = response.status();
        if !status.is_success() {
            return Err(self.fail(AuthError::TokenDestroyFailed { status }.into()));
        }

        self.pending_credential = None;
        Ok(self.logout())
    }

    pub(crate) fn clear(&mut self) {
        self.credential = None;
        self.user = None;
    }

    /// Log `err` when debug is on, then hand it back unchanged.
    pub(crate) fn fail(&self, err: Error) -> Error {
        if self.debug {
            cross_log!(warn, "{err}");
        }
        err
    }

    // === URL templating ===

    /// Large avatar URL on the image host. No request is made.
    pub fn avatar_url(&self, avatar: impl Into<AvatarRef>) -> Result<Url> {
        let path = format!("{LARGE_PREFIX}{}", avatar.into().file_name());
        Ok(self.client.hosts.url(&HostAlias::UserImages, &path)?)
    }
}
