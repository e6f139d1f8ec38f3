//! Unified error types for the `tellonym` crate.
//!
//! Every failure a call can produce is a variant of the top-level [`Error`]
//! enum, grouped by where it comes from: the session guard and login flow
//! ([`AuthError`]), the single HTTP round trip ([`RequestError`]), or the local
//! check that the expected field is present ([`Error::MissingField`]).
//! Nothing is retried; every variant is terminal for the call that produced it.

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when an error envelope carries no `msg`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";
/// Code used when an error envelope carries no `code`.
pub const UNKNOWN_ERROR_CODE: &str = "??";

// --- Build-Time Error ---

/// Errors that can occur while building a [`crate::TellonymHttpClient`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to build the HTTP client (reqwest configuration).
    #[error("Failed to build the HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured header value is not a valid HTTP header value.
    #[error("Invalid header value: {0}")]
    Header(String),

    /// The configured origin or domain does not form a valid base URL.
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

// --- The Main Operational Error Enum ---

/// The crate’s top-level error type.
///
/// It groups failures into high-level categories:
/// - [`Error::Authentication`]: session state and login/logout flow
/// - [`Error::Request`]: transport, decoding, error envelopes and status codes
/// - [`Error::MissingField`]: a successful response lacked the expected field
/// - [`Error::Parse`]: a request URL could not be built
/// - [`Error::Build`]: construction of the client failed
/// - [`Error::Io`]: reading or writing a token file failed
#[derive(Debug, Error)]
pub enum Error {
    /// Session state forbids the call, or login/logout/token revocation failed.
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthError),

    /// The HTTP round trip failed.
    #[error("Request failed: {0}")]
    Request(#[from] RequestError),

    /// A successful response did not carry the field the endpoint returns.
    ///
    /// `operation` names the endpoint in the form "Failed to get tells".
    #[error("{operation}: response has no `{field}`")]
    MissingField {
        /// Endpoint-specific failure description.
        operation: &'static str,
        /// The expected field, or `<body>` for endpoints returning the whole value.
        field: &'static str,
    },

    /// URL building failed while preparing a request.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Building the client failed.
    #[error("Client build failed: {0}")]
    Build(#[from] BuildError),

    /// Reading or writing a token file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for application-level failures reported through an error envelope.
    pub fn is_application_error(&self) -> bool {
        matches!(self, Error::Request(RequestError::Application { .. }))
    }

    /// The HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request(RequestError::UnexpectedStatus { status }) => Some(*status),
            Error::Request(RequestError::Transport(e)) => e.status(),
            Error::Authentication(AuthError::TokenDestroyFailed { status }) => Some(*status),
            _ => None,
        }
    }
}

// --- Authentication Errors ---

/// Errors originating from the session: the auth guard and the
/// login/logout/token-destruction flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An endpoint was called on a session that is not logged in.
    #[error("Not logged in")]
    NotAuthenticated,

    /// `login` was called on a session that is already logged in.
    #[error("Already logged in")]
    AlreadyAuthenticated,

    /// `login` was called without a token, and none was configured.
    #[error("Token not set")]
    MissingCredential,

    /// The token cannot be sent in an `Authorization` header.
    #[error("Token is not a valid header value: {0}")]
    InvalidCredential(String),

    /// The account probe made with the candidate token failed or returned an
    /// incomplete profile. The session was left untouched.
    #[error("Failed to login: {0}")]
    LoginFailed(Box<Error>),

    /// `logout` was called on a session that is not logged in.
    #[error("Already logged out")]
    AlreadyLoggedOut,

    /// The token revocation endpoint answered with a non-success status.
    #[error("Failed to destroy token (status {status})")]
    TokenDestroyFailed {
        /// The HTTP status code returned by the server.
        status: StatusCode,
    },
}

// --- Request Errors ---

/// Transport and server-side failures of a single request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/protocol failure from reqwest (TLS, I/O, timeouts if configured).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body could not be read or decoded as JSON.
    #[error("Failed to parse JSON: {message}")]
    JsonDecode {
        /// Error message from the deserializer.
        message: String,
    },

    /// The body could not be read as UTF-8 text.
    #[error("Failed to parse Text: {message}")]
    TextDecode {
        /// Error message from the body reader.
        message: String,
    },

    /// The decoded body carried an `err` envelope, whatever the status code.
    #[error("An error happened: {message} ({code})")]
    Application {
        /// `err.msg`, or [`UNKNOWN_ERROR_MESSAGE`].
        message: String,
        /// `err.code` rendered as text, or [`UNKNOWN_ERROR_CODE`].
        code: String,
    },

    /// The server answered with a status other than `200 OK` and no envelope.
    #[error("The server returned a status different from 200 ({status})")]
    UnexpectedStatus {
        /// The HTTP status code returned by the server.
        status: StatusCode,
    },
}

impl RequestError {
    pub(crate) fn json_decode(err: impl std::fmt::Display) -> Self {
        RequestError::JsonDecode {
            message: err.to_string(),
        }
    }

    pub(crate) fn text_decode(err: impl std::fmt::Display) -> Self {
        RequestError::TextDecode {
            message: err.to_string(),
        }
    }
}

/// A specialized `Result` type for `tellonym` operations.
pub type Result<T> = std::result::Result<T, Error>;

// Ergonomic "Staircase" From Implementations ---
// A macro to reduce boilerplate for converting base errors into the top-level Error.
macro_rules! impl_from_for_error {
    ($from_type:ty, $to_variant:path) => {
        impl From<$from_type> for Error {
            fn from(err: $from_type) -> Self {
                $to_variant(err.into())
            }
        }
    };
}

// Request Errors
impl_from_for_error!(reqwest::Error, Error::Request);
