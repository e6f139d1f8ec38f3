//! Common imports for quick starts.

// Common
pub use crate::{BuildError, Error, Result};

// Transport
pub use crate::{TellonymHttpClient, TellonymHttpClientBuilder};

// Entry point and the per-account session
pub use crate::{Tellonym, TellonymSession};

// Low-level calls
pub use crate::{Decode, HostAlias, RequestSpec};

// Wire models
pub use crate::models::*;
