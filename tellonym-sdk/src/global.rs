//! Global, resettable `TellonymHttpClient` for lazy construction of sessions.
//!
//! Most applications want zero-setup construction of `TellonymSession` without
//! passing a `TellonymHttpClient` everywhere. This module provides a
//! process-wide, lazily initialized, resettable client that
//! [`crate::TellonymSession::new`] reuses.
//!
//! # Design
//! - Backing storage is `ArcSwapOption<TellonymHttpClient>` inside a `OnceLock`.
//! - Reads are lock-free; `global_client()` does a single atomic load and
//!   returns a cheap clone of the current `TellonymHttpClient`.
//! - `set_global_client`/`drop_global_client` publish a new instance (or
//!   `None`). Existing clones keep working independently.
//! - Init is fallible and returns `BuildError` instead of panicking.
//!
//! Long-lived services that juggle several client configurations should pass
//! an explicit client to [`crate::TellonymSession::with_client`] instead.
//!
//! If multiple threads call `global_client()` concurrently before
//! initialization, more than one client may be constructed; the last stored
//! wins.
//!
//! # Examples
//! ```
//! # use tellonym::{global_client, set_global_client, drop_global_client, TellonymHttpClient};
//! let client = global_client()?;
//!
//! let custom = TellonymHttpClient::builder().domain("tellonym.test").build()?;
//! set_global_client(custom);
//! assert_eq!(
//!     global_client()?.hosts().base_url(&tellonym::HostAlias::Api).unwrap().as_str(),
//!     "https://api.tellonym.test/"
//! );
//!
//! drop_global_client();
//! let fresh = global_client()?; // constructed on demand
//! # Ok::<(), tellonym::BuildError>(())
//! ```

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::sync::OnceLock;

use crate::{BuildError, TellonymHttpClient};

/// Process-wide slot for the optional default client.
static GLOBAL_CLIENT: OnceLock<ArcSwapOption<TellonymHttpClient>> = OnceLock::new();

#[inline]
fn slot() -> &'static ArcSwapOption<TellonymHttpClient> {
    GLOBAL_CLIENT.get_or_init(|| ArcSwapOption::from(None))
}

/// Get-or-init the process-wide default client.
///
/// - On first use, constructs via `TellonymHttpClient::new()`.
/// - Subsequent calls are lock-free and just clone the current instance.
/// - Clones remain valid even if you later call `set_global_client` or
///   `drop_global_client`.
pub fn global_client() -> Result<TellonymHttpClient, BuildError> {
    if let Some(current) = slot().load_full() {
        return Ok(current.as_ref().clone());
    }

    let fresh = TellonymHttpClient::new()?;
    slot().store(Some(Arc::new(fresh.clone())));
    Ok(fresh)
}

/// Replace the global default client.
///
/// Existing handles continue to use the previous client until dropped.
pub fn set_global_client(new_client: TellonymHttpClient) {
    slot().store(Some(Arc::new(new_client)));
}

/// Clear the global default client.
///
/// After this call, the next `global_client()` lazily constructs a fresh client.
pub fn drop_global_client() {
    slot().store(None);
}
