#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(any(), deny(clippy::unwrap_used))]

mod api;
mod client;
pub mod errors;
mod global;
mod macros;
mod response;
mod session;
mod tellonym;
mod util;

pub mod prelude;

// --- PUBLIC API EXPORTS ---
// Transport
pub use client::core::{TellonymHttpClient, TellonymHttpClientBuilder};
pub use client::hosts::{HostAlias, HostMap};
pub use client::request::{Decode, RequestSpec, merge_headers};
// High level actors
pub use session::core::{TellonymSession, TellonymSessionBuilder};
pub use tellonym::Tellonym;
// Decoding
pub use response::{Decoded, is_ok_token, unwrap_field, unwrap_whole};

// Error and global client
pub use errors::{BuildError, Error, Result};
pub use global::{drop_global_client, global_client, set_global_client};

// Report targets for the moderation endpoints
pub use api::reports::ReportTarget;

// Re-exports
pub use reqwest::{Method, StatusCode};
pub use tellonym_common::{avatar::AvatarRef, constants, models};
