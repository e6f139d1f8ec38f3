#![doc = include_str!("../README.md")]
//!

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(any(), deny(clippy::unwrap_used))]

mod mock_tellonym;
pub use mock_tellonym::MockTellonym;

// Re-export the crates tests need to mount and drive mocks
pub use httpmock;
pub use tellonym;
pub use tellonym_common;
