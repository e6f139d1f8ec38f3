//! Endpoint facade. Every method is one [`crate::RequestSpec`] plus one unwrap.

mod account;
mod chat;
mod feed;
mod follows;
mod moderation;
mod posts;
mod profiles;
pub(crate) mod reports;
mod search;
mod tells;
