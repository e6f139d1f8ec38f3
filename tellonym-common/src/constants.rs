//! Constants used across the Tellonym crates.

/// Top-level domain every host alias is a subdomain of.
pub const DOMAIN: &str = "tellonym.me";

/// Literal body returned by mutation endpoints that succeeded.
///
/// Note the quotes: the server answers with a JSON string, and the endpoints
/// that check it read the body as text.
pub const OK_TOKEN: &str = "\"ok\"";

/// Subdomain aliases of [`DOMAIN`].
pub mod hosts {
    /// Default REST host.
    pub const API: &str = "api";
    /// Chat REST host.
    pub const CHAT: &str = "chat-api";
    /// Avatar image host. Only used for URL templating.
    pub const USER_IMAGES: &str = "userimg";
}

/// Headers sent with every request.
pub mod headers {
    /// Browser user-agent the web client identifies itself with.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/104.0.5112.8";
    /// Name of the client identifier header.
    pub const CLIENT_HEADER: &str = "tellonym-client";
    /// Value of the client identifier header.
    pub const CLIENT_VERSION: &str = "web:3.28.7";
}

/// Paths of the avatar image host.
pub mod avatars {
    /// Large avatar size prefix on [`super::hosts::USER_IMAGES`].
    pub const LARGE_PREFIX: &str = "lg-v2/";
}
