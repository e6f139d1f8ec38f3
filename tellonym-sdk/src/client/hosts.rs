//! Host aliases and how they map onto concrete base URLs.

use std::fmt::Display;

use tellonym_common::constants::{DOMAIN, hosts};
use url::Url;

/// A symbolic name selecting one subdomain of the service's domain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HostAlias {
    /// `api`, the default REST host.
    #[default]
    Api,
    /// `chat-api`, used by chat endpoints.
    Chat,
    /// `userimg`, the avatar image host. Only used for URL templating.
    UserImages,
    /// Any other subdomain.
    Custom(String),
}

impl HostAlias {
    /// The subdomain label.
    pub fn as_str(&self) -> &str {
        match self {
            HostAlias::Api => hosts::API,
            HostAlias::Chat => hosts::CHAT,
            HostAlias::UserImages => hosts::USER_IMAGES,
            HostAlias::Custom(label) => label,
        }
    }
}

impl Display for HostAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a [`HostAlias`] to the base URL requests are made against.
///
/// Every base URL ends with `/` so paths can be appended verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostMap {
    /// `https://{alias}.{domain}/`, the production layout.
    Subdomains {
        /// Top-level domain, [`DOMAIN`] by default.
        domain: String,
    },
    /// `{origin}/{alias}/`. Routes every alias to a single local server,
    /// keeping the alias visible as the first path segment.
    Origin {
        /// Scheme, host and port of the server.
        origin: Url,
    },
}

impl Default for HostMap {
    fn default() -> Self {
        HostMap::Subdomains {
            domain: DOMAIN.to_string(),
        }
    }
}

impl HostMap {
    /// Base URL for `alias`, with a trailing slash.
    pub fn base_url(&self, alias: &HostAlias) -> Result<Url, url::ParseError> {
        match self {
            HostMap::Subdomains { domain } => Url::parse(&format!("https://{alias}.{domain}/")),
            HostMap::Origin { origin } => {
                let base = origin.as_str().trim_end_matches('/');
                Url::parse(&format!("{base}/{alias}/"))
            }
        }
    }

    /// Full URL for `path` on `alias`.
    ///
    /// The path is appended as-is, including any literal query string it
    /// carries; it is not normalized.
    pub fn url(&self, alias: &HostAlias, path: &str) -> Result<Url, url::ParseError> {
        let base = self.base_url(alias)?;
        Url::parse(&format!("{base}{}", path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_subdomains() {
        let map = HostMap::default();
        assert_eq!(
            map.url(&HostAlias::Api, "tells/").unwrap().as_str(),
            "https://api.tellonym.me/tells/"
        );
        assert_eq!(
            map.url(&HostAlias::Chat, "chats/").unwrap().as_str(),
            "https://chat-api.tellonym.me/chats/"
        );
        assert_eq!(
            map.base_url(&HostAlias::UserImages).unwrap().as_str(),
            "https://userimg.tellonym.me/"
        );
    }

    #[test]
    fn origin_prefixes_alias() {
        let map = HostMap::Origin {
            origin: Url::parse("http://127.0.0.1:4000").unwrap(),
        };
        assert_eq!(
            map.url(&HostAlias::Chat, "chat/send").unwrap().as_str(),
            "http://127.0.0.1:4000/chat-api/chat/send"
        );
    }

    #[test]
    fn literal_query_is_kept() {
        let map = HostMap::default();
        let url = map.url(&HostAlias::Api, "answers/7?oldestId=9/").unwrap();
        assert_eq!(url.path(), "/answers/7");
        assert_eq!(url.query(), Some("oldestId=9/"));
    }
}
