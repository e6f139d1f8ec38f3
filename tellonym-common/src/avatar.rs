//! Avatar references and their file names on the image host.

use serde::{Deserialize, Serialize};

/// Something that identifies an avatar image.
///
/// Profiles carry a ready-made `avatarFileName` (`<id>_<hash>.jpg`); other
/// payloads only carry the id and hash halves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvatarRef {
    /// A complete file name, as found in `avatarFileName`.
    FileName(String),
    /// The id/hash pair the file name is made of.
    Parts {
        /// Avatar id.
        id: String,
        /// Avatar hash.
        hash: String,
    },
}

impl AvatarRef {
    /// Build from an id and hash.
    pub fn from_parts(id: impl ToString, hash: impl Into<String>) -> Self {
        AvatarRef::Parts {
            id: id.to_string(),
            hash: hash.into(),
        }
    }

    /// File name on the image host: the name itself, or `<id>_<hash>`.
    pub fn file_name(&self) -> String {
        match self {
            AvatarRef::FileName(name) => name.clone(),
            AvatarRef::Parts { id, hash } => format!("{id}_{hash}"),
        }
    }
}

impl From<&str> for AvatarRef {
    fn from(name: &str) -> Self {
        AvatarRef::FileName(name.to_string())
    }
}

impl From<String> for AvatarRef {
    fn from(name: String) -> Self {
        AvatarRef::FileName(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_from_parts() {
        let avatar = AvatarRef::from_parts(1234, "abcd");
        assert_eq!(avatar.file_name(), "1234_abcd");
    }

    #[test]
    fn file_name_passthrough() {
        let avatar = AvatarRef::from("1234_abcd.jpg");
        assert_eq!(avatar.file_name(), "1234_abcd.jpg");
    }
}
