use serde::{Deserialize, Serialize};

use super::User;

/// An entry of a followers or followings list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Follower {
    #[serde(flatten)]
    pub user: User,
    pub is_active: bool,
    pub is_blocked: bool,
    pub is_blocked_by: bool,
    pub is_followed: bool,
    pub is_followed_by: bool,
    pub about_me: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedPerson {
    #[serde(flatten)]
    pub user: User,
    pub user_id: u64,
    pub about_me: Option<String>,
    pub is_active: bool,
    pub is_followed: bool,
    pub is_from_contact_book: bool,
    pub is_following: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedContact {
    #[serde(flatten)]
    pub user: User,
    pub user_id: u64,
    /// Name from the uploader's contact book.
    pub cb_name: Option<String>,
    pub about_me: Option<String>,
    pub is_followed: bool,
    pub is_active: bool,
    pub instagram_link: Option<String>,
    pub twitter_link: Option<String>,
}

/// A profile the signed-in user visited recently.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchHistoryUser {
    #[serde(flatten)]
    pub user: User,
    pub visited_user_id: u64,
    pub is_active: bool,
    pub is_blocked: bool,
    pub is_blocked_by: bool,
    pub is_following: bool,
    pub instagram_link: Option<String>,
    pub twitter_link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultUser {
    #[serde(flatten)]
    pub user: User,
    pub is_active: bool,
    pub is_blocked: bool,
    pub is_blocked_by: bool,
    pub is_following: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockedUser {
    pub id: u64,
    pub username: String,
    pub display_name: Option<String>,
    pub about_me: Option<String>,
    pub avatar_file_name: Option<String>,
    pub is_verified: bool,
}

/// An entry of the block list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockListElement {
    pub id: u64,
    pub created_at: Option<String>,
    /// The tell that caused the block, if any.
    pub tel: Option<String>,
    #[serde(rename = "type")]
    pub kind: i64,
    pub tell_id: Option<u64>,
    pub user: BlockedUser,
}
