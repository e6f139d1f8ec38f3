use serde::{Deserialize, Serialize};

use super::{Answer, MaybeAd};

/// Fields every user-shaped object carries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Numeric user id.
    pub id: u64,
    /// Optional user kind discriminator.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
    /// `<id>_<hash>.jpg`, or null when the user has no avatar.
    pub avatar_file_name: Option<String>,
    /// Status emoji id.
    pub status_emoji: i64,
    /// Verified badge.
    pub is_verified: bool,
    /// Unique handle.
    pub username: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// A link shown on a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserLink {
    pub id: u64,
    pub status: i64,
    #[serde(rename = "type")]
    pub kind: i64,
    pub link: String,
}

/// One entry of a profile's avatar gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAvatar {
    /// Avatar file name.
    pub avatar_file_name: Option<String>,
    /// Position in the gallery.
    pub position: i64,
}

/// Public profile data shared by the own account and other users' profiles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Base user fields.
    #[serde(flatten)]
    pub user: User,
    pub about_me: Option<String>,
    pub location: Option<String>,
    pub anonymous_follower_count: u64,
    pub answer_count: u64,
    /// Latest answers. Ads may be interleaved.
    pub answers: Vec<MaybeAd<Answer>>,
    pub avatars: Vec<UserAvatar>,
    pub badge: i64,
    pub follower_count: u64,
    pub following_count: u64,
    pub follow_notification_type: i64,
    pub is_able_to_chat: bool,
    pub likes_count: u64,
    pub link_data: Vec<UserLink>,
    pub pinned_posts: Vec<Answer>,
    pub tell_count: u64,
    pub tint_color: i64,
}

/// Another user's profile, as seen by the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Public profile fields.
    #[serde(flatten)]
    pub profile: UserProfile,
    pub country_code: Option<String>,
    pub is_active: bool,
    pub is_blocked: bool,
    pub is_blocked_by: bool,
    pub is_followed: bool,
    pub is_followed_by: bool,
}
