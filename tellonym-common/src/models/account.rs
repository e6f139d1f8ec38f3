use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::UserProfile;

/// Client feature switches attached to the own account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    pub has_feed_ads: bool,
    pub should_upload_contacts: bool,
    pub reset_contacts_at: Option<String>,
    pub has_result_ads: bool,
    pub has_tells_ads: bool,
    pub is_avatar_clickable: bool,
}

/// The signed-in user's own account, as returned by `accounts/myself/`.
///
/// Only the fields a client commonly needs are typed. The account carries
/// dozens of notification and safety toggles; read them from the raw value
/// if you need them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    /// Public profile fields, including id and username.
    #[serde(flatten)]
    pub profile: UserProfile,
    pub email: Option<String>,
    pub lang: Option<String>,
    pub main_language: Option<i64>,
    pub page_id: Option<String>,
    pub twitter_username: Option<String>,
    pub instagram_username: Option<String>,
    pub created_at: Option<String>,
    pub theme: Option<String>,
    pub is_searchable: bool,
    pub last_active_at: Option<String>,
    pub phone_prefix: Option<String>,
    pub phone_number: Option<String>,
    pub is_tells_only_from_registered: bool,
    pub is_under16: bool,
    pub has_password: bool,
    pub gender: Option<String>,
    pub birthdate: Option<String>,
    pub available_badges: Vec<i64>,
    pub premium_until: Option<String>,
    pub is_premium: bool,
    pub points_karma: i64,
    pub config: UserConfig,
    pub info: Value,
}

impl Account {
    /// Numeric account id.
    pub fn id(&self) -> u64 {
        self.profile.user.id
    }

    /// Account handle.
    pub fn username(&self) -> &str {
        &self.profile.user.username
    }
}

/// A status emoji and whether the account owns it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Emoji {
    pub id: u64,
    pub emoji: i64,
    #[serde(rename = "type")]
    pub kind: i64,
    pub is_owned: bool,
}

/// Progress towards unlocking a status emoji.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeEmoji {
    pub emoji: i64,
    pub current: i64,
    pub goal: i64,
    pub is_achieved: bool,
}

/// Newest ids and unread counters, polled by clients to detect new content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckUpdates {
    pub newest_feed_id: Option<u64>,
    pub newest_notification_id: Option<u64>,
    pub newest_tell_id: Option<u64>,
    pub notifications_sort_id: Option<u64>,
    pub feed_sort_id: Option<u64>,
    pub tells_sort_id: Option<u64>,
    pub new_match_items_amount: u64,
    pub new_liked_by_items_amount: u64,
    pub newest_answered_sent_tell_id: Option<u64>,
    pub unread_count: u64,
    pub newest_message_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn account_reads_nested_user_fields() {
        let raw = json!({
            "id": 42,
            "username": "me",
            "email": "me@example.com",
            "isPremium": true,
            "config": { "hasFeedAds": true },
            "twitterUsername": null,
        });

        let account: Account = serde_json::from_value(raw).unwrap();
        assert_eq!(account.id(), 42);
        assert_eq!(account.username(), "me");
        assert_eq!(account.email.as_deref(), Some("me@example.com"));
        assert!(account.is_premium);
        assert!(account.config.has_feed_ads);
        assert_eq!(account.twitter_username, None);
    }
}
