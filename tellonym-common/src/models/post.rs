use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;

/// Either a real item or an ad the server interleaved into a list.
///
/// Ads are recognized by their mandatory `adType` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeAd<T> {
    Ad(Box<TellAd>),
    Item(T),
}

impl<T> MaybeAd<T> {
    /// The item, unless this entry is an ad.
    pub fn item(&self) -> Option<&T> {
        match self {
            MaybeAd::Item(item) => Some(item),
            MaybeAd::Ad(_) => None,
        }
    }

    /// Consume and return the item, unless this entry is an ad.
    pub fn into_item(self) -> Option<T> {
        match self {
            MaybeAd::Item(item) => Some(item),
            MaybeAd::Ad(_) => None,
        }
    }
}

/// The author of a tell. Empty for anonymous tells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sender {
    pub id: Option<u64>,
    pub username: Option<String>,
    pub avatar_file_name: Option<String>,
    pub is_verified: Option<bool>,
}

impl Sender {
    /// True for anonymous tells, where the server sends `{}`.
    pub fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Likes {
    pub count: u64,
    pub is_liked: bool,
    pub is_liked_by_sender: bool,
    pub preview_users: Vec<Value>,
}

/// An image attached to an answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TellMedia {
    #[serde(rename = "isNSFW")]
    pub is_nsfw: bool,
    pub thumb_small_url: Option<String>,
    #[serde(alias = "thubUrl")]
    pub thumb_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: i64,
    pub url: Option<String>,
}

/// Media to attach when answering a tell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerMedia {
    #[serde(rename = "isNSFW")]
    pub is_nsfw: bool,
    pub file_name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
}

/// A user as embedded in feed items and sent tells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TellUser {
    #[serde(flatten)]
    pub user: User,
    pub is_followed: bool,
    pub is_followed_by: bool,
    pub is_able_to_chat: bool,
}

/// A received tell (a question).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tell {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: Value,
    pub created_at: Option<String>,
    pub sender: Sender,
    pub tell: String,
    pub sender_status: Value,
    pub is_from_tellonym: bool,
    pub is_from_community: bool,
    pub is_welcome_tell: bool,
    pub is_seen: bool,
    pub sender_hint: i64,
    pub is_inappropriate: bool,
    pub points_karma: i64,
    pub sort_id: Value,
}

/// An answered tell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answer {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: Value,
    pub created_at: Option<String>,
    pub sender: Sender,
    pub tell: String,
    pub sender_status: Value,
    pub answer: String,
    pub is_current_user_tell_sender: bool,
    pub is_liked: bool,
    pub likes: Likes,
    pub likes_count: u64,
    pub points_karma: i64,
    pub media: Vec<TellMedia>,
    pub user_id: u64,
}

/// An answer as it shows up in the feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedElement {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: Value,
    pub created_at: Option<String>,
    pub sender: Sender,
    pub tell: String,
    pub sender_status: Value,
    pub origin: Option<String>,
    pub answer: String,
    pub likes_count: u64,
    pub likes: Likes,
    pub is_liked: bool,
    pub user: TellUser,
    pub is_current_user_tell_sender: bool,
    pub media: Vec<TellMedia>,
    pub sort_id: Value,
}

/// A tell the signed-in user sent, answered or not.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentTell {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: Value,
    pub created_at: Option<String>,
    pub sender: Sender,
    pub tell: String,
    pub sender_status: Value,
    pub sort_id: Value,
    pub user: TellUser,
    pub tell_id: Option<u64>,
    pub answer: Option<String>,
    pub likes_count: Option<u64>,
    pub likes: Option<Likes>,
    pub is_current_user_tell_sender: Option<bool>,
    pub media: Option<Vec<TellMedia>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSlot {
    pub id: String,
    pub size: Vec<i64>,
}

/// An ad slot interleaved into tells or answers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TellAd {
    pub ad_type: String,
    #[serde(default)]
    pub ad_id: Option<String>,
    #[serde(default)]
    pub ad_sizes: Vec<Vec<i64>>,
    #[serde(default)]
    pub aps_slots: Vec<AppSlot>,
    #[serde(default)]
    pub load_offset: i64,
    #[serde(default)]
    pub prebid_ad_id: Option<String>,
    #[serde(default)]
    pub should_load_lazily: bool,
    #[serde(default)]
    pub should_use_hoc: bool,
    #[serde(default)]
    pub ad_position: i64,
    #[serde(default)]
    pub has_unlimited: bool,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub ad_exp_id: Option<String>,
    #[serde(default)]
    pub targeting: BTreeMap<String, i64>,
    #[serde(default)]
    pub uid: Option<String>,
}
