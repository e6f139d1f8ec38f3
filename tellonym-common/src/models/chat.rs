use serde::{Deserialize, Serialize};

use super::User;

/// A single chat message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    pub id: u64,
    pub chat_id: u64,
    pub user_id: u64,
    pub content: String,
    pub is_seen: bool,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: i64,
}

/// A chat participant or chat suggestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatUser {
    #[serde(flatten)]
    pub user: User,
    pub is_able_to_chat: bool,
    pub is_active: bool,
    pub is_blocked: bool,
    pub is_blocked_by: bool,
    pub is_followed_by: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Chat {
    pub id: u64,
    pub last_message: Option<Message>,
    #[serde(alias = "partecipants")]
    pub participants: Vec<ChatUser>,
}

/// Body of the chat list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatList {
    pub unread_count: u64,
    pub chats: Vec<Chat>,
}
