use serde_json::json;
use tellonym_common::models::{Chat, ChatUser, Message};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::{HostAlias, RequestSpec, Result, TellonymSession};

/// `type` of a plain text message.
const TEXT_MESSAGE: u8 = 1;

impl TellonymSession {
    /// Open chats, most recent first.
    pub async fn chats(&self) -> Result<Vec<Chat>> {
        let spec = RequestSpec::get("chats/").host(HostAlias::Chat);
        self.fetch_field(spec, "chats", "Failed to get chats").await
    }

    /// Accounts the chat host suggests writing to.
    pub async fn chat_suggestions(&self) -> Result<Vec<ChatUser>> {
        let spec = RequestSpec::get("chat/suggestions").host(HostAlias::Chat);
        self.fetch_whole(spec, "Failed to get chat suggestions").await
    }

    /// Send a text message to `user_id` and return it as stored.
    pub async fn send_message(&self, user_id: u64, content: &str) -> Result<Message> {
        let spec = RequestSpec::post("chat/send")
            .host(HostAlias::Chat)
            .json(&json!({ "userId": user_id, "content": content, "type": TEXT_MESSAGE }))?;
        self.fetch_field(spec, "data", "Failed to send message").await
    }

    /// Mark a chat as read up to `time`.
    pub async fn read_chat(&self, chat_id: u64, time: SystemTime) -> Result<()> {
        let time_seen = time
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        let spec = RequestSpec::post("chat/seen")
            .host(HostAlias::Chat)
            .json(&json!({ "chatId": chat_id, "timeSeen": time_seen }))?;
        self.fetch_unit(spec).await
    }

    /// Messages exchanged with `user_id`.
    pub async fn messages(&self, user_id: u64) -> Result<Vec<Message>> {
        let spec = RequestSpec::get("chat/messages")
            .host(HostAlias::Chat)
            .query("userId", user_id);
        self.fetch_field(spec, "messages", "Failed to get messages").await
    }
}
