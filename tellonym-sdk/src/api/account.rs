use serde_json::{Value, json};
use tellonym_common::models::{Account, ChallengeEmoji, CheckUpdates, Emoji};

use crate::session::core::{ACCOUNT_INFO_FAILED, ACCOUNT_INFO_PATH};
use crate::{RequestSpec, Result, TellonymSession};

const BADWORDS_PATH: &str = "accounts/settings/badwords";

impl TellonymSession {
    /// The signed-in account, fetched fresh.
    pub async fn account_info(&self) -> Result<Account> {
        self.fetch_whole(RequestSpec::get(ACCOUNT_INFO_PATH), ACCOUNT_INFO_FAILED).await
    }

    /// Newest ids and unread counters.
    pub async fn check_updates(&self) -> Result<CheckUpdates> {
        self.fetch_whole(RequestSpec::get("check/updates/"), "Failed to check updates").await
    }

    /// Service announcements.
    pub async fn announcements(&self) -> Result<Vec<Value>> {
        self.fetch_field(
            RequestSpec::get("announcements/"),
            "announcements",
            "Failed to get announcements",
        )
        .await
    }

    /// Notification entries, newest first.
    pub async fn notifications(&self) -> Result<Vec<Value>> {
        self.fetch_field(
            RequestSpec::get("notifications/"),
            "notifications",
            "Failed to get notifications",
        )
        .await
    }

    /// Ids of the current notifications.
    pub async fn notification_ids(&self) -> Result<Vec<Value>> {
        self.fetch_field(
            RequestSpec::get("notifications/ids"),
            "notifications",
            "Failed to get notifications ids",
        )
        .await
    }

    /// Experiments enabled for this account, in whatever shape the server uses.
    pub async fn experiments(&self) -> Result<Value> {
        self.fetch_field(
            RequestSpec::get("info/experiments"),
            "active",
            "Failed to get experiments",
        )
        .await
    }

    /// Words filtered out of incoming tells.
    pub async fn account_badwords(&self) -> Result<Vec<Value>> {
        self.fetch_field(
            RequestSpec::get(BADWORDS_PATH),
            "badwords",
            "Failed to get settings badwords",
        )
        .await
    }

    /// Replace the bad-word filter list.
    pub async fn update_account_badwords(&self, badwords: &[String]) -> Result<()> {
        let spec = RequestSpec::put(BADWORDS_PATH).json(&json!({ "badwords": badwords }))?;
        self.fetch_unit(spec).await
    }

    // === Status emojis ===

    /// Status emojis and whether each is owned.
    pub async fn my_emojis(&self) -> Result<Vec<Emoji>> {
        self.fetch_field(
            RequestSpec::get("accounts/statusemoji"),
            "emojis",
            "Failed to get emojis",
        )
        .await
    }

    /// Progress towards each emoji that can still be unlocked.
    pub async fn emoji_challenges(&self) -> Result<Vec<ChallengeEmoji>> {
        self.fetch_field(
            RequestSpec::get("accounts/challenges/statusemoji"),
            "achievableEmojis",
            "Failed to get emoji challenges",
        )
        .await
    }

    /// Unlock a status emoji. `true` iff the server answered `"ok"`.
    pub async fn unlock_status_emoji(&self, emoji_id: u64) -> Result<bool> {
        let spec =
            RequestSpec::post("accounts/statusemoji/unlock").json(&json!({ "id": emoji_id }))?;
        self.fetch_ok(spec, "Failed to unlock emoji").await
    }
}
