use serde::Serialize;
use tellonym_common::models::{MaybeAd, SentTell, Tell};

use crate::{RequestSpec, Result, TellonymSession};

/// `senderStatus` the server expects for anonymous and signed tells.
const ANONYMOUS_SENDER: u8 = 2;
const PUBLIC_SENDER: u8 = 0;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewTell<'a> {
    user_id: u64,
    tell: &'a str,
    content_type: &'static str,
    sender_status: u8,
    #[serde(rename = "referalId", skip_serializing_if = "Option::is_none")]
    referral_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delay_in_minutes: Option<u32>,
}

impl TellonymSession {
    /// Received tells, interleaved with ads.
    ///
    /// With `older_than`, returns the page of tells older than that id. An id
    /// of `0` is treated as no id.
    pub async fn tells(&self, older_than: Option<u64>) -> Result<Vec<MaybeAd<Tell>>> {
        let spec = match older_than.filter(|id| *id != 0) {
            Some(id) => RequestSpec::get(format!("tells/olderthanid/{id}")).query("oldestId", id),
            None => RequestSpec::get("tells/"),
        };
        self.fetch_field(spec, "tells", "Failed to get tells").await
    }

    /// Tells received through communities.
    pub async fn community_received_tells(&self) -> Result<Vec<MaybeAd<Tell>>> {
        self.fetch_field(
            RequestSpec::get("communities/tells/received"),
            "tells",
            "Failed to get community recived tells",
        )
        .await
    }

    /// Tells this account sent, with their answers once given.
    pub async fn sent_tells(&self) -> Result<Vec<SentTell>> {
        self.fetch_field(
            RequestSpec::get("senttells"),
            "sentTells",
            "Failed to get community sent tells",
        )
        .await
    }

    /// Send a tell to `user_id`.
    ///
    /// `post_id` ties the tell to one of the recipient's posts and
    /// `delay_in_minutes` schedules it.
    pub async fn send_tell(
        &self,
        user_id: u64,
        content: &str,
        anonymous: bool,
        post_id: Option<u64>,
        delay_in_minutes: Option<u32>,
    ) -> Result<()> {
        let body = NewTell {
            user_id,
            tell: content,
            content_type: "CUSTOM",
            sender_status: if anonymous {
                ANONYMOUS_SENDER
            } else {
                PUBLIC_SENDER
            },
            referral_id: post_id.filter(|id| *id != 0),
            delay_in_minutes: delay_in_minutes.filter(|minutes| *minutes != 0),
        };
        self.fetch_unit(RequestSpec::post("tells/create").json(&body)?).await
    }
}
