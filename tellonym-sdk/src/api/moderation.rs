use serde_json::json;
use tellonym_common::models::BlockListElement;

use crate::{RequestSpec, Result, TellonymSession};

impl TellonymSession {
    /// Accounts and tells this account blocked.
    pub async fn blocks(&self) -> Result<Vec<BlockListElement>> {
        self.fetch_field(RequestSpec::get("blocks/list"), "blocks", "Failed to get blocks").await
    }

    /// Block `user_id`.
    pub async fn block_user(&self, user_id: u64) -> Result<()> {
        let spec = RequestSpec::post("blocks/create").json(&json!({ "profileId": user_id }))?;
        self.fetch_unit(spec).await
    }

    /// Lift a block on `user_id`.
    pub async fn unblock_user(&self, user_id: u64) -> Result<()> {
        let spec = RequestSpec::post("blocks/destroy").json(&json!({ "profileId": user_id }))?;
        self.fetch_unit(spec).await
    }
}
