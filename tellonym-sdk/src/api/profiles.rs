use serde_json::Value;
use tellonym_common::models::{Profile, SuggestedContact, SuggestedPerson};

use crate::{RequestSpec, Result, TellonymSession};

const PROFILE_FAILED: &str = "Failed to get profile";

impl TellonymSession {
    /// Public profile of the account with this username.
    pub async fn profile_by_name(&self, username: &str) -> Result<Profile> {
        let spec = RequestSpec::get(format!("profiles/name/{username}/"));
        self.fetch_whole(spec, PROFILE_FAILED).await
    }

    /// Public profile of the account with this id.
    pub async fn profile_by_id(&self, user_id: u64) -> Result<Profile> {
        let spec = RequestSpec::get(format!("profiles/id/{user_id}/"));
        self.fetch_whole(spec, PROFILE_FAILED).await
    }

    // === Suggestions ===

    /// Accounts the service suggests following.
    pub async fn people_suggestions(&self) -> Result<Vec<SuggestedPerson>> {
        self.fetch_field(
            RequestSpec::get("suggestions/people/"),
            "peopleSuggestions",
            "Failed to get people suggestions",
        )
        .await
    }

    /// Suggested friends.
    pub async fn friends_suggestions(&self) -> Result<Vec<Value>> {
        self.fetch_field(
            RequestSpec::get("suggestions/friends/"),
            "friends",
            "Failed to get friends suggestions",
        )
        .await
    }

    /// Accounts matched from the uploaded contact book.
    pub async fn contacts_suggestions(&self) -> Result<Vec<SuggestedContact>> {
        self.fetch_field(
            RequestSpec::get("suggestions/contacts/"),
            "contactsSuggestions",
            "Failed to get contacts suggestions",
        )
        .await
    }
}
