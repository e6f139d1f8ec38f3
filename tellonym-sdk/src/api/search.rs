use tellonym_common::models::{SearchHistoryUser, SearchResultUser};

use crate::{RequestSpec, Result, TellonymSession};

impl TellonymSession {
    /// Search accounts by username or display name.
    pub async fn search_users(&self, query: &str) -> Result<Vec<SearchResultUser>> {
        let spec = RequestSpec::get("search/users")
            .query("searchString", query)
            .query("term", query);
        self.fetch_field(spec, "results", "Failed to search users").await
    }

    /// Profiles visited from search.
    pub async fn search_history(&self) -> Result<Vec<SearchHistoryUser>> {
        self.fetch_field(
            RequestSpec::get("search/history/"),
            "searchHistory",
            "Failed to get search history",
        )
        .await
    }
}
