use serde_json::Value;
use tellonym_common::models::{FeedElement, MaybeAd};

use crate::{RequestSpec, Result, TellonymSession};

impl TellonymSession {
    /// Answers from followed accounts, interleaved with ads.
    pub async fn feed_list(&self) -> Result<Vec<MaybeAd<FeedElement>>> {
        self.fetch_field(RequestSpec::get("feed/list/"), "feed", "Failed to get feed").await
    }

    /// Featured answers.
    pub async fn feed_featured(&self) -> Result<Vec<MaybeAd<FeedElement>>> {
        self.fetch_field(
            RequestSpec::get("feed/featured/"),
            "feedFeatured",
            "Failed to get feed",
        )
        .await
    }

    /// Ids of the entries currently in the feed.
    pub async fn feed_ids(&self) -> Result<Vec<Value>> {
        self.fetch_field(RequestSpec::get("feed/ids"), "feed", "Failed to get feed ids").await
    }

    /// Trending posts. The body is returned as-is.
    pub async fn trending_posts(&self) -> Result<Value> {
        self.fetch_whole(
            RequestSpec::get("posts/trending/"),
            "Failed to get trending posts",
        )
        .await
    }
}
