use serde_json::{Value, json};
use tellonym_common::models::Follower;

use crate::{RequestSpec, Result, TellonymSession};

const FOLLOWERS_FAILED: &str = "Failed to get followers";
const FOLLOWINGS_FAILED: &str = "Failed to get following";

impl TellonymSession {
    /// Follow `user_id`, optionally without revealing who follows.
    ///
    /// `true` iff the server answered `"ok"`.
    pub async fn follow_user(&self, user_id: u64, anonymous: bool) -> Result<bool> {
        let spec = RequestSpec::post("followings/create")
            .json(&json!({ "userId": user_id, "isFollowingAnonymous": anonymous }))?;
        self.fetch_ok(spec, "Failed to follow user").await
    }

    /// `true` iff the server answered `"ok"`.
    pub async fn unfollow_user(&self, user_id: u64) -> Result<bool> {
        let spec = RequestSpec::post("followings/destroy").json(&json!({ "userId": user_id }))?;
        self.fetch_ok(spec, "Failed to unfollow user").await
    }

    /// Turn notifications about `user_id`'s answers on or off.
    pub async fn set_notifications_for_user(&self, user_id: u64, enabled: bool) -> Result<bool> {
        let spec = RequestSpec::post("followings/notifications")
            .json(&json!({ "userId": user_id, "notification": u8::from(enabled) }))?;
        self.fetch_ok(spec, "Failed to set notifications").await
    }

    // === Listings ===

    /// Accounts following this one.
    pub async fn my_followers(&self) -> Result<Vec<Follower>> {
        self.followers_at("followers/list".into()).await
    }

    /// Accounts this one follows.
    pub async fn my_followings(&self) -> Result<Vec<Follower>> {
        self.followings_at("followings/list".into()).await
    }

    /// Followers of the account with this id.
    pub async fn followers_by_id(&self, user_id: u64) -> Result<Vec<Follower>> {
        self.followers_at(format!("followers/id/{user_id}")).await
    }

    /// Followings of the account with this id.
    pub async fn followings_by_id(&self, user_id: u64) -> Result<Vec<Follower>> {
        self.followings_at(format!("followings/id/{user_id}")).await
    }

    /// Followers of the account with this username.
    pub async fn followers_by_name(&self, username: &str) -> Result<Vec<Follower>> {
        self.followers_at(format!("followers/name/{username}")).await
    }

    /// Followings of the account with this username.
    pub async fn followings_by_name(&self, username: &str) -> Result<Vec<Follower>> {
        self.followings_at(format!("followings/name/{username}")).await
    }

    /// Communities `user_id` follows.
    pub async fn following_communities(&self, user_id: u64) -> Result<Vec<Value>> {
        let spec = RequestSpec::get("communities/followings").query("userId", user_id);
        self.fetch_field(spec, "communities", "Failed to get following communities").await
    }

    async fn followers_at(&self, path: String) -> Result<Vec<Follower>> {
        self.fetch_field(RequestSpec::get(path), "followers", FOLLOWERS_FAILED).await
    }

    async fn followings_at(&self, path: String) -> Result<Vec<Follower>> {
        self.fetch_field(RequestSpec::get(path), "followings", FOLLOWINGS_FAILED).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::api::test_support::session;
    use crate::errors::Error;

    #[tokio::test]
    async fn follow_user_body_and_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/followings/create")
                    .header("content-type", "application/json")
                    .json_body(json!({ "userId": 42, "isFollowingAnonymous": false }));
                then.status(200).body("\"ok\"");
            })
            .await;

        assert!(session(&server).follow_user(42, false).await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_text_is_missing() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/followings/destroy");
                then.status(200).body("");
            })
            .await;

        let err = session(&server).unfollow_user(42).await.unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                operation: "Failed to unfollow user",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn notifications_flag_is_numeric() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/followings/notifications")
                    .json_body(json!({ "userId": 8, "notification": 1 }));
                then.status(200).body("\"ok\"");
            })
            .await;

        assert!(session(&server).set_notifications_for_user(8, true).await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn listings_by_name_and_id() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/followers/name/alice");
                then.status(200).json_body(json!({
                    "followers": [{ "id": 1, "username": "bob", "isFollowed": true }]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/followings/id/1");
                then.status(200).json_body(json!({ "followers": [] }));
            })
            .await;

        let session = session(&server);
        let followers = session.followers_by_name("alice").await.unwrap();
        assert_eq!(followers[0].user.username, "bob");
        assert!(followers[0].is_followed);

        let err = session.followings_by_id(1).await.unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                operation: "Failed to get following",
                field: "followings"
            }
        ));
    }

    #[tokio::test]
    async fn communities_use_query() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/communities/followings")
                    .query_param("userId", "5");
                then.status(200).json_body(json!({ "communities": [{ "id": "c" }] }));
            })
            .await;

        let communities = session(&server).following_communities(5).await.unwrap();
        assert_eq!(communities, vec![json!({ "id": "c" })]);
    }
}
