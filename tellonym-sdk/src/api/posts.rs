use serde::Serialize;
use serde_json::json;
use tellonym_common::models::{Answer, AnswerMedia, MaybeAd, Tell};

use crate::{RequestSpec, Result, TellonymSession};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewAnswer<'a> {
    tell_id: u64,
    answer: &'a str,
    is_current_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<&'a AnswerMedia>,
}

impl TellonymSession {
    /// One page of a user's answers, starting below `oldest_id`.
    pub async fn answers(&self, user_id: u64, oldest_id: u64) -> Result<Vec<MaybeAd<Answer>>> {
        // The server expects the trailing slash after the query.
        let spec = RequestSpec::get(format!("answers/{user_id}?oldestId={oldest_id}/"));
        self.fetch_field(spec, "answers", "Failed to get answers").await
    }

    /// Answer a received tell, optionally with an uploaded picture.
    pub async fn answer_tell(
        &self,
        tell_id: u64,
        answer: &str,
        media: Option<&AnswerMedia>,
        is_current_user: bool,
    ) -> Result<Answer> {
        let body = NewAnswer {
            tell_id,
            answer,
            is_current_user,
            media,
        };
        let spec = RequestSpec::post("answers/create").json(&body)?;
        self.fetch_field(spec, "answer", "Failed to answer tell").await
    }

    /// Hide who sent the tell behind an answer.
    pub async fn delete_sender_status(&self, answer_id: u64) -> Result<()> {
        let spec = RequestSpec::delete(format!("answers/id/{answer_id}/senderStatus"))
            .json(&json!({ "answerId": answer_id }))?;
        self.fetch_unit(spec).await
    }

    /// `true` iff the server answered `"ok"`.
    pub async fn like_answer(&self, answer_id: u64) -> Result<bool> {
        let spec = RequestSpec::post("likes/create").json(&json!({ "answerId": answer_id }))?;
        self.fetch_ok(spec, "Failed to like answer").await
    }

    /// `true` iff the server answered `"ok"`.
    pub async fn unlike_answer(&self, answer_id: u64) -> Result<bool> {
        let spec = RequestSpec::post("likes/destroy").json(&json!({ "answerId": answer_id }))?;
        self.fetch_ok(spec, "Failed to unlike answer").await
    }

    // === Posts ===

    /// Publish a post on the own profile.
    pub async fn create_post(&self, content: &str) -> Result<Tell> {
        let spec = RequestSpec::post("posts/create").json(&json!({ "content": content }))?;
        self.fetch_field(spec, "post", "Failed to create post").await
    }

    /// Pin a post to the top of the own profile.
    pub async fn pin_post(&self, post_id: u64) -> Result<()> {
        let spec = RequestSpec::post(format!("posts/id/{post_id}/pin"))
            .json(&json!({ "postId": post_id }))?;
        self.fetch_unit(spec).await
    }

    /// Delete one of the own posts.
    pub async fn delete_post(&self, post_id: u64) -> Result<()> {
        let spec =
            RequestSpec::delete(format!("posts/{post_id}")).json(&json!({ "postId": post_id }))?;
        self.fetch_unit(spec).await
    }
}
