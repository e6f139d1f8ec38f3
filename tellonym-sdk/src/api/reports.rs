use serde_json::{Map, Value};

use crate::{RequestSpec, Result, TellonymSession};

/// What a report points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportTarget {
    /// A received tell.
    Tell(u64),
    /// A published answer.
    Answer(u64),
}

impl ReportTarget {
    fn body(self) -> Map<String, Value> {
        let (key, id) = match self {
            ReportTarget::Tell(id) => ("tellId", id),
            ReportTarget::Answer(id) => ("answerId", id),
        };
        let mut body = Map::new();
        body.insert(key.into(), id.into());
        body
    }
}

impl TellonymSession {
    /// Report a tell or an answer. `reason` is the numeric reason code the
    /// web client offers.
    pub async fn create_report(&self, target: ReportTarget, reason: u32) -> Result<()> {
        let mut body = target.body();
        body.insert("reason".into(), reason.into());
        let spec = RequestSpec::post("reports/create").json(&body)?;
        self.fetch_unit(spec).await
    }

    /// Withdraw a report.
    pub async fn delete_report(&self, target: ReportTarget) -> Result<()> {
        let spec = RequestSpec::post("reports/destroy").json(&target.body())?;
        self.fetch_unit(spec).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::ReportTarget;
    use crate::api::test_support::session;

    #[tokio::test]
    async fn report_keys_follow_target() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/reports/create")
                    .json_body(json!({ "tellId": 4, "reason": 2 }));
                then.status(200).body("");
            })
            .await;
        let destroy = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/reports/destroy")
                    .json_body(json!({ "answerId": 5 }));
                then.status(200).body("");
            })
            .await;

        let session = session(&server);
        session.create_report(ReportTarget::Tell(4), 2).await.unwrap();
        session.delete_report(ReportTarget::Answer(5)).await.unwrap();
        create.assert_async().await;
        destroy.assert_async().await;
    }
}
