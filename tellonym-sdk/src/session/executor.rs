//! The single request path every endpoint goes through.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::core::TellonymSession;
use crate::client::request::{Decode, RequestSpec, bearer, merge_headers};
use crate::errors::{AuthError, RequestError, Result};
use crate::response::{Decoded, is_ok_token, unwrap_field, unwrap_whole};
use crate::cross_log;

impl TellonymSession {
    /// Perform one authenticated call and return its decoded body.
    ///
    /// Fails with [`AuthError::NotAuthenticated`] before any network I/O if
    /// the session is not logged in. Otherwise exactly one request is made;
    /// failures are never retried. The first matching rule decides the outcome:
    /// 1. the body could not be decoded per [`RequestSpec::decode`];
    /// 2. the decoded JSON carries a non-null `err` envelope, whatever the status;
    /// 3. the status is not `200 OK`;
    /// 4. success.
    ///
    /// Failures are logged when debug is on.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Decoded> {
        let Some(token) = self.credential.as_deref().filter(|_| self.is_authenticated()) else {
            return Err(self.fail(AuthError::NotAuthenticated.into()));
        };

        self.send(token, spec).await.map_err(|e| self.fail(e))
    }

    /// Sign `spec` with `token` and perform it. No auth guard, no logging.
    pub(crate) async fn send(&self, token: &str, spec: RequestSpec) -> Result<Decoded> {
        let url = spec.url(&self.client.hosts)?;
        let headers = merge_headers(&self.client.base_headers, Some(bearer(token)?), &spec.headers);

        cross_log!(debug, "{} {} ({})", spec.method, url.path(), spec.host);

        let mut request = self
            .client
            .http
            .request(spec.method.clone(), url)
            .headers(headers);
        if let Some(body) = spec.effective_body() {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(RequestError::Transport)?;
        let status = response.status();

        let decoded = match spec.decode {
            Decode::Json => response
                .json::<Value>()
                .await
                .map(Decoded::Json)
                .map_err(RequestError::json_decode)?,
            Decode::Text => response
                .text()
                .await
                .map(Decoded::Text)
                .map_err(RequestError::text_decode)?,
        };

        if let Some(err) = decoded.error_envelope() {
            return Err(err.into());
        }

        if status != StatusCode::OK {
            return Err(RequestError::UnexpectedStatus { status }.into());
        }

        cross_log!(trace, "{} {} answered {status}", spec.method, spec.path);
        Ok(decoded)
    }

    // === Typed helpers used by the endpoint facade ===

    /// Execute and decode the body as JSON, whatever `spec` says.
    pub(crate) async fn execute_json(&self, spec: RequestSpec) -> Result<Value> {
        let decoded = self.execute(spec.decode(Decode::Json)).await?;
        Ok(decoded.into_json().unwrap_or(Value::Null))
    }

    /// Execute and read the body as text, whatever `spec` says.
    pub(crate) async fn execute_text(&self, spec: RequestSpec) -> Result<String> {
        let decoded = self.execute(spec.decode(Decode::Text)).await?;
        Ok(decoded.into_text().unwrap_or_default())
    }

    /// Execute and return `field` of the JSON body.
    pub(crate) async fn fetch_field<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        field: &'static str,
        operation: &'static str,
    ) -> Result<T> {
        let value = self.execute_json(spec).await?;
        unwrap_field(value, field, operation).map_err(|e| self.fail(e))
    }

    /// Execute and return the whole JSON body.
    pub(crate) async fn fetch_whole<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        operation: &'static str,
    ) -> Result<T> {
        let value = self.execute_json(spec).await?;
        unwrap_whole(value, operation).map_err(|e| self.fail(e))
    }

    /// Execute as text and compare the body against the `"ok"` token.
    pub(crate) async fn fetch_ok(
        &self,
        spec: RequestSpec,
        operation: &'static str,
    ) -> Result<bool> {
        let text = self.execute_text(spec).await?;
        is_ok_token(&text, operation).map_err(|e| self.fail(e))
    }

    /// Execute as text and only report whether the call failed.
    pub(crate) async fn fetch_unit(&self, spec: RequestSpec) -> Result<()> {
        self.execute_text(spec).await.map(drop)
    }
}
