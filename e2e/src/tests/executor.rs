use serde_json::json;
use tellonym_testnet::MockTellonym;
use tellonym_testnet::httpmock::prelude::*;
use tellonym_testnet::tellonym::errors::{Error, RequestError};
use tellonym_testnet::tellonym::{Decode, Decoded, HostAlias, RequestSpec, StatusCode};

use super::{TOKEN, logged_in};

#[tokio::test]
async fn envelope_wins_even_on_200() {
    let (mock, session) = logged_in().await;
    mock.server()
        .mock_async(|when, then| {
            when.method(GET).path("/api/notifications/");
            then.status(200)
                .json_body(json!({ "notifications": [], "err": { "msg": "Banned" } }));
        })
        .await;

    let err = session.notifications().await.unwrap_err();
    match err {
        Error::Request(RequestError::Application { message, code }) => {
            assert_eq!(message, "Banned");
            assert_eq!(code, "??");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn status_checked_after_envelope() {
    let (mock, session) = logged_in().await;
    mock.server()
        .mock_async(|when, then| {
            when.method(GET).path("/api/announcements/");
            then.status(202).json_body(json!({ "announcements": [] }));
        })
        .await;

    let err = session.announcements().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::ACCEPTED));
}

#[tokio::test]
async fn raw_execute_merges_headers() {
    let (mock, session) = logged_in().await;
    let raw = mock
        .server()
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/chat-api/chat/settings")
                .header("authorization", "Bearer override")
                .header("user-agent", "e2e-agent")
                .header("tellonym-client", "web:3.28.7")
                .body("{\"muted\":true}");
            then.status(200).body("done");
        })
        .await;

    let spec = RequestSpec::put("chat/settings")
        .host(HostAlias::Chat)
        .decode(Decode::Text)
        .body("{\"muted\":true}")
        .header(
            "authorization".parse().unwrap(),
            "Bearer override".parse().unwrap(),
        )
        .header("user-agent".parse().unwrap(), "e2e-agent".parse().unwrap());

    let decoded = session.execute(spec).await.unwrap();
    assert_eq!(decoded, Decoded::Text("done".into()));
    raw.assert_async().await;
}

#[tokio::test]
async fn custom_alias_and_bearer() {
    let (mock, session) = logged_in().await;
    let custom = mock
        .server()
        .mock_async(|when, then| {
            when.method(GET)
                .path("/media-api/upload/config")
                .header("authorization", format!("Bearer {TOKEN}"));
            then.status(200).json_body(json!({ "maxSize": 10 }));
        })
        .await;

    let decoded = session
        .execute(RequestSpec::get("upload/config").host(HostAlias::Custom("media-api".into())))
        .await
        .unwrap();
    assert_eq!(decoded.into_json(), Some(json!({ "maxSize": 10 })));
    custom.assert_async().await;
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let (mock, session) = logged_in().await;
    mock.server()
        .mock_async(|when, then| {
            when.method(GET).path(MockTellonym::path(&HostAlias::Api, "check/updates/"));
            then.status(200).body("{ not json");
        })
        .await;

    let err = session.check_updates().await.unwrap_err();
    assert!(matches!(err, Error::Request(RequestError::JsonDecode { .. })));
}
