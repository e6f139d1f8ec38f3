use serde_json::json;
use tellonym_testnet::MockTellonym;
use tellonym_testnet::httpmock::prelude::*;
use tellonym_testnet::tellonym::errors::{AuthError, Error, RequestError};
use tellonym_testnet::tellonym::{HostAlias, StatusCode, TellonymSession};

use super::{TOKEN, logged_in, utils::init_tracing};

#[tokio::test]
async fn anonymous_calls_make_no_requests() {
    init_tracing();
    let mock = MockTellonym::start().await;
    let any = mock
        .server()
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(json!({ "tells": [] }));
        })
        .await;

    let session = mock.session().unwrap();
    for err in [
        session.tells(None).await.unwrap_err(),
        session.chats().await.map(drop).unwrap_err(),
        session.follow_user(1, false).await.map(drop).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            Error::Authentication(AuthError::NotAuthenticated)
        ));
    }
    any.assert_hits_async(0).await;
}

#[tokio::test]
async fn login_then_logout() {
    let (_mock, mut session) = logged_in().await;

    let me = session.current_user().unwrap();
    assert_eq!(me.id(), 1);
    assert_eq!(me.username(), "tester");

    let err = session.login(Some(TOKEN)).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Authentication(AuthError::AlreadyAuthenticated)
    ));

    assert!(session.logout());
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
    assert!(session.export_token().is_none());
    assert!(!session.logout());
}

#[tokio::test]
async fn failed_login_leaves_session_untouched() {
    init_tracing();
    let mock = MockTellonym::start().await;
    mock.server()
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/accounts/myself/")
                .header("authorization", "Bearer revoked");
            then.status(200)
                .json_body(json!({ "err": { "msg": "Token invalid", "code": "TOKEN_INVALID" } }));
        })
        .await;
    mock.mount_account_body("nameless", json!({ "id": 5, "username": "" }))
        .await;

    let mut session = mock.session().unwrap();
    session.set_debug(true);

    let err = session.login(Some("revoked")).await.unwrap_err();
    match err {
        Error::Authentication(AuthError::LoginFailed(cause)) => {
            assert!(cause.is_application_error());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!session.is_authenticated());

    let err = session.login(Some("nameless")).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Authentication(AuthError::LoginFailed(_))
    ));
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());

    // A failed attempt does not poison the next one.
    mock.mount_account("good", 2, "second-try").await;
    session.login(Some("good")).await.unwrap();
    assert_eq!(session.current_user().unwrap().username(), "second-try");
}

#[tokio::test]
async fn stored_token_is_used_when_none_given() {
    init_tracing();
    let mock = MockTellonym::start().await;
    let probe = mock.mount_account("stored", 3, "stored-user").await;

    let mut session = TellonymSession::builder()
        .client(mock.client().unwrap())
        .token("stored")
        .build()
        .unwrap();
    let me = session.login(None).await.unwrap();
    assert_eq!(me.username(), "stored-user");
    probe.assert_async().await;

    let mut empty = mock.session().unwrap();
    assert!(matches!(
        empty.login(None).await.unwrap_err(),
        Error::Authentication(AuthError::MissingCredential)
    ));
}

#[tokio::test]
async fn destroy_token_revokes_and_logs_out() {
    let (mock, mut session) = logged_in().await;
    let destroy = mock
        .server()
        .mock_async(|when, then| {
            when.method(POST)
                .path(MockTellonym::path(&HostAlias::Api, "tokens/destroy"))
                .header("authorization", format!("Bearer {TOKEN}"));
            then.status(200).body("");
        })
        .await;

    assert!(session.destroy_token().await.unwrap());
    assert!(!session.is_authenticated());
    destroy.assert_async().await;

    assert!(matches!(
        session.destroy_token().await.unwrap_err(),
        Error::Authentication(AuthError::MissingCredential)
    ));
}

#[tokio::test]
async fn destroy_token_failure_keeps_session() {
    let (mock, mut session) = logged_in().await;
    mock.server()
        .mock_async(|when, then| {
            when.method(POST).path("/api/tokens/destroy");
            then.status(500);
        })
        .await;

    let err = session.destroy_token().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn token_file_restores_session() {
    let (mock, session) = logged_in().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    session.write_token_file(&path).unwrap();

    let restored = TellonymSession::from_token_file_with_client(mock.client().unwrap(), &path)
        .await
        .unwrap();
    assert_eq!(restored.current_user(), session.current_user());
}

#[tokio::test]
async fn reset_password_without_session() {
    init_tracing();
    let mock = MockTellonym::start().await;
    let reset = mock
        .server()
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/accounts/forgotpassword")
                .json_body(json!({ "email": "me@example.com" }));
            then.status(200);
        })
        .await;
    let tellonym = tellonym_testnet::tellonym::Tellonym::with_client(mock.client().unwrap());

    tellonym.reset_password("me@example.com").await.unwrap();
    reset.assert_async().await;

    // Unknown addresses fall through to the mock server's 404.
    let err = tellonym.reset_password("other@example.com").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Request(RequestError::UnexpectedStatus { status }) if status == StatusCode::NOT_FOUND
    ));
}
