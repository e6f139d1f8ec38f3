use std::time::Duration;

use serde_json::json;
use tellonym_testnet::httpmock::prelude::*;
use tellonym_testnet::tellonym::errors::{Error, RequestError};

use super::logged_in;

#[tokio::test]
async fn conversation() {
    let (mock, session) = logged_in().await;
    let send = mock
        .server()
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat-api/chat/send")
                .json_body(json!({ "userId": 2, "content": "hello", "type": 1 }));
            then.status(200).json_body(json!({
                "data": { "id": 50, "chatId": 7, "userId": 1, "content": "hello" }
            }));
        })
        .await;
    let history = mock
        .server()
        .mock_async(|when, then| {
            when.method(GET)
                .path("/chat-api/chat/messages")
                .query_param("userId", "2");
            then.status(200).json_body(json!({
                "messages": [
                    { "id": 49, "chatId": 7, "userId": 2, "content": "hi" },
                    { "id": 50, "chatId": 7, "userId": 1, "content": "hello" },
                ]
            }));
        })
        .await;
    let seen = mock
        .server()
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat-api/chat/seen")
                .json_body(json!({ "chatId": 7, "timeSeen": 1000 }));
            then.status(200).body("");
        })
        .await;

    let sent = session.send_message(2, "hello").await.unwrap();
    assert_eq!(sent.chat_id, 7);

    let messages = session.messages(2).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages.last(), Some(&sent));

    session
        .read_chat(7, std::time::UNIX_EPOCH + Duration::from_secs(1))
        .await
        .unwrap();

    send.assert_async().await;
    history.assert_async().await;
    seen.assert_async().await;
}

#[tokio::test]
async fn chat_suggestions_whole_body() {
    let (mock, session) = logged_in().await;
    mock.server()
        .mock_async(|when, then| {
            when.method(GET).path("/chat-api/chat/suggestions");
            then.status(200)
                .json_body(json!([{ "id": 3, "username": "pal", "isAbleToChat": true }]));
        })
        .await;

    let suggestions = session.chat_suggestions().await.unwrap();
    assert_eq!(suggestions[0].user.username, "pal");
    assert!(suggestions[0].is_able_to_chat);
}

#[tokio::test]
async fn chat_errors_surface() {
    let (mock, session) = logged_in().await;
    mock.server()
        .mock_async(|when, then| {
            when.method(POST).path("/chat-api/chat/seen");
            then.status(500).body("oops");
        })
        .await;

    let err = session
        .read_chat(7, std::time::SystemTime::now())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Request(RequestError::UnexpectedStatus { .. })
    ));
}
