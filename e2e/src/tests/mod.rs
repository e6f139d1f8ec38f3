mod auth;
mod chat;
mod executor;
mod utils;

use tellonym_testnet::MockTellonym;

const TOKEN: &str = "e2e-token";

/// A mock API and a session logged in on it as `tester` (id 1).
async fn logged_in() -> (MockTellonym, tellonym_testnet::tellonym::TellonymSession) {
    utils::init_tracing();
    let mock = MockTellonym::start().await;
    let session = mock.logged_in_session(TOKEN, 1, "tester").await.unwrap();
    (mock, session)
}
