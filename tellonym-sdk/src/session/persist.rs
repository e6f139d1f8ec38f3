use std::path::Path;

use super::core::TellonymSession;
use crate::errors::{AuthError, Result};
use crate::{TellonymHttpClient, global_client};

impl TellonymSession {
    /// The bearer token this session signs requests with, if logged in.
    ///
    /// Useful for scripts that need restarting without fetching a new token.
    /// Treat the returned String as a **bearer secret**. Do not log it; store
    /// it securely.
    pub fn export_token(&self) -> Option<String> {
        self.is_authenticated()
            .then(|| self.credential.clone())
            .flatten()
    }

    /// Write the session token to a file as plain text.
    /// If the file exists, it is overwritten. On Unix, permissions are set to 600.
    ///
    /// # Errors
    /// - [`AuthError::NotAuthenticated`] if the session is not logged in.
    /// - [`crate::Error::Io`] if the file cannot be written.
    pub fn write_token_file(&self, token_file_path: &Path) -> Result<()> {
        let token = self.export_token().ok_or(AuthError::NotAuthenticated)?;
        std::fs::write(token_file_path, token)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(token_file_path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    /// Restore a logged-in session from a token stored in a file, using the
    /// global default client.
    /// Reads the file, trims whitespace, then logs in with it.
    pub async fn from_token_file(token_file_path: &Path) -> Result<Self> {
        Self::from_token_file_with_client(global_client()?, token_file_path).await
    }

    /// Same as [`Self::from_token_file`] on an explicit client.
    pub async fn from_token_file_with_client(
        client: TellonymHttpClient,
        token_file_path: &Path,
    ) -> Result<Self> {
        let token = std::fs::read_to_string(token_file_path)?;
        let mut session = TellonymSession::with_client(client);
        session.login(Some(token.trim())).await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::errors::Error;

    fn client_for(server: &MockServer) -> TellonymHttpClient {
        TellonymHttpClient::builder()
            .origin(Url::parse(&server.base_url()).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn anonymous_session_has_nothing_to_export() {
        let session = TellonymSession::with_client(TellonymHttpClient::new().unwrap());
        assert_eq!(session.export_token(), None);

        let dir = tempfile::tempdir().unwrap();
        let err = session
            .write_token_file(&dir.path().join("token"))
            .unwrap_err();
        assert!(matches!(err, Error::Authentication(AuthError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn token_file_round_trip() {
        let server = MockServer::start_async().await;
        let probe = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/accounts/myself/")
                    .header("authorization", "Bearer stored-token");
                then.status(200)
                    .json_body(json!({ "id": 3, "username": "restored" }));
            })
            .await;

        let mut session = TellonymSession::with_client(client_for(&server));
        session.login(Some("stored-token")).await.unwrap();
        assert_eq!(session.export_token().as_deref(), Some("stored-token"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tellonym.token");
        session.write_token_file(&path).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        // Trailing newline as left by editors.
        std::fs::write(&path, "stored-token\n").unwrap();
        let restored = TellonymSession::from_token_file_with_client(client_for(&server), &path)
            .await
            .unwrap();
        assert!(restored.is_authenticated());
        assert_eq!(restored.current_user().unwrap().username(), "restored");
        probe.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn missing_token_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TellonymSession::from_token_file_with_client(
            TellonymHttpClient::new().unwrap(),
            &dir.path().join("absent"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
