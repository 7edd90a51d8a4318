use std::path::{Path, PathBuf};

use crate::{Error, Res, types::Credentials};

const PLACEHOLDER_CLIENT_ID: &str = "YOUR_CLIENT_ID";
const PLACEHOLDER_CLIENT_SECRET: &str = "YOUR_CLIENT_SECRET";
const PLACEHOLDER_LYRICS_TOKEN: &str = "YOUR_GENIUS_ACCESS_TOKEN";

/// Loads the user supplied API credentials.
///
/// On first run the credentials file does not exist yet: a template with
/// placeholder values is written and [`Error::CredentialsTemplateCreated`] is
/// returned so the caller can tell the user where to fill it in.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Res<Credentials> {
        if async_fs::metadata(&self.path).await.is_err() {
            self.write_template().await?;
            return Err(Error::CredentialsTemplateCreated(self.path.clone()));
        }

        let content = async_fs::read_to_string(&self.path).await?;
        let credentials: Credentials = serde_json::from_str(&content)?;

        if !Self::is_complete(&credentials) {
            return Err(Error::IncompleteCredentials(self.path.clone()));
        }

        Ok(credentials)
    }

    async fn write_template(&self) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&Self::template())?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn template() -> Credentials {
        Credentials {
            client_id: PLACEHOLDER_CLIENT_ID.to_string(),
            client_secret: PLACEHOLDER_CLIENT_SECRET.to_string(),
            lyrics_token: PLACEHOLDER_LYRICS_TOKEN.to_string(),
        }
    }

    /// Every field must be filled in and differ from its placeholder.
    pub fn is_complete(credentials: &Credentials) -> bool {
        [
            (&credentials.client_id, PLACEHOLDER_CLIENT_ID),
            (&credentials.client_secret, PLACEHOLDER_CLIENT_SECRET),
            (&credentials.lyrics_token, PLACEHOLDER_LYRICS_TOKEN),
        ]
        .iter()
        .all(|(value, placeholder)| !value.trim().is_empty() && value.as_str() != *placeholder)
    }
}
