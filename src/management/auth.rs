use std::path::PathBuf;

use chrono::{Local, TimeZone, Utc};
use reqwest::Client;

use crate::{
    Res,
    config::Config,
    reporter::{Level, Reporter},
    spotify,
    types::CachedToken,
};

use super::{STAT_TOKENS_GENERATED, StatsManager, write_atomic};

/// Subtracted from the token lifetime when it is cached, so a token never
/// expires in the middle of a request.
pub const TOKEN_EXPIRY_MARGIN_MS: i64 = 30_000;

pub struct TokenManager {
    path: PathBuf,
    token: Option<CachedToken>,
}

impl TokenManager {
    pub fn new(path: impl Into<PathBuf>, token: Option<CachedToken>) -> Self {
        TokenManager {
            path: path.into(),
            token,
        }
    }

    /// Loads the cached token. A missing or unreadable cache simply yields a
    /// manager without a token.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = match async_fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str::<CachedToken>(&content).ok(),
            Err(_) => None,
        };
        Self { path, token }
    }

    pub async fn persist(&self) -> Res<()> {
        if let Some(token) = &self.token {
            let json = serde_json::to_string_pretty(token)?;
            write_atomic(&self.path, json.as_bytes()).await?;
        }
        Ok(())
    }

    pub fn current_token(&self) -> Option<&CachedToken> {
        self.token.as_ref()
    }

    /// Returns the cached token while it is still valid, otherwise exchanges
    /// the client credentials for a new one, caches it and counts it in the
    /// usage stats.
    pub async fn get_valid_token(
        &mut self,
        config: &Config,
        client: &Client,
        reporter: &dyn Reporter,
    ) -> Res<String> {
        let now = Utc::now().timestamp_millis();
        if let Some(token) = self.token.as_ref().filter(|t| !Self::is_expired(t, now)) {
            reporter.report(
                Level::Info,
                &format!(
                    "Using cached access token (expires at {}).",
                    format_expiry(token.expires_at)
                ),
            );
            return Ok(token.access_token.clone());
        }

        let response = spotify::auth::request_client_token(
            client,
            &config.endpoints.auth_url,
            &config.credentials,
        )
        .await?;

        let issued_at = Utc::now().timestamp_millis();
        let token = CachedToken {
            access_token: response.access_token,
            expires_at: issued_at + response.expires_in * 1000 - TOKEN_EXPIRY_MARGIN_MS,
        };
        self.token = Some(token.clone());
        self.persist().await?;

        reporter.report(
            Level::Info,
            &format!(
                "New access token retrieved and cached (expires at {}).",
                format_expiry(token.expires_at)
            ),
        );

        if let Err(e) = StatsManager::new(&config.paths.stats)
            .bump(&[(STAT_TOKENS_GENERATED, 1)])
            .await
        {
            reporter.report(Level::Warning, &format!("Failed to update stats: {}", e));
        }

        Ok(token.access_token)
    }

    fn is_expired(token: &CachedToken, now: i64) -> bool {
        now >= token.expires_at
    }
}

/// Loads the token cache for `config` and returns a usable access token.
pub async fn get_access_token(
    config: &Config,
    client: &Client,
    reporter: &dyn Reporter,
) -> Res<String> {
    TokenManager::load(&config.paths.token_cache)
        .await
        .get_valid_token(config, client, reporter)
        .await
}

fn format_expiry(expires_at: i64) -> String {
    match Local.timestamp_millis_opt(expires_at).single() {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => expires_at.to_string(),
    }
}
