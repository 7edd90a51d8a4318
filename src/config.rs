//! Configuration management for Scrapify.
//!
//! Three things make up the configuration of a run:
//!
//! 1. [`Credentials`] loaded from the JSON credentials file
//! 2. [`Endpoints`] for every upstream service, taken from environment
//!    variables (optionally provided by a `.env` file) or the public defaults
//! 3. [`Paths`] for every file the run reads or writes
//!
//! They are combined once into a [`Config`] at startup and passed by reference
//! to every component that needs them.

use std::{env, path::PathBuf};

use crate::types::Credentials;

pub const APP_NAME: &str = "scrapify";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SCANNABLE_URL: &str = "https://scannables.scdn.co/uri/plain/svg/FFFFF/black/1000";
const DEFAULT_LYRICS_API_URL: &str = "https://api.genius.com";

/// Loads environment variables from an optional `.env` file in the local data
/// directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/scrapify/.env`
/// - macOS: `~/Library/Application Support/scrapify/.env`
/// - Windows: `%LOCALAPPDATA%/scrapify/.env`
///
/// A missing file is not an error; every setting it can carry has a default.
/// Variables already present in the environment take precedence.
pub async fn load_env() {
    let mut path = data_dir();
    path.push(".env");
    let exists = async_fs::metadata(&path)
        .await
        .is_ok_and(|meta| meta.is_file());
    if exists {
        let _ = dotenv::from_path(path);
    }
}

fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_NAME);
    path
}

/// Base URLs of every upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Client-credentials token endpoint.
    pub auth_url: String,
    /// Web API base, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
    /// Scannable generator prefix; the track URI is appended as last segment.
    pub scannable_url: String,
    /// Genius API base; `/search` is appended.
    pub lyrics_api_url: String,
}

impl Endpoints {
    /// Reads `SCRAPIFY_AUTH_URL`, `SCRAPIFY_API_URL`, `SCRAPIFY_SCANNABLE_URL`
    /// and `SCRAPIFY_LYRICS_API_URL`, falling back to the public services.
    pub fn from_env() -> Self {
        Self {
            auth_url: env_or("SCRAPIFY_AUTH_URL", DEFAULT_AUTH_URL),
            api_url: env_or("SCRAPIFY_API_URL", DEFAULT_API_URL),
            scannable_url: env_or("SCRAPIFY_SCANNABLE_URL", DEFAULT_SCANNABLE_URL),
            lyrics_api_url: env_or("SCRAPIFY_LYRICS_API_URL", DEFAULT_LYRICS_API_URL),
        }
    }

    /// Points every service at one base URL, using the same path layout a
    /// local mock server would expose.
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            auth_url: format!("{base}/api/token"),
            api_url: format!("{base}/v1"),
            scannable_url: format!("{base}/scannables"),
            lyrics_api_url: format!("{base}/genius"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            scannable_url: DEFAULT_SCANNABLE_URL.to_string(),
            lyrics_api_url: DEFAULT_LYRICS_API_URL.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Every filesystem location a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub credentials: PathBuf,
    pub token_cache: PathBuf,
    pub stats: PathBuf,
    /// Parent of the per-track output folders.
    pub output_root: PathBuf,
}

impl Paths {
    /// Platform locations for the current user.
    ///
    /// Credentials, token cache and stats live in the local data directory;
    /// track folders go to `<desktop>/scrapify`.
    pub fn for_user() -> Self {
        let data = data_dir();
        let desktop = dirs::desktop_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            credentials: data.join("config.json"),
            token_cache: data.join("cache").join("token.json"),
            stats: data.join("stats.json"),
            output_root: desktop.join(APP_NAME),
        }
    }

    /// Same layout as [`Paths::for_user`], all under `root`.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            credentials: root.join("config.json"),
            token_cache: root.join("cache").join("token.json"),
            stats: root.join("stats.json"),
            output_root: root.join("output"),
        }
    }

    pub fn with_output_root(mut self, output_root: Option<PathBuf>) -> Self {
        if let Some(root) = output_root {
            self.output_root = root;
        }
        self
    }

    pub fn track_folder(&self, track_id: &str) -> PathBuf {
        self.output_root.join(track_id)
    }
}

/// Immutable run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub paths: Paths,
}

impl Config {
    pub fn new(credentials: Credentials, endpoints: Endpoints, paths: Paths) -> Self {
        Self {
            credentials,
            endpoints,
            paths,
        }
    }
}
