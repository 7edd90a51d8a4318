mod auth;
mod credentials;
mod stats;

use std::path::Path;

pub use auth::TokenManager;
pub use auth::TOKEN_EXPIRY_MARGIN_MS;
pub use auth::get_access_token;
pub use credentials::CredentialStore;
pub use stats::STAT_TOKENS_GENERATED;
pub use stats::STAT_TRACKS_RETRIEVED;
pub use stats::StatsManager;

use crate::Res;

/// Writes `contents` next to `path` first and renames it into place, so an
/// interrupted run never leaves a truncated record behind. There is no lock:
/// concurrent runs against the same files are not supported.
async fn write_atomic(path: &Path, contents: &[u8]) -> Res<()> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    async_fs::write(&tmp, contents).await?;
    async_fs::rename(&tmp, path).await?;
    Ok(())
}
