use std::path::Path;

use reqwest::Client;

use crate::Res;

/// Downloads `url` and returns the raw body.
pub async fn download(client: &Client, url: &str) -> Res<Vec<u8>> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// Downloads `url` and writes the body verbatim to `path`.
pub async fn download_to(client: &Client, url: &str, path: &Path) -> Res<()> {
    let bytes = download(client, url).await?;
    async_fs::write(path, bytes).await?;
    Ok(())
}
