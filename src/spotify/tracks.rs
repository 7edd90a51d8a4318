use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    Res,
    config::Config,
    types::{AlbumResponse, TrackRecord, TrackResponse},
    utils,
};

async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, token: &str) -> Res<T> {
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<T>().await?)
}

/// Fetches a track and its album and combines both into a [`TrackRecord`].
///
/// The album id is derived from the album URI returned with the track, the
/// record label only comes with the full album object.
pub async fn get_track(
    config: &Config,
    client: &Client,
    token: &str,
    track_id: &str,
) -> Res<TrackRecord> {
    let track_url = format!(
        "{uri}/tracks/{id}",
        uri = config.endpoints.api_url,
        id = track_id
    );
    let track: TrackResponse = get_json(client, &track_url, token).await?;

    let album_id = utils::album_id_from_uri(&track.album.uri);
    let album = get_album(config, client, token, &album_id).await?;

    Ok(TrackRecord {
        id: track.id,
        title: track.name,
        artists: track.artists.into_iter().map(|a| a.name).collect(),
        release_date: track.album.release_date,
        record_label: album.label,
        album_image_url: track.album.images.into_iter().next().map(|i| i.url),
        album_id,
    })
}

pub async fn get_album(
    config: &Config,
    client: &Client,
    token: &str,
    album_id: &str,
) -> Res<AlbumResponse> {
    let album_url = format!(
        "{uri}/albums/{id}",
        uri = config.endpoints.api_url,
        id = album_id
    );
    get_json(client, &album_url, token).await
}

/// URL of the scannable code image for a track.
pub fn scannable_url(config: &Config, track_id: &str) -> String {
    format!(
        "{base}/spotify:track:{id}",
        base = config.endpoints.scannable_url.trim_end_matches('/'),
        id = track_id
    )
}
