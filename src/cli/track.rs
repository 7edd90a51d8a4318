use std::path::{Path, PathBuf};

use reqwest::Client;

use crate::{
    Res, assets,
    config::{Config, Endpoints, Paths},
    error,
    genius::{self, LyricsOutcome},
    management::{self, CredentialStore, STAT_TRACKS_RETRIEVED, StatsManager},
    reporter::{ConsoleReporter, Level, Reporter},
    spotify,
    types::{TrackData, TrackRecord},
    utils,
};

pub const DATA_FILE: &str = "data.json";
pub const IMAGE_FILE: &str = "image.png";
pub const SCANNABLE_FILE: &str = "scannable.svg";

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct TrackRun {
    pub track: TrackRecord,
    pub folder: PathBuf,
    pub lyrics: LyricsOutcome,
}

/// Entry point of the default command.
///
/// Loads the credentials, validates the URL and runs the whole pipeline. Any
/// fatal error ends the process with exit code 1.
pub async fn fetch_track(track_url: Option<String>, output_dir: Option<PathBuf>) {
    let paths = Paths::for_user().with_output_root(output_dir);

    let credentials = match CredentialStore::new(&paths.credentials).load().await {
        Ok(credentials) => credentials,
        Err(e) => error!("{}", e),
    };

    let track_url = match track_url {
        Some(url) if utils::is_valid_track_url(&url) => url,
        _ => error!("Please provide a valid Spotify track URL as an argument."),
    };

    let config = Config::new(credentials, Endpoints::from_env(), paths);
    let client = Client::new();
    let reporter = ConsoleReporter::new();

    if let Err(e) = run(&config, &client, &reporter, &track_url).await {
        reporter.finish_progress();
        error!("{}", e);
    }
}

/// Runs the pipeline for one track: token, metadata, `data.json`, then the
/// cover image, scannable code and lyrics concurrently, and finally the
/// usage stats.
pub async fn run(
    config: &Config,
    client: &Client,
    reporter: &dyn Reporter,
    track_url: &str,
) -> Res<TrackRun> {
    let track_id = utils::track_id_from_url(track_url)?;

    let token = management::get_access_token(config, client, reporter).await?;
    let track = spotify::tracks::get_track(config, client, &token, &track_id).await?;
    reporter.report(
        Level::Info,
        &format!(
            "Generating files for: {} - {}",
            track.title,
            track.creator()
        ),
    );

    let folder = config.paths.track_folder(&track_id);
    async_fs::create_dir_all(&folder).await?;

    let data_path = write_track_data(&track, &folder).await?;
    reporter.report(
        Level::Success,
        &format!("Successfully wrote track data to {}", data_path.display()),
    );

    reporter.progress("Fetching artwork, scannable and lyrics...");
    let (image, scannable, lyrics) = tokio::join!(
        download_cover(client, reporter, &track, &folder),
        download_scannable(config, client, reporter, &track_id, &folder),
        genius::resolve_lyrics(
            config,
            client,
            reporter,
            &track.title,
            &track.artists,
            &folder
        ),
    );
    reporter.finish_progress();
    image?;
    scannable?;
    let lyrics = lyrics?;

    if let Err(e) = StatsManager::new(&config.paths.stats)
        .bump(&[(STAT_TRACKS_RETRIEVED, 1)])
        .await
    {
        reporter.report(Level::Warning, &format!("Failed to update stats: {}", e));
    }

    reporter.report(
        Level::Success,
        &format!("All files written to {}", folder.display()),
    );

    Ok(TrackRun {
        track,
        folder,
        lyrics,
    })
}

pub async fn write_track_data(track: &TrackRecord, folder: &Path) -> Res<PathBuf> {
    let data = TrackData {
        title: track.title.clone(),
        creator: track.creator(),
        release_date: utils::format_release_date(&track.release_date),
        record_label: track.record_label.clone(),
    };

    let path = folder.join(DATA_FILE);
    let json = serde_json::to_string_pretty(&data)?;
    async_fs::write(&path, json).await?;
    Ok(path)
}

async fn download_cover(
    client: &Client,
    reporter: &dyn Reporter,
    track: &TrackRecord,
    folder: &Path,
) -> Res<()> {
    let Some(url) = &track.album_image_url else {
        reporter.report(Level::Warning, "Album has no artwork, skipping image.");
        return Ok(());
    };

    let path = folder.join(IMAGE_FILE);
    assets::download_to(client, url, &path).await?;
    reporter.report(
        Level::Success,
        &format!("Successfully wrote album art to {}", path.display()),
    );
    Ok(())
}

async fn download_scannable(
    config: &Config,
    client: &Client,
    reporter: &dyn Reporter,
    track_id: &str,
    folder: &Path,
) -> Res<()> {
    let path = folder.join(SCANNABLE_FILE);
    let url = spotify::tracks::scannable_url(config, track_id);
    assets::download_to(client, &url, &path).await?;
    reporter.report(
        Level::Success,
        &format!("Successfully wrote scannable to {}", path.display()),
    );
    Ok(())
}
