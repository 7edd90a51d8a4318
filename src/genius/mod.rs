//! # Lyrics Resolver
//!
//! Finds, scrapes and cleans the lyrics of a track on Genius.
//!
//! ## Pipeline
//!
//! ```text
//! title + artists
//!     ↓  query_title, search_url      (search)
//! Genius search API
//!     ↓  filter_candidates            (search)
//!     ↓  select_candidate             (search)
//! Genius song page
//!     ↓  extract_lyrics_block         (scrape)
//!     ↓  clean_lyrics                 (scrape)
//!     ↓  to_proper_english            (normalize)
//! lyrics.txt
//! ```
//!
//! Matching is deliberately loose: the first search hit whose URL slug shares
//! a single word with the title wins. That favours getting some lyrics over
//! getting none, at the price of false positives for very common words.
//!
//! Every way the pipeline can fail still produces a `lyrics.txt`, holding a
//! short message that says what went wrong. Only failing to write that file
//! is an error.

pub mod normalize;
pub mod scrape;
pub mod search;

use std::path::Path;

use reqwest::Client;

use crate::{
    Res,
    config::Config,
    reporter::{Level, Reporter},
};

use self::search::SearchResults;

pub const LYRICS_FILE: &str = "lyrics.txt";

/// How the lyrics step ended. Everything but `Found` maps to a fixed
/// placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsOutcome {
    Found(String),
    SearchUnparseable,
    NoCandidates,
    NoTitleMatch,
    MarkerMissing,
    Unreachable,
}

impl LyricsOutcome {
    pub fn text(&self) -> &str {
        match self {
            LyricsOutcome::Found(lyrics) => lyrics,
            LyricsOutcome::SearchUnparseable => {
                "Lyrics API didn't return JSON, the API may be down."
            }
            LyricsOutcome::NoCandidates => "No suitable lyrics found for this song.",
            LyricsOutcome::NoTitleMatch => {
                "No suitable lyrics found for this song based on title check."
            }
            LyricsOutcome::MarkerMissing => "Could not find the lyrics in the page.",
            LyricsOutcome::Unreachable => "Could not reach the lyrics service.",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LyricsOutcome::Found(_))
    }

    fn level(&self) -> Level {
        match self {
            LyricsOutcome::Found(_) => Level::Success,
            LyricsOutcome::MarkerMissing => Level::Warning,
            _ => Level::Error,
        }
    }
}

/// Looks the lyrics up without touching the filesystem.
pub async fn find_lyrics(
    config: &Config,
    client: &Client,
    reporter: &dyn Reporter,
    title: &str,
    artists: &[String],
) -> LyricsOutcome {
    let title = search::query_title(title);
    let url = search::search_url(
        &config.endpoints.lyrics_api_url,
        title,
        &artists.join(", "),
    );

    let candidates = match search::search(client, &url, &config.credentials.lyrics_token).await {
        Ok(SearchResults::Hits(hits)) => hits,
        Ok(SearchResults::Unparseable) => return LyricsOutcome::SearchUnparseable,
        Err(e) => {
            reporter.report(Level::Error, &format!("Lyrics search failed: {}", e));
            return LyricsOutcome::Unreachable;
        }
    };

    let candidates = search::filter_candidates(candidates);
    if candidates.is_empty() {
        return LyricsOutcome::NoCandidates;
    }

    let Some(candidate) = search::select_candidate(title, &candidates) else {
        return LyricsOutcome::NoTitleMatch;
    };
    reporter.report(
        Level::Info,
        &format!("Scraping lyrics from {}", candidate.url),
    );

    match scrape::fetch_page(client, &candidate.url).await {
        Ok(html) => match scrape::lyrics_from_page(&html) {
            Some(lyrics) => LyricsOutcome::Found(lyrics),
            None => LyricsOutcome::MarkerMissing,
        },
        Err(e) => {
            reporter.report(
                Level::Error,
                &format!("An error occurred while scraping the lyrics: {}", e),
            );
            LyricsOutcome::Unreachable
        }
    }
}

/// Resolves the lyrics of a track and writes them, or a placeholder saying
/// why there are none, to `lyrics.txt` in `folder`.
pub async fn resolve_lyrics(
    config: &Config,
    client: &Client,
    reporter: &dyn Reporter,
    title: &str,
    artists: &[String],
    folder: &Path,
) -> Res<LyricsOutcome> {
    let outcome = find_lyrics(config, client, reporter, title, artists).await;
    let path = folder.join(LYRICS_FILE);
    async_fs::write(&path, outcome.text()).await?;

    match &outcome {
        LyricsOutcome::Found(_) => reporter.report(
            Level::Success,
            &format!("Successfully wrote lyrics to {}", path.display()),
        ),
        other => reporter.report(other.level(), other.text()),
    }

    Ok(outcome)
}
