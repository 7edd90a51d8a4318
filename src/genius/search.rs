use reqwest::Client;

use crate::{
    Res,
    types::{LyricsCandidate, SearchResponse},
};

/// Titles of Genius pages that are never the song itself: playlists,
/// translations, listicles and annotated books.
pub const NOISE_MARKERS: [&str; 13] = [
    "New Music Friday",
    "Release Calendar",
    "traduction",
    "deutsche",
    "Español",
    "Top Artists of",
    "Top Tracks of",
    "Highest To Lowest",
    "This Is",
    "Annotated",
    "A Portrait of the Artist as a Young Man",
    "Portrait of the Artist as a Young Man",
    "Brown v. Entertainment Merchants Association",
];

/// Drops everything from the first `"(with"` on, e.g.
/// `"Song (with Someone)"` -> `"Song "`.
pub fn query_title(title: &str) -> &str {
    match title.find("(with") {
        Some(idx) => &title[..idx],
        None => title,
    }
}

pub fn search_url(base: &str, title: &str, artists: &str) -> String {
    format!(
        "{base}/search?q={title}%20{artists}",
        base = base.trim_end_matches('/'),
        title = urlencoding::encode(title),
        artists = urlencoding::encode(artists)
    )
}

/// Outcome of a search request whose transport succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    Hits(Vec<LyricsCandidate>),
    Unparseable,
}

/// Runs the search and keeps the hits in rank order.
///
/// A body that does not match the expected JSON shape is not an error: it is
/// reported as [`SearchResults::Unparseable`] so the caller can write a
/// placeholder.
pub async fn search(client: &Client, url: &str, token: &str) -> Res<SearchResults> {
    let body = client.get(url).bearer_auth(token).send().await?.text().await?;
    Ok(parse_search_response(&body))
}

pub fn parse_search_response(body: &str) -> SearchResults {
    match serde_json::from_str::<SearchResponse>(body) {
        Ok(parsed) => SearchResults::Hits(
            parsed
                .response
                .hits
                .into_iter()
                .map(LyricsCandidate::from)
                .collect(),
        ),
        Err(_) => SearchResults::Unparseable,
    }
}

pub fn is_noise(title: &str) -> bool {
    let title = title.to_lowercase();
    NOISE_MARKERS
        .iter()
        .any(|marker| title.contains(&marker.to_lowercase()))
}

pub fn filter_candidates(candidates: Vec<LyricsCandidate>) -> Vec<LyricsCandidate> {
    candidates
        .into_iter()
        .filter(|c| !is_noise(&c.title))
        .collect()
}

/// Lower-cases and keeps ASCII letters, digits and whitespace only.
pub fn sanitize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

pub fn title_tokens(title: &str) -> Vec<String> {
    sanitize(title)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Last non-empty path segment of a page URL, without query or fragment.
pub fn url_slug(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(path)
}

/// Picks the first candidate whose sanitized slug contains at least one
/// title token. Search rank breaks ties; there is no scoring.
pub fn select_candidate<'a>(
    title: &str,
    candidates: &'a [LyricsCandidate],
) -> Option<&'a LyricsCandidate> {
    let tokens = title_tokens(title);
    candidates.iter().find(|candidate| {
        let slug = sanitize(url_slug(&candidate.url));
        tokens.iter().any(|token| slug.contains(token.as_str()))
    })
}
