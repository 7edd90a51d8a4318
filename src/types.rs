use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(rename = "CLIENT_ID", default)]
    pub client_id: String,
    #[serde(rename = "CLIENT_SECRET", default)]
    pub client_secret: String,
    #[serde(rename = "GENIUS_ACCESS_TOKEN", default)]
    pub lyrics_token: String,
}

/// Access token as persisted in the token cache.
///
/// `expires_at` is a Unix timestamp in milliseconds with the early-expiry
/// margin already subtracted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentialsResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    #[serde(default)]
    pub tokens_generated: u64,
    #[serde(default)]
    pub tracks_retrieved: u64,
}

#[derive(Tabled)]
pub struct StatsTableRow {
    pub counter: String,
    pub value: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackResponse {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub uri: String,
    pub release_date: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumResponse {
    #[serde(default)]
    pub label: String,
}

/// Track metadata gathered from the track and album endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub id: String,
    pub title: String,
    pub artists: Vec<String>,
    pub release_date: String,
    pub record_label: String,
    pub album_image_url: Option<String>,
    pub album_id: String,
}

impl TrackRecord {
    pub fn creator(&self) -> String {
        self.artists.join(", ")
    }
}

/// Contents of `data.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackData {
    pub title: String,
    pub creator: String,
    pub release_date: String,
    pub record_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchBody {
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub result: SearchResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub title_with_featured: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsCandidate {
    pub title: String,
    pub url: String,
}

impl From<SearchHit> for LyricsCandidate {
    fn from(hit: SearchHit) -> Self {
        LyricsCandidate {
            title: hit.result.title_with_featured,
            url: hit.result.url,
        }
    }
}
