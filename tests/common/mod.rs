#![allow(dead_code)]

//! Local stand-in for every upstream service a run talks to.
//!
//! One axum server exposes the token endpoint, the Web API, the cover image,
//! the scannable generator, the lyrics search API and the lyrics pages, using
//! the path layout of [`Endpoints::rooted_at`].

use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Extension, Json, Router,
    extract::Path as UrlPath,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::json;

use scrapify::{
    config::{Config, Endpoints, Paths},
    types::Credentials,
};

pub const TRACK_ID: &str = "0VjIjW4GlUZAMYd2vXMi3b";
pub const TRACK_URL: &str = "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b";
pub const ALBUM_ID: &str = "4yP0hdKOZPNshxUOjY0cZj";
pub const MOCK_ACCESS_TOKEN: &str = "mock-access-token";
pub const MOCK_EXPIRES_IN: i64 = 3600;

pub const COVER_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";
pub const SCANNABLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect/></svg>"#;

/// Two containers, entities, a script block and section markers.
pub const LYRICS_PAGE: &str = concat!(
    "<html><head><title>Blinding Lights</title></head><body>",
    r#"<div class="Lyrics__Container" data-lyrics-container="true">"#,
    "[Verse 1]<br/>I&#x27;ve been tryna call<br/>i&#x27;ve been on my own for long enough",
    "</div>",
    "<script>window.__PRELOADED_STATE__ = {};</script>",
    r#"<div class="Lyrics__Container" data-lyrics-container="true">"#,
    "[Chorus]<br/><i>i said, ooh, i&#x27;m blinded by the lights</i>",
    "</div>",
    "</body></html>"
);

/// What [`LYRICS_PAGE`] turns into after scraping and normalization.
pub const LYRICS_TEXT: &str =
    "I'VE been tryna call I'VE been on my own for long enough I said, ooh, I'M blinded by the lights";

pub fn test_credentials() -> Credentials {
    Credentials {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        lyrics_token: "test-genius-token".to_string(),
    }
}

/// Builds a lyrics search response body. `{base}` in a path is replaced with
/// the server address when the response is served.
pub fn search_body(hits: &[(&str, &str)]) -> String {
    let hits: Vec<_> = hits
        .iter()
        .map(|(title, path)| {
            json!({
                "result": {
                    "title_with_featured": title,
                    "url": format!("{{base}}{path}"),
                }
            })
        })
        .collect();

    json!({ "meta": { "status": 200 }, "response": { "hits": hits } }).to_string()
}

/// Search response of a successful lookup: a playlist page that must be
/// filtered out, then the song page.
pub fn default_search_body() -> String {
    search_body(&[
        (
            "New Music Friday 03/20/20",
            "/lyrics/Genius-new-music-friday-03-20-20-lyrics",
        ),
        (
            "Blinding Lights",
            "/lyrics/The-weeknd-blinding-lights-lyrics",
        ),
    ])
}

#[derive(Debug, Clone)]
pub struct MockOptions {
    pub token_status: StatusCode,
    pub album_status: StatusCode,
    pub with_cover: bool,
    pub search_body: String,
    pub lyrics_page: String,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            token_status: StatusCode::OK,
            album_status: StatusCode::OK,
            with_cover: true,
            search_body: default_search_body(),
            lyrics_page: LYRICS_PAGE.to_string(),
        }
    }
}

pub struct MockState {
    pub base: String,
    pub options: MockOptions,
    pub token_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub page_calls: AtomicUsize,
}

pub struct MockUpstream {
    pub base: String,
    pub state: Arc<MockState>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        Self::with_options(MockOptions::default()).await
    }

    pub async fn with_options(options: MockOptions) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream address");
        let base = format!("http://{addr}");

        let state = Arc::new(MockState {
            base: base.clone(),
            options,
            token_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/tracks/{id}", get(track))
            .route("/v1/albums/{id}", get(album))
            .route("/images/cover.png", get(cover))
            .route("/scannables/{uri}", get(scannable))
            .route("/genius/search", get(search))
            .route("/lyrics/{slug}", get(lyrics_page))
            .layer(Extension(state.clone()));

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { base, state }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::rooted_at(&self.base)
    }

    pub fn config_for(&self, root: &Path) -> Config {
        Config::new(test_credentials(), self.endpoints(), Paths::rooted_at(root))
    }

    pub fn token_calls(&self) -> usize {
        self.state.token_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.state.search_calls.load(Ordering::SeqCst)
    }

    pub fn page_calls(&self) -> usize {
        self.state.page_calls.load(Ordering::SeqCst)
    }
}

fn expected_basic_header() -> String {
    let credentials = test_credentials();
    let raw = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

fn header_value<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

async fn token(Extension(state): Extension<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.token_calls.fetch_add(1, Ordering::SeqCst);

    if state.options.token_status != StatusCode::OK {
        return (
            state.options.token_status,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response();
    }

    if header_value(&headers, header::AUTHORIZATION) != Some(expected_basic_header().as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": MOCK_ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": MOCK_EXPIRES_IN,
    }))
    .into_response()
}

fn bearer_ok(headers: &HeaderMap, token: &str) -> bool {
    header_value(headers, header::AUTHORIZATION) == Some(format!("Bearer {token}").as_str())
}

async fn track(
    Extension(state): Extension<Arc<MockState>>,
    UrlPath(id): UrlPath<String>,
    headers: HeaderMap,
) -> Response {
    if !bearer_ok(&headers, MOCK_ACCESS_TOKEN) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let images = if state.options.with_cover {
        json!([{ "url": format!("{}/images/cover.png", state.base), "height": 640, "width": 640 }])
    } else {
        json!([])
    };

    Json(json!({
        "id": id,
        "name": "Blinding Lights",
        "artists": [{ "id": "1Xyo4u8uXC1ZmMpatF05PJ", "name": "The Weeknd" }],
        "album": {
            "id": ALBUM_ID,
            "uri": format!("spotify:album:{ALBUM_ID}"),
            "release_date": "2020-03-20",
            "release_date_precision": "day",
            "images": images,
        },
    }))
    .into_response()
}

async fn album(
    Extension(state): Extension<Arc<MockState>>,
    UrlPath(id): UrlPath<String>,
    headers: HeaderMap,
) -> Response {
    if !bearer_ok(&headers, MOCK_ACCESS_TOKEN) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if state.options.album_status != StatusCode::OK {
        return (
            state.options.album_status,
            Json(json!({ "error": { "status": state.options.album_status.as_u16() } })),
        )
            .into_response();
    }

    Json(json!({ "id": id, "label": "Republic Records" })).into_response()
}

async fn cover() -> Response {
    ([(header::CONTENT_TYPE, "image/png")], COVER_BYTES).into_response()
}

async fn scannable(UrlPath(uri): UrlPath<String>) -> Response {
    if uri != format!("spotify:track:{TRACK_ID}") {
        return StatusCode::NOT_FOUND.into_response();
    }
    ([(header::CONTENT_TYPE, "image/svg+xml")], SCANNABLE_SVG).into_response()
}

async fn search(Extension(state): Extension<Arc<MockState>>, headers: HeaderMap) -> Response {
    state.search_calls.fetch_add(1, Ordering::SeqCst);

    if !bearer_ok(&headers, &test_credentials().lyrics_token) {
        return (StatusCode::UNAUTHORIZED, "unauthorized").into_response();
    }

    let body = state.options.search_body.replace("{base}", &state.base);
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn lyrics_page(Extension(state): Extension<Arc<MockState>>) -> Response {
    state.page_calls.fetch_add(1, Ordering::SeqCst);
    ([(header::CONTENT_TYPE, "text/html")], state.options.lyrics_page.clone()).into_response()
}
