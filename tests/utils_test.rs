use scrapify::Error;
use scrapify::management::{CredentialStore, STAT_TOKENS_GENERATED, STAT_TRACKS_RETRIEVED};
use scrapify::types::{Credentials, Stats, TrackRecord};
use scrapify::utils::*;

// Helper function to create a track record with the given artists
fn create_test_track(artists: &[&str]) -> TrackRecord {
    TrackRecord {
        id: "0VjIjW4GlUZAMYd2vXMi3b".to_string(),
        title: "Blinding Lights".to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
        release_date: "2020-03-20".to_string(),
        record_label: "Republic Records".to_string(),
        album_image_url: None,
        album_id: "4yP0hdKOZPNshxUOjY0cZj".to_string(),
    }
}

#[test]
fn test_is_valid_track_url() {
    // Both hosts, with and without scheme
    assert!(is_valid_track_url(
        "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b"
    ));
    assert!(is_valid_track_url(
        "http://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b"
    ));
    assert!(is_valid_track_url(
        "https://spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b"
    ));
    assert!(is_valid_track_url(
        "open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b"
    ));

    // Id must be exactly 22 alphanumeric characters
    assert!(!is_valid_track_url(
        "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3"
    ));
    assert!(!is_valid_track_url(
        "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3bX"
    ));
    assert!(!is_valid_track_url(
        "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3-"
    ));

    // Other resource kinds, hosts and trailing garbage
    assert!(!is_valid_track_url(
        "https://open.spotify.com/album/4yP0hdKOZPNshxUOjY0cZj"
    ));
    assert!(!is_valid_track_url(
        "https://example.com/track/0VjIjW4GlUZAMYd2vXMi3b"
    ));
    assert!(!is_valid_track_url(
        "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b?si=abc"
    ));
    assert!(!is_valid_track_url(""));
}

#[test]
fn test_track_id_from_url() {
    let id = track_id_from_url("https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b").unwrap();
    assert_eq!(id, "0VjIjW4GlUZAMYd2vXMi3b");

    let err = track_id_from_url("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTrackUrl(_)));
}

#[test]
fn test_album_id_from_uri() {
    assert_eq!(
        album_id_from_uri("spotify:album:4yP0hdKOZPNshxUOjY0cZj"),
        "4yP0hdKOZPNshxUOjY0cZj"
    );

    // Without an id segment there is nothing to return
    assert_eq!(album_id_from_uri("spotify:album"), "");
}

#[test]
fn test_day_suffix() {
    assert_eq!(day_suffix(1), "st");
    assert_eq!(day_suffix(2), "nd");
    assert_eq!(day_suffix(3), "rd");
    assert_eq!(day_suffix(4), "th");
    assert_eq!(day_suffix(11), "th");
    assert_eq!(day_suffix(12), "th");
    assert_eq!(day_suffix(13), "th");
    assert_eq!(day_suffix(21), "st");
    assert_eq!(day_suffix(22), "nd");
    assert_eq!(day_suffix(23), "rd");
    assert_eq!(day_suffix(31), "st");
}

#[test]
fn test_format_release_date() {
    assert_eq!(format_release_date("2023-01-21"), "21st Jan 2023");
    assert_eq!(format_release_date("2023-01-02"), "2nd Jan 2023");
    assert_eq!(format_release_date("2023-01-04"), "4th Jan 2023");
    assert_eq!(format_release_date("2020-03-20"), "20th Mar 2020");
    assert_eq!(format_release_date("1999-12-31"), "31st Dec 1999");
}

#[test]
fn test_format_release_date_with_reduced_precision() {
    // Month and year precision fall back to the first day
    assert_eq!(format_release_date("1987-06"), "1st Jun 1987");
    assert_eq!(format_release_date("1975"), "1st Jan 1975");

    // Unparseable input is passed through
    assert_eq!(format_release_date("unknown"), "unknown");
    assert_eq!(format_release_date(""), "");
}

#[test]
fn test_track_record_creator() {
    assert_eq!(create_test_track(&["The Weeknd"]).creator(), "The Weeknd");
    assert_eq!(
        create_test_track(&["Post Malone", "Swae Lee"]).creator(),
        "Post Malone, Swae Lee"
    );
}

#[test]
fn test_stats_apply() {
    let mut stats = Stats::default();

    assert!(stats.apply(STAT_TOKENS_GENERATED, 1));
    assert!(stats.apply(STAT_TRACKS_RETRIEVED, 2));
    assert!(stats.apply(STAT_TRACKS_RETRIEVED, 1));
    assert_eq!(stats.tokens_generated, 1);
    assert_eq!(stats.tracks_retrieved, 3);

    // Unknown counters change nothing
    assert!(!stats.apply("albums_retrieved", 5));
    assert_eq!(
        stats,
        Stats {
            tokens_generated: 1,
            tracks_retrieved: 3
        }
    );

    // Counters saturate instead of overflowing
    stats.tokens_generated = u64::MAX;
    stats.apply(STAT_TOKENS_GENERATED, 1);
    assert_eq!(stats.tokens_generated, u64::MAX);
}

#[test]
fn test_credentials_is_complete() {
    let complete = Credentials {
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
        lyrics_token: "token".to_string(),
    };
    assert!(CredentialStore::is_complete(&complete));

    // The template itself is never complete
    assert!(!CredentialStore::is_complete(&CredentialStore::template()));

    let mut missing_secret = complete.clone();
    missing_secret.client_secret = "  ".to_string();
    assert!(!CredentialStore::is_complete(&missing_secret));

    let mut placeholder_token = complete.clone();
    placeholder_token.lyrics_token = CredentialStore::template().lyrics_token;
    assert!(!CredentialStore::is_complete(&placeholder_token));
}

#[test]
fn test_credentials_json_keys() {
    let json = r#"{"CLIENT_ID":"a","CLIENT_SECRET":"b","GENIUS_ACCESS_TOKEN":"c"}"#;
    let credentials: Credentials = serde_json::from_str(json).unwrap();
    assert_eq!(credentials.client_id, "a");
    assert_eq!(credentials.client_secret, "b");
    assert_eq!(credentials.lyrics_token, "c");

    // Missing keys deserialize to empty strings
    let partial: Credentials = serde_json::from_str(r#"{"CLIENT_ID":"a"}"#).unwrap();
    assert!(partial.client_secret.is_empty());
    assert!(!CredentialStore::is_complete(&partial));
}
