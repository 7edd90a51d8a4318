use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Res};

static TRACK_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(open\.spotify\.com|spotify\.com)/track/([a-zA-Z0-9]{22})$")
        .expect("track url regex is valid")
});

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn is_valid_track_url(url: &str) -> bool {
    TRACK_URL_RE.is_match(url)
}

/// Validates a track URL and returns its 22 character id.
pub fn track_id_from_url(url: &str) -> Res<String> {
    TRACK_URL_RE
        .captures(url)
        .and_then(|caps| caps.get(3))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| Error::InvalidTrackUrl(url.to_string()))
}

/// `spotify:album:4yP0hdKOZPNshxUOjY0cZj` -> `4yP0hdKOZPNshxUOjY0cZj`
pub fn album_id_from_uri(uri: &str) -> String {
    uri.split(':').skip(2).collect::<Vec<_>>().join(":")
}

pub fn day_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Formats a Spotify release date as `"21st Jan 2023"`.
///
/// Year and month precision dates fall back to the first day of the period.
/// Anything else is returned unchanged.
pub fn format_release_date(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{date}-01-01"), "%Y-%m-%d"));

    match parsed {
        Ok(d) => format!(
            "{day}{suffix} {month} {year}",
            day = d.day(),
            suffix = day_suffix(d.day()),
            month = MONTHS[d.month0() as usize],
            year = d.year()
        ),
        Err(_) => date.to_string(),
    }
}
