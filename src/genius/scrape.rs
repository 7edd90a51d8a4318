use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::Res;

use super::normalize::to_proper_english;

static CONTAINER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<div[^>]+data-lyrics-container="true"[^>]*>(.*?)</div>"#)
        .expect("lyrics container regex is valid")
});
static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br regex"));
static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[^>]+(?:>|$)").expect("tag regex"));
static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").expect("section regex"));
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("spaces regex"));

pub async fn fetch_page(client: &Client, url: &str) -> Res<String> {
    Ok(client.get(url).send().await?.text().await?)
}

/// Inner markup of every lyrics container on the page, joined by line
/// breaks. `None` when the page has no container at all.
pub fn extract_lyrics_block(html: &str) -> Option<String> {
    let blocks: Vec<&str> = CONTAINER_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("<br/>"))
    }
}

pub fn decode_html_entities(text: &str) -> String {
    text.replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Turns the markup of a lyrics block into a single line of plain text
/// without section markers.
pub fn clean_lyrics(block: &str) -> String {
    let text = BR_RE.replace_all(block, "\n");
    let text = SCRIPT_RE.replace_all(&text, "");
    let text = TAG_RE.replace_all(&text, "");
    let text = text.replace('\n', " ");
    let text = decode_html_entities(text.trim());
    let text = SECTION_RE.replace_all(&text, "");
    SPACES_RE.replace_all(&text, " ").trim().to_string()
}

/// Extracts, cleans and normalizes the lyrics of a Genius page.
pub fn lyrics_from_page(html: &str) -> Option<String> {
    extract_lyrics_block(html).map(|block| to_proper_english(&clean_lyrics(&block)))
}
