use once_cell::sync::Lazy;
use regex::Regex;

static PRONOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:i'm|i'll|i'd|i've|i'ma|ima|i)\b").expect("pronoun regex is valid")
});

/// Upper-cases the first character of the text and of every sentence.
///
/// A sentence starts after `.`, `!` or `?` followed by whitespace; that
/// whitespace run is replaced by a single space.
pub fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_start = true;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if at_start {
            out.extend(c.to_uppercase());
            at_start = false;
        } else {
            out.push(c);
        }

        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
            at_start = true;
        }
    }

    out
}

/// Upper-cases the standalone pronoun "i" and its contractions.
pub fn capitalize_pronouns(text: &str) -> String {
    PRONOUN_RE
        .replace_all(text, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// `"hello world. i'm fine! i love it."` -> `"Hello world. I'M fine! I love it."`
pub fn to_proper_english(text: &str) -> String {
    capitalize_pronouns(&capitalize_sentences(&text.to_lowercase()))
}
