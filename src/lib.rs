//! Scrapify Library
//!
//! This library collects everything worth keeping about a single Spotify track:
//! track and album metadata, the album artwork, the Spotify scannable code and
//! the song lyrics scraped from Genius. Results land in one folder per track.
//!
//! # Modules
//!
//! - `assets` - Downloading binary assets (cover art, scannable codes)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration, endpoints and filesystem locations
//! - `error` - Crate-wide error type
//! - `genius` - Lyrics search, disambiguation, scraping and cleanup
//! - `management` - Persisted credentials, token cache and usage stats
//! - `reporter` - Console status output used by the business components
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Input validation and formatting helpers
//!
//! # Example
//!
//! ```
//! use scrapify::{cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await;
//!     cli::fetch_track(Some("https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b".into()), None).await;
//! }
//! ```

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod genius;
pub mod management;
pub mod reporter;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate returns this alias so errors can be
/// propagated with `?` up to the run driver, which decides whether they are
/// fatal.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Using cached access token.");
/// info!("Generating files for {}", title);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote lyrics to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal errors: the process terminates with exit code 1 right
/// after the message is printed.
///
/// # Example
///
/// ```
/// error!("Please provide a valid Spotify track URL as an argument.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a non-fatal error message with a red exclamation mark.
///
/// Same output as [`error!`] but the program keeps running. Used for failures
/// that only affect a single step, e.g. an unreachable lyrics service.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Could not find the lyrics in the page.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
