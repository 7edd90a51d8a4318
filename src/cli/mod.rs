//! # CLI Module
//!
//! Command implementations behind the `scrapify` binary.
//!
//! - [`fetch_track`] - the default command: collects metadata, artwork,
//!   scannable code and lyrics for one track URL
//! - [`stats`] - prints the cumulative usage counters
//!
//! ## Data Flow
//!
//! ```text
//! track URL
//!     ↓  CredentialStore          (credentials file, template on first run)
//!     ↓  TokenManager             (cached or freshly exchanged token)
//!     ↓  spotify::tracks          (track + album metadata → data.json)
//!     ├─ assets                   (image.png, scannable.svg)
//!     └─ genius                   (lyrics.txt)
//!     ↓  StatsManager             (tracks_retrieved += 1)
//! ```
//!
//! Image, scannable and lyrics run concurrently; all three files are written
//! before the run reports success.
//!
//! ## Error Handling
//!
//! Configuration and upstream failures end the process with exit code 1 via
//! the [`error!`](crate::error!) macro. Lyrics failures never do: they leave a
//! placeholder `lyrics.txt` behind and the run still succeeds.

mod stats;
mod track;

pub use stats::stats;
pub use stats::stats_table_rows;
pub use track::DATA_FILE;
pub use track::IMAGE_FILE;
pub use track::SCANNABLE_FILE;
pub use track::TrackRun;
pub use track::fetch_track;
pub use track::run;
pub use track::write_track_data;
