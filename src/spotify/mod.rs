//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API Scrapify needs.
//!
//! ## Architecture
//!
//! ```text
//! Run driver (cli::track)
//!          ↓
//! Token cache (management::TokenManager)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     └── Tracks (track + album metadata, scannable URL)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ### Authentication Module
//!
//! [`auth`] - Exchanges the application's client id and secret for a bearer
//! token using HTTP Basic authentication. Caching and expiry handling live in
//! [`crate::management::TokenManager`]; this module only talks to the network.
//!
//! ### Tracks Module
//!
//! [`tracks`] - Reads a track, follows its album URI to read the album, and
//! folds both into a [`crate::types::TrackRecord`].
//!
//! ## Error Handling
//!
//! Every request goes through `error_for_status`, so a non-success status or a
//! body that is not the expected JSON surfaces as [`crate::Error::Http`]. There
//! are no retries: the run driver treats these errors as fatal.

pub mod auth;
pub mod tracks;
