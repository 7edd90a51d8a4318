use std::path::PathBuf;

use crate::{Res, types::Stats};

use super::write_atomic;

pub const STAT_TOKENS_GENERATED: &str = "tokens_generated";
pub const STAT_TRACKS_RETRIEVED: &str = "tracks_retrieved";

impl Stats {
    /// Adds `delta` to the named counter. Unknown names are ignored and
    /// reported back as `false`.
    pub fn apply(&mut self, field: &str, delta: u64) -> bool {
        let counter = match field {
            STAT_TOKENS_GENERATED => &mut self.tokens_generated,
            STAT_TRACKS_RETRIEVED => &mut self.tracks_retrieved,
            _ => return false,
        };
        *counter = counter.saturating_add(delta);
        true
    }
}

/// Cumulative usage counters persisted across runs.
pub struct StatsManager {
    path: PathBuf,
}

impl StatsManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current counters; a missing stats file means all zeros.
    pub async fn load(&self) -> Res<Stats> {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Stats::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn persist(&self, stats: &Stats) -> Res<()> {
        let json = serde_json::to_string_pretty(stats)?;
        write_atomic(&self.path, json.as_bytes()).await
    }

    /// Read-modify-write of the stats file.
    pub async fn bump(&self, fields: &[(&str, u64)]) -> Res<Stats> {
        let mut stats = self.load().await?;
        for (field, delta) in fields {
            stats.apply(field, *delta);
        }
        self.persist(&stats).await?;
        Ok(stats)
    }
}
