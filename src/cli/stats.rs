use tabled::Table;

use crate::{
    config::Paths,
    error,
    management::{STAT_TOKENS_GENERATED, STAT_TRACKS_RETRIEVED, StatsManager},
    types::{Stats, StatsTableRow},
};

pub fn stats_table_rows(stats: &Stats) -> Vec<StatsTableRow> {
    vec![
        StatsTableRow {
            counter: STAT_TOKENS_GENERATED.to_string(),
            value: stats.tokens_generated,
        },
        StatsTableRow {
            counter: STAT_TRACKS_RETRIEVED.to_string(),
            value: stats.tracks_retrieved,
        },
    ]
}

/// Prints the cumulative usage counters as a table.
pub async fn stats() {
    let paths = Paths::for_user();
    let stats = match StatsManager::new(&paths.stats).load().await {
        Ok(stats) => stats,
        Err(e) => error!("Failed to read stats from {}: {}", paths.stats.display(), e),
    };

    println!("{}", Table::new(stats_table_rows(&stats)));
}
