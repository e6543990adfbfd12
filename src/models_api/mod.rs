pub mod game_stats;
pub mod votes;
pub mod metrics;
pub mod report;
