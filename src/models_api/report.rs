use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::models::StringOrNum;

use super::{game_stats::GameStats, metrics::Metrics, votes::GameVotes};

/// Document written by `--save`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiReport {
    pub input: String,
    pub universeId: String,
    pub rootPlaceId: StringOrNum,
    pub game: GameStats,
    pub votes: GameVotes,
    pub thumbnail: Option<String>,
    pub metrics: Metrics,
    pub generated_at: DateTime<Utc>,
}
