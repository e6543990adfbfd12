use thiserror::Error;
use tracing::log;

use crate::models::{InvalidPlaceInput, PlaceId, UniverseId};
use crate::models_api::{game_stats::GameStats, metrics::Metrics, votes::GameVotes};
use crate::rest_client::RestClient;
use crate::stats_service::StatsService;
use crate::thumbnail_service::ThumbnailService;
use crate::universe_service::UniverseService;
use crate::vote_service::VoteService;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    InvalidInput(#[from] InvalidPlaceInput),

    #[error("Failed to get universeId: {0:#}")]
    UniverseLookup(anyhow::Error),

    #[error("Failed to get game data: {0:#}")]
    GameStats(anyhow::Error),
}

/// Everything gathered for one title in a single run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub input: String,
    pub place_id: PlaceId,
    pub universe_id: UniverseId,
    pub stats: GameStats,
    pub votes: GameVotes,
    pub thumbnail: Option<String>,
    pub metrics: Metrics,
}

pub struct Analyzer;

impl Analyzer {
    pub async fn analyze(client: &RestClient, input: &str) -> Result<Analysis, AnalyzeError> {
        let place_id: PlaceId = input.parse()?;

        let universe_id = UniverseService::resolve(client, &place_id).await
            .map_err(AnalyzeError::UniverseLookup)?;
        let stats = StatsService::fetch(client, &universe_id).await
            .map_err(AnalyzeError::GameStats)?;
        let votes = VoteService::fetch(client, &universe_id).await;
        let thumbnail = ThumbnailService::fetch(client, &universe_id).await;

        let metrics = Metrics::compute(&stats, &votes);
        log::info!("[ANALYZE] {} visits {} favorites {} up {} down {}",
            universe_id, stats.visits, stats.favoritedCount, votes.upVotes, votes.downVotes);

        Ok(Analysis {
            input: input.to_string(),
            place_id,
            universe_id,
            stats,
            votes,
            thumbnail,
            metrics,
        })
    }
}
