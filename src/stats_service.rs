use anyhow::{anyhow, Result};

use crate::models::UniverseId;
use crate::models_api::game_stats::GameStats;
use crate::models_external::game::GamesRsp;
use crate::rest_client::RestClient;

pub struct StatsService;

impl StatsService {
    pub async fn fetch(client: &RestClient, universe_id: &UniverseId) -> Result<GameStats> {
        let url = client.get_games_url(universe_id);
        let rsp: GamesRsp = client.get_call(&url).await?;
        let game = rsp.data.into_iter().next()
            .ok_or_else(|| anyhow!("Empty response from the games endpoint."))?;
        Ok(GameStats::from_external(game, universe_id))
    }
}
