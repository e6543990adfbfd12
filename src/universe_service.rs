use anyhow::{anyhow, Result};
use tracing::log;

use crate::models::{PlaceId, UniverseId};
use crate::models_external::universe::UniverseRsp;
use crate::rest_client::RestClient;

pub struct UniverseService;

impl UniverseService {
    pub async fn resolve(client: &RestClient, place_id: &PlaceId) -> Result<UniverseId> {
        let url = client.get_universe_url(place_id);
        let rsp: UniverseRsp = client.get_call(&url).await?;
        let universe_id = rsp.universe_id().ok_or_else(|| anyhow!("Response without universeId."))?;
        log::info!("[UNIVERSE] place {place_id} -> universe {universe_id}");
        Ok(universe_id)
    }
}
