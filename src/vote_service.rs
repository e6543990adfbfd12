use tracing::log;

use crate::LogResult;
use crate::models::UniverseId;
use crate::models_api::votes::GameVotes;
use crate::models_external::votes::VotesRsp;
use crate::rest_client::RestClient;

pub struct VoteService;

impl VoteService {
    /// Never fails; unreachable or empty vote data counts as zero votes.
    pub async fn fetch(client: &RestClient, universe_id: &UniverseId) -> GameVotes {
        let url = client.get_votes_url(universe_id);
        let rsp: Option<VotesRsp> = client.get_call(&url).await.ok_log("[VOTES] Fetch failed");
        let votes = rsp.as_ref()
            .and_then(|e| e.first())
            .map(GameVotes::from)
            .unwrap_or_default();
        log::info!("[VOTES] {universe_id} up {} down {}", votes.upVotes, votes.downVotes);
        votes
    }
}
