use crate::LogResult;
use crate::models::UniverseId;
use crate::models_external::thumbnail::ThumbnailRsp;
use crate::rest_client::RestClient;

pub struct ThumbnailService;

impl ThumbnailService {
    pub async fn fetch(client: &RestClient, universe_id: &UniverseId) -> Option<String> {
        let url = client.get_thumbnail_url(universe_id);
        let rsp: Option<ThumbnailRsp> = client.get_call(&url).await.ok_log("[THUMBNAIL] Fetch failed");
        rsp.and_then(|e| e.image_url())
    }
}
