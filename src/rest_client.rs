use std::time::Instant;

use anyhow::{Context, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::log;

use crate::config_handler::Config;
use crate::models::{PlaceId, UniverseId};

pub struct RestClient {
    client: reqwest::Client,
    config: Config,
}

impl RestClient {
    pub fn new(config: Config) -> Result<RestClient> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(RestClient { client, config })
    }

    pub fn get_universe_url(&self, place_id: &PlaceId) -> String {
        format!("{}/universes/v1/places/{place_id}/universe", base(&self.config.apis_url))
    }

    pub fn get_games_url(&self, universe_id: &UniverseId) -> String {
        format!("{}/v1/games?universeIds={universe_id}", base(&self.config.games_url))
    }

    pub fn get_votes_url(&self, universe_id: &UniverseId) -> String {
        format!("{}/v1/games/votes?universeIds={universe_id}", base(&self.config.games_url))
    }

    pub fn get_thumbnail_url(&self, universe_id: &UniverseId) -> String {
        format!("{}/v1/games/icons?universeIds={universe_id}&size={}&format=png",
            base(&self.config.thumbnails_url), self.config.thumbnail_size)
    }

    pub async fn get_call<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let before = Instant::now();
        let rsp = self.client.get(url).send().await
            .with_context(|| format!("GET {url} failed"))?;
        log::info!("[REST] Call {url} {} {:.2?}", rsp.status(), before.elapsed());
        let rsp = rsp.error_for_status()?;
        let res = rsp.json().await
            .with_context(|| format!("Invalid JSON from {url}"))?;
        Ok(res)
    }
}

fn base(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RestClient {
        RestClient::new(Config::default()).unwrap()
    }

    #[test]
    fn test_urls() {
        let c = client();
        let universe = UniverseId("13058".to_string());
        assert_eq!(c.get_universe_url(&PlaceId("1818".to_string())), "https://apis.roblox.com/universes/v1/places/1818/universe");
        assert_eq!(c.get_games_url(&universe), "https://games.roblox.com/v1/games?universeIds=13058");
        assert_eq!(c.get_votes_url(&universe), "https://games.roblox.com/v1/games/votes?universeIds=13058");
        assert_eq!(c.get_thumbnail_url(&universe), "https://thumbnails.roblox.com/v1/games/icons?universeIds=13058&size=150x150&format=png");
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let c = RestClient::new(Config::default().with_base_url("http://localhost:9000/")).unwrap();
        assert_eq!(c.get_games_url(&UniverseId("1".to_string())), "http://localhost:9000/v1/games?universeIds=1");
    }
}
