use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, extract::{Path, Query, State}, http::{StatusCode, Uri}, routing::get};
use tokio::{sync::RwLock, task::JoinHandle};

const EXTERNAL_DIR: &str = "./tests/integration/external";

#[derive(Clone, Default)]
pub struct AppState {
    pub calls: Vec<String>,
}

/// Stands in for apis.roblox.com, games.roblox.com and thumbnails.roblox.com,
/// answering from the json files under tests/integration/external.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
    pub api_state: Arc<RwLock<AppState>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![], api_state: Arc::new(RwLock::new(AppState::default())) }
    }

    pub async fn start(&mut self) -> Arc<RwLock<AppState>> {
        let external_mock = {
            let port = self.port;
            let state = self.api_state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_millis(200)).await; // wait for mock to start

        self.api_state.clone()
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn calls(&self) -> Vec<String> {
        self.api_state.read().await.calls.clone()
    }

    async fn serve_external_data(state: Arc<RwLock<AppState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/universes/v1/places/:place_id/universe", get(ExternalServer::get_universe_file))
            .route("/v1/games", get(ExternalServer::get_games_file))
            .route("/v1/games/votes", get(ExternalServer::get_votes_file))
            .route("/v1/games/icons", get(ExternalServer::get_icons_file))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_universe_file(Path(place_id): Path<String>, uri: Uri, State(state): State<Arc<RwLock<AppState>>>) -> Result<String, (StatusCode, String)> {
        ExternalServer::record(&state, &uri).await;
        ExternalServer::get_file_from(format!("{EXTERNAL_DIR}/universes/{place_id}.json")).await
    }

    async fn get_games_file(Query(query): Query<HashMap<String, String>>, uri: Uri, State(state): State<Arc<RwLock<AppState>>>) -> Result<String, (StatusCode, String)> {
        ExternalServer::record(&state, &uri).await;
        ExternalServer::get_universe_scoped_file("games", &query).await
    }

    async fn get_votes_file(Query(query): Query<HashMap<String, String>>, uri: Uri, State(state): State<Arc<RwLock<AppState>>>) -> Result<String, (StatusCode, String)> {
        ExternalServer::record(&state, &uri).await;
        ExternalServer::get_universe_scoped_file("votes", &query).await
    }

    async fn get_icons_file(Query(query): Query<HashMap<String, String>>, uri: Uri, State(state): State<Arc<RwLock<AppState>>>) -> Result<String, (StatusCode, String)> {
        ExternalServer::record(&state, &uri).await;
        if query.get("format").map(|e| e.as_str()) != Some("png") || !query.contains_key("size") {
            return Err((StatusCode::BAD_REQUEST, "size and format=png required".to_string()));
        }
        ExternalServer::get_universe_scoped_file("icons", &query).await
    }

    async fn record(state: &Arc<RwLock<AppState>>, uri: &Uri) {
        state.write().await.calls.push(uri.to_string());
    }

    async fn get_universe_scoped_file(dir: &str, query: &HashMap<String, String>) -> Result<String, (StatusCode, String)> {
        match query.get("universeIds") {
            Some(universe_id) => ExternalServer::get_file_from(format!("{EXTERNAL_DIR}/{dir}/{universe_id}.json")).await,
            None => Err((StatusCode::BAD_REQUEST, "universeIds missing".to_string())),
        }
    }

    async fn get_file_from(path: String) -> Result<String, (StatusCode, String)> {
        tokio::fs::read_to_string(&path).await
            .map_err(|err| (StatusCode::NOT_FOUND, format!("File not found: {}", err)))
    }
}
