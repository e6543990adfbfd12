use serde::{Serialize, Deserialize};

use crate::models::{StringOrNum, UniverseId, first_non_empty, first_truthy};
use crate::models_external::game::{Creator, ExternalGame};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GameStats {
    pub name: Option<String>,
    pub description: Option<String>,
    pub visits: i64,
    pub playing: Option<i64>,
    pub maxPlayers: i64,
    pub creator: Option<String>,
    pub creator_type: Option<String>,
    pub creator_id: Option<StringOrNum>,
    pub favoritedCount: i64,
    pub universeId: String,
    pub rootPlaceId: Option<i64>,
    pub access: Option<serde_json::Value>,
    pub price: Option<serde_json::Value>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub id: Option<i64>,
}

impl GameStats {
    pub fn from_external(g: ExternalGame, universe_id: &UniverseId) -> Self {
        let creator = g.creator.unwrap_or_default();
        let Creator { id, targetId, name, displayName, creator_type } = creator;
        GameStats {
            name: g.name,
            description: g.description,
            visits: g.visits.map(|e| e.to_num()).unwrap_or_default(),
            playing: g.playing.map(|e| e.to_num()),
            maxPlayers: g.maxPlayers.map(|e| e.to_num()).unwrap_or_default(),
            creator: first_non_empty(&[&name, &displayName]),
            creator_type,
            creator_id: first_truthy(&[&id, &targetId]).cloned(),
            favoritedCount: g.favoritedCount.map(|e| e.to_num()).unwrap_or_default(),
            universeId: first_truthy(&[&g.universeId])
                .map(|e| e.to_str())
                .unwrap_or_else(|| universe_id.0.clone()),
            rootPlaceId: first_truthy(&[&g.rootPlaceId, &g.placeId]).map(|e| e.to_num()),
            access: g.access,
            price: g.price,
            created: first_non_empty(&[&g.created, &g.createdAt]),
            updated: first_non_empty(&[&g.updated, &g.updatedAt]),
            id: first_truthy(&[&g.id, &g.placeId]).map(|e| e.to_num()),
        }
    }
}
