use serde::{Serialize, Deserialize};

use crate::models::StringOrNum;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Creator {
    pub id: Option<StringOrNum>,
    pub targetId: Option<StringOrNum>,
    pub name: Option<String>,
    pub displayName: Option<String>,
    #[serde(rename = "type")]
    pub creator_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ExternalGame {
    pub id: Option<StringOrNum>,
    pub rootPlaceId: Option<StringOrNum>,
    pub placeId: Option<StringOrNum>,
    pub universeId: Option<StringOrNum>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub creator: Option<Creator>,
    pub price: Option<serde_json::Value>,
    pub access: Option<serde_json::Value>,
    pub playing: Option<StringOrNum>,
    pub visits: Option<StringOrNum>,
    pub maxPlayers: Option<StringOrNum>,
    pub favoritedCount: Option<StringOrNum>,
    pub created: Option<String>,
    pub createdAt: Option<String>,
    pub updated: Option<String>,
    pub updatedAt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GamesRsp {
    #[serde(default)]
    pub data: Vec<ExternalGame>,
}
