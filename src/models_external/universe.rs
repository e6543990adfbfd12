use serde::{Serialize, Deserialize};

use crate::models::{StringOrNum, UniverseId, first_truthy};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UniverseRsp {
    #[serde(default)]
    pub universeId: Option<StringOrNum>,
    #[serde(default)]
    pub UniverseId: Option<StringOrNum>,
    #[serde(default)]
    pub UniverseID: Option<StringOrNum>,
}

impl UniverseRsp {
    pub fn universe_id(&self) -> Option<UniverseId> {
        first_truthy(&[&self.universeId, &self.UniverseId, &self.UniverseID])
            .map(|e| e.to_str())
            .filter(|e| e.chars().all(|c| c.is_ascii_digit()))
            .map(UniverseId)
    }
}
