use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Thumbnail {
    pub imageUrl: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ThumbnailRsp {
    #[serde(default)]
    pub data: Vec<Thumbnail>,
}

impl ThumbnailRsp {
    pub fn image_url(&self) -> Option<String> {
        self.data.first()
            .and_then(|e| e.imageUrl.clone())
            .filter(|e| !e.is_empty())
    }
}
