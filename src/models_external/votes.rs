use serde::{Serialize, Deserialize};

use crate::models::StringOrNum;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VoteRecord {
    pub upVotes: Option<StringOrNum>,
    pub upvoteCount: Option<StringOrNum>,
    pub downVotes: Option<StringOrNum>,
    pub downvoteCount: Option<StringOrNum>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct VotesRsp {
    pub data: Option<Vec<VoteRecord>>,
    pub Data: Option<Vec<VoteRecord>>,
}

impl VotesRsp {
    pub fn first(&self) -> Option<&VoteRecord> {
        [&self.data, &self.Data].into_iter()
            .flatten()
            .find(|e| !e.is_empty())
            .and_then(|e| e.first())
    }
}
