use serde::{Serialize, Deserialize};

use crate::models::first_truthy;
use crate::models_external::votes::VoteRecord;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameVotes {
    pub upVotes: i64,
    pub downVotes: i64,
}

impl From<&VoteRecord> for GameVotes {
    fn from(v: &VoteRecord) -> Self {
        GameVotes {
            upVotes: first_truthy(&[&v.upVotes, &v.upvoteCount]).map(|e| e.to_num()).unwrap_or_default(),
            downVotes: first_truthy(&[&v.downVotes, &v.downvoteCount]).map(|e| e.to_num()).unwrap_or_default(),
        }
    }
}

impl GameVotes {
    pub fn total(&self) -> i64 {
        self.upVotes.saturating_add(self.downVotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models_external::votes::VotesRsp;

    #[test]
    fn test_votes_from_record() {
        let rsp: VotesRsp = serde_json::from_str(r#"{"data": [{"id": 13058, "upVotes": 900, "downVotes": 100}]}"#).unwrap();
        let votes: GameVotes = rsp.first().unwrap().into();
        assert_eq!(votes, GameVotes { upVotes: 900, downVotes: 100 });
        assert_eq!(votes.total(), 1000);
    }

    #[test]
    fn test_votes_alternative_keys() {
        let rsp: VotesRsp = serde_json::from_str(r#"{"Data": [{"upvoteCount": "3", "downvoteCount": 1}]}"#).unwrap();
        let votes: GameVotes = rsp.first().unwrap().into();
        assert_eq!(votes, GameVotes { upVotes: 3, downVotes: 1 });
    }

    #[test]
    fn test_votes_empty() {
        let rsp: VotesRsp = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(rsp.first().is_none());
    }
}
