use serde::{Serialize, Deserialize};

use super::{game_stats::GameStats, votes::GameVotes};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub engagement_favorites_percent: f64,
    pub engagement_likes_percent: f64,
    pub likes_per_1000_visits: f64,
    pub occupancy_percent: Option<f64>,
    pub upvote_ratio_percent: Option<f64>,
}

impl Metrics {
    pub fn compute(stats: &GameStats, votes: &GameVotes) -> Self {
        let visits = stats.visits as f64;
        let favs = stats.favoritedCount as f64;
        let up = votes.upVotes as f64;

        let per_visit = |n: f64, scale: f64| if stats.visits > 0 { n / visits * scale } else { 0.0 };

        let total = up + votes.downVotes as f64;
        let upvote_ratio_percent = if total > 0.0 { Some(up / total * 100.0) } else { None };
        let occupancy_percent = match (stats.playing, stats.maxPlayers) {
            (Some(playing), max) if max > 0 => Some(playing as f64 / max as f64 * 100.0),
            _ => None,
        };

        Metrics {
            engagement_favorites_percent: per_visit(favs, 100.0),
            engagement_likes_percent: per_visit(up, 100.0),
            likes_per_1000_visits: per_visit(up, 1000.0),
            occupancy_percent,
            upvote_ratio_percent,
        }
    }
}
