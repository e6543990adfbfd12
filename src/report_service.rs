use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, Utc};
use tracing::log;

use crate::analyzer::Analysis;
use crate::db::Db;
use crate::models::{StringOrNum, UniverseId};
use crate::models_api::report::ApiReport;

const NA: &str = "N/A";
const REPORT_PREFIX: &str = "roblox_report";
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ"];

pub struct ReportService;

impl ReportService {
    pub fn render(analysis: &Analysis, show_full_desc: bool, description_limit: usize) -> String {
        let stats = &analysis.stats;
        let votes = &analysis.votes;
        let metrics = &analysis.metrics;
        let sep = "=".repeat(60);
        let mut lines: Vec<String> = vec![];

        lines.push(String::new());
        lines.push(sep.clone());
        lines.push("ROBLOX GAME ANALYZER - DETAILED REPORT".to_string());
        lines.push(sep.clone());
        lines.push(String::new());

        let desc = or_na(stats.description.as_deref());
        lines.push(format!("Input PlaceID/URL: {}", analysis.input));
        lines.push(format!("Name: {}", or_na(stats.name.as_deref())));
        if show_full_desc {
            lines.push(format!("Description: {desc}"));
        } else {
            lines.push(format!("Description: {}", truncate(desc, description_limit)));
        }
        lines.push(String::new());
        lines.push(format!("Universe ID: {}", or_na(Some(stats.universeId.as_str()))));
        lines.push(format!("Root/Representative Place ID: {}", safe_str(stats.rootPlaceId.as_ref())));
        lines.push(format!("Place/ID (from API): {}", safe_str(stats.id.as_ref())));
        lines.push(format!("Creator: {} (id: {}, type: {})",
            or_na(stats.creator.as_deref()),
            safe_str(stats.creator_id.as_ref()),
            safe_str(stats.creator_type.as_ref())));
        lines.push(String::new());

        lines.push("-- Dates --".to_string());
        lines.push(format!("Created: {}", human_readable_date(stats.created.as_deref())));
        lines.push(format!("Last updated: {}", human_readable_date(stats.updated.as_deref())));
        lines.push(String::new());

        lines.push("-- Activity & Capacity --".to_string());
        lines.push(format!("Total visits: {}", group_thousands(stats.visits)));
        lines.push(format!("Currently playing (CCU reported): {}", safe_str(stats.playing.as_ref())));
        lines.push(format!("Max players (server cap): {}", stats.maxPlayers));
        if let Some(occupancy) = metrics.occupancy_percent {
            lines.push(format!("Occupancy: {occupancy:.2}% of max players"));
        }
        lines.push(String::new());

        lines.push("-- Social / Feedback --".to_string());
        lines.push(format!("Favorites: {}", group_thousands(stats.favoritedCount)));
        lines.push(format!("Likes (upVotes): {}  Downvotes: {}", group_thousands(votes.upVotes), group_thousands(votes.downVotes)));
        if let Some(ratio) = metrics.upvote_ratio_percent {
            lines.push(format!("Upvote ratio: {ratio:.2}%"));
        }
        lines.push(format!("Engagement (favorites/visits): {:.4}%", metrics.engagement_favorites_percent));
        lines.push(format!("Engagement (likes/visits): {:.6}%", metrics.engagement_likes_percent));
        lines.push(format!("Likes per 1k visits: {:.6}", metrics.likes_per_1000_visits));
        lines.push(String::new());

        lines.push("-- Misc --".to_string());
        lines.push(format!("Price (if any): {}", safe_value(stats.price.as_ref())));
        lines.push(format!("Access type: {}", safe_value(stats.access.as_ref())));
        match &analysis.thumbnail {
            Some(url) => lines.push(format!("Thumbnail / Icon URL: {url}")),
            None => lines.push(format!("Thumbnail: {NA}")),
        }
        lines.push(String::new());
        lines.push(sep);
        lines.push(String::new());

        lines.join("\n") + "\n"
    }

    pub fn to_report(analysis: &Analysis) -> ApiReport {
        let stats = &analysis.stats;
        ApiReport {
            input: analysis.input.clone(),
            universeId: stats.universeId.clone(),
            rootPlaceId: stats.rootPlaceId
                .map(StringOrNum::Number)
                .unwrap_or_else(|| StringOrNum::String(NA.to_string())),
            game: stats.clone(),
            votes: analysis.votes,
            thumbnail: analysis.thumbnail.clone(),
            metrics: analysis.metrics,
            generated_at: Utc::now(),
        }
    }

    /// Writes `roblox_report_{universe_id}.json` into `dir`, keyed by the
    /// resolved universe id rather than the one echoed by the games endpoint.
    pub fn save(analysis: &Analysis, dir: &Path) -> std::io::Result<PathBuf> {
        let report = ReportService::to_report(analysis);
        let db: Db<UniverseId, ApiReport> = Db::new(dir, REPORT_PREFIX);
        let path = db.write(&analysis.universe_id, &report)?;
        log::info!("[REPORT] Saved {}", path.display());
        Ok(path)
    }
}

fn or_na(s: Option<&str>) -> &str {
    s.filter(|e| !e.is_empty()).unwrap_or(NA)
}

fn safe_str<T: ToString>(v: Option<&T>) -> String {
    v.map(|e| e.to_string()).unwrap_or_else(|| NA.to_string())
}

fn safe_value(v: Option<&serde_json::Value>) -> String {
    match v {
        None | Some(serde_json::Value::Null) => NA.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn truncate(s: &str, limit: usize) -> String {
    if s.chars().count() > limit {
        let head: String = s.chars().take(limit).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

pub fn human_readable_date(s: Option<&str>) -> String {
    let s = match s {
        Some(s) if !s.is_empty() => s,
        _ => return NA.to_string(),
    };
    let parsed = DATE_FORMATS.iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)));
    match parsed {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => s.to_string(),
    }
}

pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}
