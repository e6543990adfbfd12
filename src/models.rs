use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

lazy_static! {
    static ref GAME_URL: Regex = Regex::new(r"/games/(\d+)").unwrap();
    static ref NUMERIC: Regex = Regex::new(r"^\d+$").unwrap();
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceId(pub String);

impl FromStr for PlaceId {
    type Err = InvalidPlaceInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(c) = GAME_URL.captures(s) {
            return Ok(PlaceId(c[1].to_string()));
        }
        if NUMERIC.is_match(s) {
            return Ok(PlaceId(s.to_string()));
        }
        Err(InvalidPlaceInput)
    }
}

impl Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniverseId(pub String);

impl Display for UniverseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidPlaceInput;

impl Display for InvalidPlaceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid link. Paste the game link (e.g. https://www.roblox.com/games/123456789/Name) or just the PlaceID.")
    }
}

impl std::error::Error for InvalidPlaceInput {}

/// Scalar as the Roblox endpoints hand it out: ids and counts arrive as
/// numbers most of the time, as strings some of the time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringOrNum {
    Number(i64),
    Float(f64),
    String(String),
}

impl StringOrNum {
    pub fn to_num(&self) -> i64 {
        match self {
            StringOrNum::Number(n) => *n,
            StringOrNum::Float(f) => *f as i64,
            StringOrNum::String(str) => {
                let str = str.trim();
                str.parse::<i64>().ok()
                    .or_else(|| str.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or(0)
            }
        }
    }

    pub fn to_str(&self) -> String {
        match self {
            StringOrNum::Number(n) => n.to_string(),
            StringOrNum::Float(f) => f.to_string(),
            StringOrNum::String(str) => str.to_owned(),
        }
    }

    /// Zero and empty strings count as missing when walking alias chains.
    pub fn is_truthy(&self) -> bool {
        match self {
            StringOrNum::Number(n) => *n != 0,
            StringOrNum::Float(f) => *f != 0.0,
            StringOrNum::String(str) => !str.is_empty(),
        }
    }
}

impl Display for StringOrNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// First value in `candidates` that is present and truthy.
pub fn first_truthy<'a>(candidates: &[&'a Option<StringOrNum>]) -> Option<&'a StringOrNum> {
    candidates.iter()
        .copied()
        .filter_map(Option::as_ref)
        .find(|e| e.is_truthy())
}

pub fn first_non_empty(candidates: &[&Option<String>]) -> Option<String> {
    candidates.iter()
        .copied()
        .filter_map(Option::as_ref)
        .find(|e| !e.is_empty())
        .cloned()
}
