//! JSON ingestion boundary.
//!
//! This is where structural validation happens: status labels are normalized,
//! blank scores are coerced to zero, and anything malformed is rejected
//! before it can reach the rating engine. The engine itself assumes every
//! `Match` it sees is well formed.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::RatingError;
use crate::match_model::{Match, MatchStatus, Score, Team};

#[derive(Deserialize, Debug)]
struct MatchFeed {
    matches: Vec<RawMatch>,
}

#[derive(Deserialize, Debug)]
struct RawMatch {
    #[serde(default)]
    category: Option<String>,
    #[serde(rename = "homeTeam")]
    home_team: String,
    #[serde(rename = "awayTeam")]
    away_team: String,
    #[serde(default, rename = "homeConference")]
    home_conference: Option<String>,
    #[serde(default, rename = "awayConference")]
    away_conference: Option<String>,
    #[serde(default, rename = "homeScore")]
    home_score: Option<Value>,
    #[serde(default, rename = "awayScore")]
    away_score: Option<Value>,
    #[serde(default, rename = "startDate")]
    start_date: Option<String>,
    #[serde(default, rename = "startTime")]
    start_time: Option<String>,
    status: String,
}

// Scoreboard feeds deliver scores as numbers, numeric strings, or blank
// strings for games that have not kicked off. Blank coerces to zero; null or
// absent means "no score"; anything else is rejected.
fn coerce_score(value: &Option<Value>) -> Result<Option<u32>, RatingError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(Some(0)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| RatingError::InvalidScore(s.clone())),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| RatingError::InvalidScore(n.to_string())),
        Some(other) => Err(RatingError::InvalidScore(other.to_string())),
    }
}

impl RawMatch {
    fn into_match(self) -> Result<Match, RatingError> {
        let status = MatchStatus::parse(&self.status)?;

        let score = match (coerce_score(&self.home_score)?, coerce_score(&self.away_score)?) {
            (Some(home), Some(away)) => Some(Score { home, away }),
            (None, None) => None,
            // One side reported, the other missing: only acceptable before
            // kickoff, where the score is discarded anyway.
            _ if status == MatchStatus::Pre => None,
            _ => {
                return Err(RatingError::MissingScore {
                    home: self.home_team,
                    away: self.away_team,
                    status: status.label().to_string(),
                })
            }
        };

        Match::new(
            self.category,
            Team {
                name: self.home_team,
                conference: self.home_conference,
            },
            Team {
                name: self.away_team,
                conference: self.away_conference,
            },
            score,
            self.start_date,
            self.start_time,
            status,
        )
    }
}

/// Parse a match feed from a JSON document.
pub fn parse_matches(json: &str) -> Result<Vec<Match>, RatingError> {
    let feed: MatchFeed = serde_json::from_str(json)?;

    let matches = feed
        .matches
        .into_iter()
        .map(RawMatch::into_match)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = matches.len(), "parsed match feed");
    Ok(matches)
}

/// Read and parse a match feed from a file.
pub fn load_matches(path: &Path) -> Result<Vec<Match>, RatingError> {
    let data = fs::read_to_string(path)?;
    parse_matches(&data)
}
