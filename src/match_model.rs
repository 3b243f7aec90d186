use serde::{Deserialize, Serialize};

use crate::error::RatingError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
}

impl Team {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            conference: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Upstream feeds use a mess of labels ("pre", "pregame", "finished", ...);
/// everything is normalized to exactly these three states at construction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pre,
    Live,
    Final,
}

impl MatchStatus {
    pub fn parse(raw: &str) -> Result<Self, RatingError> {
        match raw.to_ascii_lowercase().as_str() {
            "pre" | "pregame" | "pre-game" | "scheduled" => Ok(Self::Pre),
            "live" | "in_progress" | "in-progress" => Ok(Self::Live),
            "final" | "finished" | "full-time" => Ok(Self::Final),
            other => Err(RatingError::UnknownStatus(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pre => "pre",
            Self::Live => "live",
            Self::Final => "final",
        }
    }
}

/// One fixture. Read-only after construction; the engine never mutates
/// matches, it only aggregates over them.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Match {
    category: Option<String>,
    home: Team,
    away: Team,
    score: Score,
    date: Option<String>,
    time: Option<String>,
    status: MatchStatus,
}

impl Match {
    /// Fails when a non-pre match arrives without a score; structurally
    /// invalid matches must never reach the rating engine.
    pub fn new(
        category: Option<String>,
        home: Team,
        away: Team,
        score: Option<Score>,
        date: Option<String>,
        time: Option<String>,
        status: MatchStatus,
    ) -> Result<Self, RatingError> {
        let score = match (score, status) {
            (Some(score), _) => score,
            (None, MatchStatus::Pre) => Score::default(),
            (None, status) => {
                return Err(RatingError::MissingScore {
                    home: home.name,
                    away: away.name,
                    status: status.label().to_string(),
                })
            }
        };

        Ok(Self {
            category,
            home,
            away,
            score,
            date,
            time,
            status,
        })
    }

    /// A played-out fixture, for fixtures built in code and in tests.
    pub fn completed(home: &str, away: &str, home_score: u32, away_score: u32) -> Self {
        Self {
            category: None,
            home: Team::named(home),
            away: Team::named(away),
            score: Score {
                home: home_score,
                away: away_score,
            },
            date: None,
            time: None,
            status: MatchStatus::Final,
        }
    }

    pub fn upcoming(home: &str, away: &str) -> Self {
        Self {
            category: None,
            home: Team::named(home),
            away: Team::named(away),
            score: Score::default(),
            date: None,
            time: None,
            status: MatchStatus::Pre,
        }
    }

    pub fn live(home: &str, away: &str, home_score: u32, away_score: u32) -> Self {
        Self {
            status: MatchStatus::Live,
            ..Self::completed(home, away, home_score, away_score)
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Final
    }

    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::Live
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == MatchStatus::Pre
    }

    /// Name of the winning team, or None for a draw or an unfinished match.
    pub fn winner(&self) -> Option<&str> {
        if !self.is_finished() {
            return None;
        }

        if self.score.home > self.score.away {
            return Some(&self.home.name);
        }

        if self.score.away > self.score.home {
            return Some(&self.away.name);
        }

        None
    }

    /// Name of the losing team, or None for a draw or an unfinished match.
    pub fn loser(&self) -> Option<&str> {
        if !self.is_finished() {
            return None;
        }

        if self.score.home < self.score.away {
            return Some(&self.home.name);
        }

        if self.score.away < self.score.home {
            return Some(&self.away.name);
        }

        None
    }

    pub fn is_draw(&self) -> bool {
        self.is_finished() && self.score.home == self.score.away
    }

    pub fn contains(&self, team: &str) -> bool {
        self.home.name == team || self.away.name == team
    }

    /// The other side of a fixture featuring `team`.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home.name == team {
            Some(&self.away.name)
        } else if self.away.name == team {
            Some(&self.home.name)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs. {} ({} - {})",
            self.home.name, self.away.name, self.score.home, self.score.away
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_and_loser_on_final_match() {
        let m = Match::completed("Team A", "Team B", 2, 1);
        assert_eq!(m.winner(), Some("Team A"));
        assert_eq!(m.loser(), Some("Team B"));
        assert!(!m.is_draw());
    }

    #[test]
    fn no_result_until_final() {
        let m = Match::live("Team A", "Team B", 3, 0);
        assert_eq!(m.winner(), None);
        assert_eq!(m.loser(), None);
        assert!(!m.is_draw());
    }

    #[test]
    fn draw_only_when_final_and_level() {
        assert!(Match::completed("Team A", "Team B", 1, 1).is_draw());
        assert!(!Match::live("Team A", "Team B", 1, 1).is_draw());
    }

    #[test]
    fn contains_and_opponent() {
        let m = Match::completed("Team A", "Team B", 1, 0);
        assert!(m.contains("Team A"));
        assert!(m.contains("Team B"));
        assert!(!m.contains("Team C"));
        assert_eq!(m.opponent_of("Team B"), Some("Team A"));
        assert_eq!(m.opponent_of("Team C"), None);
    }

    #[test]
    fn missing_score_rejected_unless_pregame() {
        let err = Match::new(
            None,
            Team::named("Team A"),
            Team::named("Team B"),
            None,
            None,
            None,
            MatchStatus::Final,
        );
        assert!(err.is_err());

        let ok = Match::new(
            None,
            Team::named("Team A"),
            Team::named("Team B"),
            None,
            None,
            None,
            MatchStatus::Pre,
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn status_labels_normalize() {
        assert_eq!(MatchStatus::parse("FINISHED").unwrap(), MatchStatus::Final);
        assert_eq!(MatchStatus::parse("pregame").unwrap(), MatchStatus::Pre);
        assert_eq!(MatchStatus::parse("live").unwrap(), MatchStatus::Live);
        assert!(MatchStatus::parse("abandoned").is_err());
    }
}
