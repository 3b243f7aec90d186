//! The ranking index abstraction: every rating method, one output shape.
//!
//! An index turns a match collection into a ranked `(rank, team, value)` list
//! covering the whole team universe. Ordering is uniform: value first (each
//! variant documents its direction), team name ascending as the tie-break,
//! ranks assigned 1..T after the sort with no shared ranks.

mod basic;
mod colley;
mod elo;
mod record;
mod rpi;
mod spi;
mod win_percentage;

pub use basic::{DrawsIndex, LossesIndex, MatchesPlayedIndex, WinsIndex};
pub use colley::ColleyIndex;
pub use elo::EloIndex;
pub use record::{Record, RecordIndex};
pub use rpi::RpiIndex;
pub use spi::SpiIndex;
pub use win_percentage::WinPercentageIndex;

use std::cmp::Ordering;

use serde::Serialize;

use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<V> {
    pub rank: usize,
    pub team: String,
    pub value: V,
}

pub trait RankingIndex {
    type Value;

    /// Rank every team in the universe. Only the Colley variant can currently
    /// fail (singular system); the rest always return `Ok`.
    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<Self::Value>>, RatingError>;
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Direction {
    Descending,
    Ascending,
}

pub(crate) fn rank_sorted<V: PartialOrd>(
    mut pairs: Vec<(String, V)>,
    direction: Direction,
) -> Vec<RankedEntry<V>> {
    pairs.sort_by(|a, b| {
        let by_value = a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal);
        let by_value = match direction {
            Direction::Descending => by_value.reverse(),
            Direction::Ascending => by_value,
        };
        by_value.then_with(|| a.0.cmp(&b.0))
    });

    pairs
        .into_iter()
        .enumerate()
        .map(|(i, (team, value))| RankedEntry {
            rank: i + 1,
            team,
            value,
        })
        .collect()
}

/// Strip values down to the `(rank, team)` pairs the measurement harness
/// consumes.
pub fn rank_pairs<V>(entries: &[RankedEntry<V>]) -> Vec<(usize, String)> {
    entries
        .iter()
        .map(|e| (e.rank, e.team.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_contiguous_and_name_breaks_ties() {
        let entries = rank_sorted(
            vec![
                ("Team C".to_string(), 1),
                ("Team A".to_string(), 1),
                ("Team B".to_string(), 3),
            ],
            Direction::Descending,
        );

        assert_eq!(
            entries,
            vec![
                RankedEntry { rank: 1, team: "Team B".to_string(), value: 3 },
                RankedEntry { rank: 2, team: "Team A".to_string(), value: 1 },
                RankedEntry { rank: 3, team: "Team C".to_string(), value: 1 },
            ]
        );
    }

    #[test]
    fn ascending_direction_flips_values_not_names() {
        let entries = rank_sorted(
            vec![
                ("Team B".to_string(), 2),
                ("Team A".to_string(), 2),
                ("Team C".to_string(), 0),
            ],
            Direction::Ascending,
        );

        assert_eq!(entries[0].team, "Team C");
        assert_eq!(entries[1].team, "Team A");
        assert_eq!(entries[2].team, "Team B");
    }
}
