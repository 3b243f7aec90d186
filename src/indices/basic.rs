//! Counting indices: wins, losses, draws, matches played.

use std::collections::BTreeMap;

use crate::calculations::team_names;
use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;

use super::{rank_sorted, Direction, RankedEntry, RankingIndex};

pub(super) fn zeroed_counts(matches: &[Match], ctx: &RatingContext) -> BTreeMap<String, u32> {
    team_names(matches, ctx)
        .into_iter()
        .map(|team| (team, 0))
        .collect()
}

/// Wins per team, most first.
#[derive(Debug, Default)]
pub struct WinsIndex;

impl RankingIndex for WinsIndex {
    type Value = u32;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<u32>>, RatingError> {
        let mut counts = zeroed_counts(matches, ctx);

        for m in matches.iter().filter(|m| ctx.admits(m)) {
            if let Some(winner) = m.winner() {
                *counts.entry(winner.to_string()).or_insert(0) += 1;
            }
        }

        Ok(rank_sorted(counts.into_iter().collect(), Direction::Descending))
    }
}

/// Losses per team, fewest first.
#[derive(Debug, Default)]
pub struct LossesIndex;

impl RankingIndex for LossesIndex {
    type Value = u32;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<u32>>, RatingError> {
        let mut counts = zeroed_counts(matches, ctx);

        for m in matches.iter().filter(|m| ctx.admits(m)) {
            if let Some(loser) = m.loser() {
                *counts.entry(loser.to_string()).or_insert(0) += 1;
            }
        }

        Ok(rank_sorted(counts.into_iter().collect(), Direction::Ascending))
    }
}

/// Draws per team, most first.
#[derive(Debug, Default)]
pub struct DrawsIndex;

impl RankingIndex for DrawsIndex {
    type Value = u32;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<u32>>, RatingError> {
        let mut counts = zeroed_counts(matches, ctx);

        for m in matches.iter().filter(|m| ctx.admits(m) && m.is_draw()) {
            *counts.entry(m.home().name.clone()).or_insert(0) += 1;
            *counts.entry(m.away().name.clone()).or_insert(0) += 1;
        }

        Ok(rank_sorted(counts.into_iter().collect(), Direction::Descending))
    }
}

/// Matches played per team, any status, most first.
#[derive(Debug, Default)]
pub struct MatchesPlayedIndex;

impl RankingIndex for MatchesPlayedIndex {
    type Value = u32;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<u32>>, RatingError> {
        let mut counts = zeroed_counts(matches, ctx);

        for m in matches.iter().filter(|m| ctx.admits(m)) {
            *counts.entry(m.home().name.clone()).or_insert(0) += 1;
            *counts.entry(m.away().name.clone()).or_insert(0) += 1;
        }

        Ok(rank_sorted(counts.into_iter().collect(), Direction::Descending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> Vec<Match> {
        vec![
            Match::completed("Team A", "Team B", 2, 0),
            Match::completed("Team B", "Team C", 1, 0),
            Match::completed("Team C", "Team A", 1, 0),
        ]
    }

    #[test]
    fn wins_on_cycle_breaks_ties_alphabetically() {
        let ctx = RatingContext::default();
        let result = WinsIndex.calculate(&cycle(), &ctx).unwrap();

        assert_eq!(
            result,
            vec![
                RankedEntry { rank: 1, team: "Team A".to_string(), value: 1 },
                RankedEntry { rank: 2, team: "Team B".to_string(), value: 1 },
                RankedEntry { rank: 3, team: "Team C".to_string(), value: 1 },
            ]
        );
    }

    #[test]
    fn draws_on_cycle_are_all_zero() {
        let ctx = RatingContext::default();
        let result = DrawsIndex.calculate(&cycle(), &ctx).unwrap();

        assert!(result.iter().all(|e| e.value == 0));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn single_draw_ranks_both_teams() {
        let ctx = RatingContext::default();
        let matches = vec![Match::completed("Team A", "Team B", 1, 1)];

        let draws = DrawsIndex.calculate(&matches, &ctx).unwrap();
        assert_eq!(
            draws,
            vec![
                RankedEntry { rank: 1, team: "Team A".to_string(), value: 1 },
                RankedEntry { rank: 2, team: "Team B".to_string(), value: 1 },
            ]
        );

        let wins = WinsIndex.calculate(&matches, &ctx).unwrap();
        assert_eq!(
            wins,
            vec![
                RankedEntry { rank: 1, team: "Team A".to_string(), value: 0 },
                RankedEntry { rank: 2, team: "Team B".to_string(), value: 0 },
            ]
        );
    }

    #[test]
    fn losses_rank_fewest_first() {
        let ctx = RatingContext::default();
        let matches = vec![
            Match::completed("Team A", "Team B", 1, 0),
            Match::completed("Team A", "Team C", 1, 0),
            Match::completed("Team B", "Team C", 1, 0),
        ];

        let result = LossesIndex.calculate(&matches, &ctx).unwrap();
        assert_eq!(result[0], RankedEntry { rank: 1, team: "Team A".to_string(), value: 0 });
        assert_eq!(result[2], RankedEntry { rank: 3, team: "Team C".to_string(), value: 2 });
    }

    #[test]
    fn matches_played_counts_every_status() {
        let ctx = RatingContext::default();
        let matches = vec![
            Match::completed("Team A", "Team B", 1, 0),
            Match::live("Team A", "Team C", 0, 0),
            Match::upcoming("Team A", "Team D"),
        ];

        let result = MatchesPlayedIndex.calculate(&matches, &ctx).unwrap();
        assert_eq!(result[0], RankedEntry { rank: 1, team: "Team A".to_string(), value: 3 });
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn empty_matches_rank_nobody() {
        let ctx = RatingContext::default();
        assert!(WinsIndex.calculate(&[], &ctx).unwrap().is_empty());
    }
}
