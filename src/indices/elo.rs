//! Elo index: final sequential ratings ranked highest first.

use crate::context::RatingContext;
use crate::elo;
use crate::error::RatingError;
use crate::match_model::Match;

use super::{rank_sorted, Direction, RankedEntry, RankingIndex};

/// Highest rating first. Match order is taken as given; callers wanting
/// chronological Elo must sort the input by kickoff time first.
#[derive(Debug, Default)]
pub struct EloIndex;

impl RankingIndex for EloIndex {
    type Value = i32;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<i32>>, RatingError> {
        let pairs = elo::process_matches(matches, ctx).into_iter().collect();
        Ok(rank_sorted(pairs, Direction::Descending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_tops_the_table() {
        let ctx = RatingContext::default();
        let matches = vec![Match::completed("Team B", "Team A", 1, 0)];

        let result = EloIndex.calculate(&matches, &ctx).unwrap();
        assert_eq!(
            result,
            vec![
                RankedEntry { rank: 1, team: "Team B".to_string(), value: 1516 },
                RankedEntry { rank: 2, team: "Team A".to_string(), value: 1484 },
            ]
        );
    }

    #[test]
    fn all_draws_tie_at_the_initial_rating() {
        let ctx = RatingContext::default();
        let matches = vec![
            Match::completed("Team A", "Team B", 0, 0),
            Match::completed("Team B", "Team C", 1, 1),
        ];

        let result = EloIndex.calculate(&matches, &ctx).unwrap();
        assert!(result.iter().all(|e| e.value == ctx.elo_initial));
        assert_eq!(result[0].team, "Team A");
    }
}
