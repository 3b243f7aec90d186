//! Colley Matrix index: linear-system ratings ranked highest first.

use crate::colley;
use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;

use super::{rank_sorted, Direction, RankedEntry, RankingIndex};

/// Highest rating first. The one fallible variant: a singular system comes
/// back as `RatingError::SingularColleySystem`.
#[derive(Debug, Default)]
pub struct ColleyIndex;

impl RankingIndex for ColleyIndex {
    type Value = f64;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<f64>>, RatingError> {
        let pairs = colley::ratings(matches, ctx)?;
        Ok(rank_sorted(pairs, Direction::Descending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_solves_and_ties_break_by_name() {
        let ctx = RatingContext::default();
        let matches = vec![
            Match::completed("Team A", "Team B", 2, 0),
            Match::completed("Team B", "Team C", 1, 0),
            Match::completed("Team C", "Team A", 1, 0),
        ];

        let result = ColleyIndex.calculate(&matches, &ctx).unwrap();
        assert_eq!(
            result,
            vec![
                RankedEntry { rank: 1, team: "Team A".to_string(), value: 0.5 },
                RankedEntry { rank: 2, team: "Team B".to_string(), value: 0.5 },
                RankedEntry { rank: 3, team: "Team C".to_string(), value: 0.5 },
            ]
        );
    }

    #[test]
    fn winner_rates_above_loser() {
        let ctx = RatingContext::default();
        let matches = vec![Match::completed("Team B", "Team A", 3, 1)];

        let result = ColleyIndex.calculate(&matches, &ctx).unwrap();
        assert_eq!(result[0].team, "Team B");
        assert!(result[0].value > result[1].value);
    }
}
