//! Win percentage as a plain ratio: wins over matches played.
//!
//! This is the naive ratio (unfinished fixtures inflate the denominator),
//! distinct from the decided-matches WP that feeds RPI.

use crate::calculations::{team_names, total_matches_played_by, wins_for};
use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;

use super::{rank_sorted, Direction, RankedEntry, RankingIndex};

/// Highest ratio first.
#[derive(Debug, Default)]
pub struct WinPercentageIndex;

impl RankingIndex for WinPercentageIndex {
    type Value = f64;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<f64>>, RatingError> {
        let pairs = team_names(matches, ctx)
            .into_iter()
            .map(|team| {
                let played = total_matches_played_by(matches, &team, ctx);
                let ratio = if played == 0 {
                    0.0
                } else {
                    wins_for(matches, &team, None, ctx) as f64 / played as f64
                };
                (team, ratio)
            })
            .collect();

        Ok(rank_sorted(pairs, Direction::Descending))
    }
}
