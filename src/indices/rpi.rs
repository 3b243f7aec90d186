//! RPI index: the WP/OWP/OOWP blend ranked across the team universe.

use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;
use crate::stats::calculate_statistics;

use super::{rank_sorted, Direction, RankedEntry, RankingIndex};

/// Highest RPI first. Delegates to the statistics bundle, which memoizes the
/// per-team OWP table so the OOWP pass stays quadratic.
#[derive(Debug, Default)]
pub struct RpiIndex;

impl RankingIndex for RpiIndex {
    type Value = f64;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<f64>>, RatingError> {
        let pairs = calculate_statistics(matches, ctx)
            .into_iter()
            .map(|(team, bundle)| (team, bundle.rpi))
            .collect();

        Ok(rank_sorted(pairs, Direction::Descending))
    }
}
