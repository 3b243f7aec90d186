//! SPI index: a goals-scored power rating.

use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;

use super::basic::zeroed_counts;
use super::{rank_sorted, Direction, RankedEntry, RankingIndex};

/// Total goals scored per team, most first. An offense-only take on the
/// Soccer Power Index: every admitted match contributes its goals, so a live
/// fixture counts its running score and an unplayed one adds nothing.
#[derive(Debug, Default)]
pub struct SpiIndex;

impl RankingIndex for SpiIndex {
    type Value = u32;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<u32>>, RatingError> {
        let mut goals = zeroed_counts(matches, ctx);

        for m in matches.iter().filter(|m| ctx.admits(m)) {
            let score = m.score();
            *goals.entry(m.home().name.clone()).or_insert(0) += score.home;
            *goals.entry(m.away().name.clone()).or_insert(0) += score.away;
        }

        Ok(rank_sorted(goals.into_iter().collect(), Direction::Descending))
    }
}
