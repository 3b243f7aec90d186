//! Season record index: W-L-D strings ordered by a 3/1/0 points formula.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::calculations::team_names;
use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;

use super::{RankedEntry, RankingIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Record {
    /// Three points for a win, one for a draw.
    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}

/// Most points first.
#[derive(Debug, Default)]
pub struct RecordIndex;

impl RankingIndex for RecordIndex {
    type Value = Record;

    fn calculate(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankedEntry<Record>>, RatingError> {
        let mut records: BTreeMap<String, Record> = team_names(matches, ctx)
            .into_iter()
            .map(|team| (team, Record::default()))
            .collect();

        for m in matches.iter().filter(|m| ctx.admits(m) && m.is_finished()) {
            if let (Some(winner), Some(loser)) = (m.winner(), m.loser()) {
                records.entry(winner.to_string()).or_default().wins += 1;
                records.entry(loser.to_string()).or_default().losses += 1;
            } else {
                records.entry(m.home().name.clone()).or_default().draws += 1;
                records.entry(m.away().name.clone()).or_default().draws += 1;
            }
        }

        let mut pairs: Vec<(String, Record)> = records.into_iter().collect();
        pairs.sort_by(|a, b| {
            b.1.points()
                .cmp(&a.1.points())
                .then_with(|| a.0.cmp(&b.0))
        });

        Ok(pairs
            .into_iter()
            .enumerate()
            .map(|(i, (team, record))| RankedEntry {
                rank: i + 1,
                team,
                value: record,
            })
            .collect())
    }
}
