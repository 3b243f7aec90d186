//! Per-team statistics bundle: counters plus the RPI chain in one struct.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::calculations::{
    draws_for, losses_for, oowp_cached, owp, rpi, team_names, wins_for, wp,
};
use crate::context::RatingContext;
use crate::match_model::Match;

/// Derived aggregate for one team, recomputed on every invocation. Named
/// fields instead of a loose map so a missing statistic is a compile error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatistics {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub wp: f64,
    pub owp: f64,
    pub oowp: f64,
    pub rpi: f64,
}

/// Build the full bundle for every team in the universe.
///
/// Two passes: OWP for every team first (the memoized intermediate), then the
/// per-team bundle with OOWP reading that table. Teams are independent given
/// the shared read-only match list, so both passes fan out across the rayon
/// pool.
pub fn calculate_statistics(
    matches: &[Match],
    ctx: &RatingContext,
) -> BTreeMap<String, TeamStatistics> {
    let teams = team_names(matches, ctx);

    let owp_table: BTreeMap<String, f64> = teams
        .par_iter()
        .map(|team| (team.clone(), owp(matches, team, ctx)))
        .collect();

    teams
        .par_iter()
        .map(|team| {
            let wp_value = wp(matches, team, None, ctx);
            let owp_value = owp_table[team];
            let oowp_value = oowp_cached(matches, team, ctx, &owp_table);

            let bundle = TeamStatistics {
                wins: wins_for(matches, team, None, ctx),
                losses: losses_for(matches, team, None, ctx),
                draws: draws_for(matches, team, None, ctx),
                wp: wp_value,
                owp: owp_value,
                oowp: oowp_value,
                rpi: rpi(wp_value, owp_value, oowp_value, ctx),
            };

            (team.clone(), bundle)
        })
        .collect()
}

/// Statistics as a list sorted by RPI descending, team name ascending.
pub fn sort_statistics(
    stats: &BTreeMap<String, TeamStatistics>,
) -> Vec<(String, TeamStatistics)> {
    let mut list: Vec<(String, TeamStatistics)> = stats
        .iter()
        .map(|(team, bundle)| (team.clone(), bundle.clone()))
        .collect();

    list.sort_by(|a, b| {
        b.1.rpi
            .partial_cmp(&a.1.rpi)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    list
}
