//! Counting and composite rating functions over a match collection.
//!
//! Everything here is a pure function of `(&[Match], &RatingContext)`.
//! Degenerate input (no matches, no meetings) yields zero, never an error.

use std::collections::{BTreeMap, BTreeSet};

use crate::context::RatingContext;
use crate::match_model::Match;

/// Sorted, de-duplicated universe of team names, the canonical order every
/// index and the Colley solver build on.
pub fn team_names(matches: &[Match], ctx: &RatingContext) -> Vec<String> {
    let mut names = BTreeSet::new();

    for m in matches.iter().filter(|m| ctx.admits(m)) {
        names.insert(m.home().name.clone());
        names.insert(m.away().name.clone());
    }

    names.into_iter().collect()
}

// A skip team only applies when present and non-empty.
fn skip_applies(m: &Match, skip: Option<&str>) -> bool {
    matches!(skip, Some(s) if !s.is_empty() && m.contains(s))
}

// Finished matches featuring `team`, minus any that also feature the skip
// team. The skip parameter is what keeps OWP from crediting a team for
// beating the very side whose schedule strength is being measured.
fn decided<'a>(
    matches: &'a [Match],
    team: &'a str,
    skip: Option<&'a str>,
    ctx: &'a RatingContext,
) -> impl Iterator<Item = &'a Match> {
    matches.iter().filter(move |m| {
        ctx.admits(m) && m.is_finished() && m.contains(team) && !skip_applies(m, skip)
    })
}

pub fn wins_for(matches: &[Match], team: &str, skip: Option<&str>, ctx: &RatingContext) -> u32 {
    decided(matches, team, skip, ctx)
        .filter(|m| m.winner() == Some(team))
        .count() as u32
}

pub fn losses_for(matches: &[Match], team: &str, skip: Option<&str>, ctx: &RatingContext) -> u32 {
    decided(matches, team, skip, ctx)
        .filter(|m| m.loser() == Some(team))
        .count() as u32
}

pub fn draws_for(matches: &[Match], team: &str, skip: Option<&str>, ctx: &RatingContext) -> u32 {
    decided(matches, team, skip, ctx)
        .filter(|m| m.is_draw())
        .count() as u32
}

/// Opponent names for `team`, one entry per fixture. Unfinished fixtures
/// still contribute opponents; only the decided matches of those opponents
/// feed the percentages themselves.
pub fn opponents_of(matches: &[Match], team: &str, ctx: &RatingContext) -> Vec<String> {
    let mut opponents = Vec::new();

    for m in matches.iter().filter(|m| ctx.admits(m)) {
        if let Some(opponent) = m.opponent_of(team) {
            opponents.push(opponent.to_string());
        }
    }

    opponents
}

/// Number of finished matches featuring both teams.
pub fn meeting_count(matches: &[Match], team_a: &str, team_b: &str, ctx: &RatingContext) -> u32 {
    matches
        .iter()
        .filter(|m| ctx.admits(m) && m.is_finished() && m.contains(team_a) && m.contains(team_b))
        .count() as u32
}

/// All matches featuring `team`, regardless of status.
pub fn matches_played_by<'a>(
    matches: &'a [Match],
    team: &str,
    ctx: &RatingContext,
) -> Vec<&'a Match> {
    matches
        .iter()
        .filter(|m| ctx.admits(m) && m.contains(team))
        .collect()
}

pub fn total_matches_played_by(matches: &[Match], team: &str, ctx: &RatingContext) -> u32 {
    matches_played_by(matches, team, ctx).len() as u32
}

/// Half-away-from-zero rounding to `digits` decimal places. Every published
/// percentage in this crate goes through here so outputs stay comparable.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// Win percentage: (wins + draws/2) / decided matches, 0 for a team with no
/// decided matches.
pub fn wp(matches: &[Match], team: &str, skip: Option<&str>, ctx: &RatingContext) -> f64 {
    let wins = wins_for(matches, team, skip, ctx);
    let losses = losses_for(matches, team, skip, ctx);
    let draws = draws_for(matches, team, skip, ctx);
    let played = wins + losses + draws;

    if played == 0 {
        return 0.0;
    }

    let raw = (wins as f64 + draws as f64 / 2.0) / played as f64;
    round_to(raw, ctx.precision)
}

// Meeting-count-weighted average of per-opponent values; 0 when the team has
// met nobody. Shared by OWP and OOWP so both aggregate identically.
fn weighted_opponent_average(
    matches: &[Match],
    team: &str,
    values: &BTreeMap<String, f64>,
    ctx: &RatingContext,
) -> f64 {
    let mut sum = 0.0;
    let mut meetings = 0u32;

    for (opponent, value) in values {
        let count = meeting_count(matches, team, opponent, ctx);
        meetings += count;
        sum += value * count as f64;
    }

    if meetings == 0 {
        return 0.0;
    }

    round_to(sum / meetings as f64, ctx.precision)
}

/// Opponents' win percentage: each distinct opponent's WP computed with
/// `team` excluded from that opponent's record, weighted by meeting count.
/// Opponents whose only decided matches were against `team` drop out of the
/// average entirely rather than contributing a zero.
pub fn owp(matches: &[Match], team: &str, ctx: &RatingContext) -> f64 {
    let mut percentages = BTreeMap::new();

    for opponent in opponents_of(matches, team, ctx) {
        if percentages.contains_key(&opponent) {
            continue;
        }

        let wins = wins_for(matches, &opponent, Some(team), ctx);
        let losses = losses_for(matches, &opponent, Some(team), ctx);
        let draws = draws_for(matches, &opponent, Some(team), ctx);
        let played = wins + losses + draws;

        if played == 0 {
            continue;
        }

        let percentage = (wins as f64 + draws as f64 / 2.0) / played as f64;
        percentages.insert(opponent, percentage);
    }

    weighted_opponent_average(matches, team, &percentages, ctx)
}

/// Opponents' opponents' win percentage: the same weighted average, one level
/// deeper, over each opponent's own OWP. The inner OWP does not exclude
/// `team` from its opponents' records; see DESIGN.md for why that asymmetry
/// is kept.
pub fn oowp(matches: &[Match], team: &str, ctx: &RatingContext) -> f64 {
    let mut owps = BTreeMap::new();

    for opponent in opponents_of(matches, team, ctx) {
        if !owps.contains_key(&opponent) {
            let value = owp(matches, &opponent, ctx);
            owps.insert(opponent, value);
        }
    }

    weighted_opponent_average(matches, team, &owps, ctx)
}

/// OOWP against a precomputed per-team OWP table. The RPI index and the
/// statistics bundle compute every team's OWP exactly once and feed it here,
/// which keeps the whole pass at two recursion levels and O(T^2).
pub fn oowp_cached(
    matches: &[Match],
    team: &str,
    ctx: &RatingContext,
    owp_by_team: &BTreeMap<String, f64>,
) -> f64 {
    let mut owps = BTreeMap::new();

    for opponent in opponents_of(matches, team, ctx) {
        if let Some(value) = owp_by_team.get(&opponent) {
            owps.insert(opponent, *value);
        }
    }

    weighted_opponent_average(matches, team, &owps, ctx)
}

/// RPI is a convex blend of the three percentages: 25% WP, 50% OWP, 25% OOWP.
pub fn rpi(wp_value: f64, owp_value: f64, oowp_value: f64, ctx: &RatingContext) -> f64 {
    round_to(
        wp_value * 0.25 + owp_value * 0.50 + oowp_value * 0.25,
        ctx.precision,
    )
}
