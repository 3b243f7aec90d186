//! Sequential Elo ratings over the match list as given.
//!
//! The caller owns chronology: matches are processed in input order and never
//! re-sorted here, so feeding the same list twice always reproduces the same
//! ratings.

use std::collections::BTreeMap;

use crate::calculations::team_names;
use crate::context::RatingContext;
use crate::match_model::Match;

/// Expected score for the first side under the logistic curve.
pub fn expected_score(rating_a: i32, rating_b: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) as f64 / 400.0))
}

/// One update step. Both sides are adjusted from their pre-match ratings and
/// rounded to the nearest integer.
pub fn update_ratings(
    rating_a: i32,
    rating_b: i32,
    score_a: f64,
    score_b: f64,
    ctx: &RatingContext,
) -> (i32, i32) {
    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = expected_score(rating_b, rating_a);

    let new_a = rating_a as f64 + ctx.elo_k * (score_a - expected_a);
    let new_b = rating_b as f64 + ctx.elo_k * (score_b - expected_b);

    (new_a.round() as i32, new_b.round() as i32)
}

/// Run every finished match through the update step. Every team in the
/// universe starts at `ctx.elo_initial`; unfinished matches leave ratings
/// untouched but still introduce their teams.
pub fn process_matches(matches: &[Match], ctx: &RatingContext) -> BTreeMap<String, i32> {
    let mut ratings: BTreeMap<String, i32> = team_names(matches, ctx)
        .into_iter()
        .map(|team| (team, ctx.elo_initial))
        .collect();

    for m in matches.iter().filter(|m| ctx.admits(m) && m.is_finished()) {
        let home = m.home().name.clone();
        let away = m.away().name.clone();

        let (score_home, score_away) = if m.is_draw() {
            (0.5, 0.5)
        } else if m.winner() == Some(home.as_str()) {
            (1.0, 0.0)
        } else {
            (0.0, 1.0)
        };

        let (new_home, new_away) = update_ratings(
            ratings[&home],
            ratings[&away],
            score_home,
            score_away,
            ctx,
        );

        ratings.insert(home, new_home);
        ratings.insert(away, new_away);
    }

    ratings
}
