//! Colley Matrix ratings: a regularized linear system over win/loss counts.
//!
//! C starts as 2·I and b as the all-ones vector; every finished match bumps
//! both diagonals, knocks one off each cross entry, and shifts half a point
//! of b from loser to winner. Draws touch C only. The +2 regularization keeps
//! C strictly diagonally dominant, so the solve should never fail on a sane
//! match graph; if it does, that is surfaced as an error rather than a rating.

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};

use crate::calculations::{round_to, team_names};
use crate::context::RatingContext;
use crate::error::RatingError;
use crate::match_model::Match;

/// Solve for ratings in team-registry (name-sorted) order, rounded to two
/// decimal places.
pub fn ratings(matches: &[Match], ctx: &RatingContext) -> Result<Vec<(String, f64)>, RatingError> {
    let teams = team_names(matches, ctx);
    let n = teams.len();

    if n == 0 {
        return Ok(Vec::new());
    }

    let index: BTreeMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut c = DMatrix::<f64>::identity(n, n) * 2.0;
    let mut b = DVector::<f64>::from_element(n, 1.0);

    for m in matches.iter().filter(|m| ctx.admits(m) && m.is_finished()) {
        let home = index[m.home().name.as_str()];
        let away = index[m.away().name.as_str()];

        c[(home, home)] += 1.0;
        c[(away, away)] += 1.0;
        c[(home, away)] -= 1.0;
        c[(away, home)] -= 1.0;

        match m.winner() {
            Some(winner) if winner == m.home().name => {
                b[home] += 0.5;
                b[away] -= 0.5;
            }
            Some(_) => {
                b[away] += 0.5;
                b[home] -= 0.5;
            }
            // Draw: the meeting still strengthens the graph, but neither
            // side takes the half point.
            None => {}
        }
    }

    let solution = c
        .lu()
        .solve(&b)
        .ok_or(RatingError::SingularColleySystem)?;

    Ok(teams
        .into_iter()
        .zip(solution.iter())
        .map(|(team, rating)| (team, round_to(*rating, 2)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty() {
        let ctx = RatingContext::default();
        assert!(ratings(&[], &ctx).unwrap().is_empty());
    }

    #[test]
    fn single_decided_match() {
        let ctx = RatingContext::default();
        let matches = vec![Match::completed("Team A", "Team B", 1, 0)];

        // C = [[3,-1],[-1,3]], b = [1.5, 0.5]
        let result = ratings(&matches, &ctx).unwrap();
        assert_eq!(result, vec![("Team A".to_string(), 0.63), ("Team B".to_string(), 0.38)]);
    }

    #[test]
    fn single_draw_splits_evenly() {
        let ctx = RatingContext::default();
        let matches = vec![Match::completed("Team A", "Team B", 1, 1)];

        let result = ratings(&matches, &ctx).unwrap();
        assert_eq!(result, vec![("Team A".to_string(), 0.5), ("Team B".to_string(), 0.5)]);
    }

    #[test]
    fn three_team_cycle_is_symmetric() {
        let ctx = RatingContext::default();
        let matches = vec![
            Match::completed("Team A", "Team B", 2, 0),
            Match::completed("Team B", "Team C", 1, 0),
            Match::completed("Team C", "Team A", 1, 0),
        ];

        let result = ratings(&matches, &ctx).unwrap();
        assert_eq!(result.len(), 3);
        for (_, rating) in &result {
            assert_eq!(*rating, 0.5);
        }
    }

    #[test]
    fn unfinished_matches_are_ignored_in_the_system() {
        let ctx = RatingContext::default();
        let matches = vec![
            Match::completed("Team A", "Team B", 1, 0),
            Match::live("Team B", "Team A", 9, 0),
        ];

        let with_live = ratings(&matches, &ctx).unwrap();
        let without = ratings(&matches[..1], &ctx).unwrap();
        assert_eq!(with_live, without);
    }
}
