//! Rank-agreement metrics for scoring a computed ranking against a known-good
//! one.
//!
//! Every metric is a pure comparison of two `(rank, team)` lists (see
//! `indices::rank_pairs` for getting one out of a ranked index result);
//! `run_simulation` drives a batch of indices through one metric.
//! Correlation metrics align the lists by team name over the teams both lists
//! share; sequence metrics compare the name orderings position by position.
//! Fewer than two shared teams yields 0 for the correlation coefficients.

use std::collections::BTreeMap;

use crate::context::RatingContext;
use crate::error::RatingError;
use crate::indices::{rank_pairs, RankingIndex};
use crate::match_model::Match;

pub type RankPair = (usize, String);

/// Object-safe view of a ranking index reduced to its `(rank, team)` pairs,
/// so indices with different value types can be scored side by side.
pub trait RankSource {
    fn name(&self) -> &'static str;

    fn rank_list(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankPair>, RatingError>;
}

impl<I: RankingIndex> RankSource for I {
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<I>();
        full.rsplit("::").next().unwrap_or(full)
    }

    fn rank_list(
        &self,
        matches: &[Match],
        ctx: &RatingContext,
    ) -> Result<Vec<RankPair>, RatingError> {
        Ok(rank_pairs(&self.calculate(matches, ctx)?))
    }
}

/// Run each index over the match slice and score its ranking against a
/// known-good list with the given metric. Returns the score keyed by the
/// index's type name.
pub fn run_simulation(
    indices: &[&dyn RankSource],
    matches: &[Match],
    truth: &[RankPair],
    ctx: &RatingContext,
    metric: impl Fn(&[RankPair], &[RankPair]) -> f64,
) -> Result<BTreeMap<&'static str, f64>, RatingError> {
    let mut scores = BTreeMap::new();

    for index in indices {
        let ranks = index.rank_list(matches, ctx)?;
        scores.insert(index.name(), metric(&ranks, truth));
    }

    Ok(scores)
}

// Rank pairs aligned by team name, in the first list's order.
fn shared_ranks(a: &[RankPair], b: &[RankPair]) -> Vec<(usize, usize)> {
    let b_ranks: BTreeMap<&str, usize> = b.iter().map(|(rank, team)| (team.as_str(), *rank)).collect();

    a.iter()
        .filter_map(|(rank, team)| b_ranks.get(team.as_str()).map(|other| (*rank, *other)))
        .collect()
}

// Team names ordered by rank.
fn ordered_names(list: &[RankPair]) -> Vec<&str> {
    let mut pairs: Vec<&RankPair> = list.iter().collect();
    pairs.sort_by_key(|pair| pair.0);
    pairs.into_iter().map(|pair| pair.1.as_str()).collect()
}

/// Kendall's tau-a over the shared teams: (concordant - discordant) pairs
/// over all pairs. 1.0 for identical orderings, -1.0 for reversed.
pub fn kendalls_tau(a: &[RankPair], b: &[RankPair]) -> f64 {
    let aligned = shared_ranks(a, b);
    let n = aligned.len();
    if n < 2 {
        return 0.0;
    }

    let mut concordant = 0i64;
    let mut discordant = 0i64;

    for i in 0..n {
        for j in (i + 1)..n {
            let da = aligned[i].0 as i64 - aligned[j].0 as i64;
            let db = aligned[i].1 as i64 - aligned[j].1 as i64;

            if da * db > 0 {
                concordant += 1;
            } else if da * db < 0 {
                discordant += 1;
            }
        }
    }

    let total = (n * (n - 1) / 2) as f64;
    (concordant - discordant) as f64 / total
}

/// Kendall distance normalized into [0, 1]: 0 for identical, 1 for reversed.
pub fn normalized_kendall_distance(a: &[RankPair], b: &[RankPair]) -> f64 {
    (1.0 - kendalls_tau(a, b)) / 2.0
}

/// Spearman's rank correlation over the shared teams. Ranks within one list
/// are distinct, so the closed form 1 - 6*sum(d^2)/(n(n^2-1)) applies.
pub fn spearmans_rho(a: &[RankPair], b: &[RankPair]) -> f64 {
    let aligned = shared_ranks(a, b);
    let n = aligned.len();
    if n < 2 {
        return 0.0;
    }

    let sum_sq: f64 = aligned
        .iter()
        .map(|(ra, rb)| {
            let d = *ra as f64 - *rb as f64;
            d * d
        })
        .sum();

    let nf = n as f64;
    1.0 - 6.0 * sum_sq / (nf * (nf * nf - 1.0))
}

/// Number of shared teams ranked differently by the two lists.
pub fn hamming_distance(a: &[RankPair], b: &[RankPair]) -> usize {
    shared_ranks(a, b).iter().filter(|(ra, rb)| ra != rb).count()
}

/// Sum of absolute Borda score differences, where a team's Borda score is
/// list length minus its rank.
pub fn borda_count(a: &[RankPair], b: &[RankPair]) -> usize {
    let na = a.len() as i64;
    let nb = b.len() as i64;

    shared_ranks(a, b)
        .iter()
        .map(|(ra, rb)| ((na - *ra as i64) - (nb - *rb as i64)).unsigned_abs() as usize)
        .sum()
}

/// Rank-biased overlap with decay `p`: top-weighted agreement in [0, 1].
pub fn rank_biased_overlap(a: &[RankPair], b: &[RankPair], p: f64) -> f64 {
    let names_a = ordered_names(a);
    let names_b = ordered_names(b);
    let depth = names_a.len().min(names_b.len());

    let mut overlap = 0.0;
    for k in 1..=depth {
        let head_a: std::collections::BTreeSet<&str> = names_a[..k].iter().copied().collect();
        let agreement = names_b[..k].iter().filter(|t| head_a.contains(*t)).count();
        overlap += agreement as f64 / k as f64 * p.powi(k as i32 - 1);
    }

    (1.0 - p) * overlap
}

/// Spearman's footrule: sum of absolute rank differences over shared teams.
pub fn spearmans_footrule(a: &[RankPair], b: &[RankPair]) -> usize {
    shared_ranks(a, b)
        .iter()
        .map(|(ra, rb)| ra.abs_diff(*rb))
        .sum()
}

/// Mean absolute rank difference over shared teams, 0 when nothing is shared.
pub fn mean_absolute_rank_error(a: &[RankPair], b: &[RankPair]) -> f64 {
    let aligned = shared_ranks(a, b);
    if aligned.is_empty() {
        return 0.0;
    }

    let total: usize = aligned.iter().map(|(ra, rb)| ra.abs_diff(*rb)).sum();
    total as f64 / aligned.len() as f64
}

/// Positions at which the ordered name sequences disagree; a length mismatch
/// counts every unmatched tail position.
pub fn permutation_distance(a: &[RankPair], b: &[RankPair]) -> usize {
    let names_a = ordered_names(a);
    let names_b = ordered_names(b);

    let mismatches = names_a
        .iter()
        .zip(names_b.iter())
        .filter(|(x, y)| x != y)
        .count();

    mismatches + names_a.len().abs_diff(names_b.len())
}

/// Levenshtein edit distance over the ordered team-name sequences.
pub fn levenshtein_distance(a: &[RankPair], b: &[RankPair]) -> usize {
    let names_a = ordered_names(a);
    let names_b = ordered_names(b);

    let mut previous: Vec<usize> = (0..=names_b.len()).collect();
    let mut current = vec![0; names_b.len() + 1];

    for (i, name_a) in names_a.iter().enumerate() {
        current[0] = i + 1;

        for (j, name_b) in names_b.iter().enumerate() {
            let substitution = previous[j] + usize::from(name_a != name_b);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[names_b.len()]
}
