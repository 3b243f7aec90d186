use crate::match_model::Match;

/// Shared knobs for every rating computation. Built once by the caller and
/// passed by reference; there is deliberately no global state behind this.
#[derive(Debug, Clone)]
pub struct RatingContext {
    /// When set, only matches tagged with this category (e.g. a gender or
    /// division label) are counted. Matches without a tag are skipped too.
    pub category: Option<String>,

    /// Decimal digits kept by WP/OWP/OOWP/RPI. Rounding is half-away-from-zero
    /// (`f64::round` after scaling), applied at every intermediate the way the
    /// published RPI tables do it.
    pub precision: u32,

    pub elo_k: f64,
    pub elo_initial: i32,

    /// Decay parameter for rank-biased overlap in the measurement harness.
    pub rbo_p: f64,
}

impl Default for RatingContext {
    fn default() -> Self {
        Self {
            category: None,
            precision: 2,
            elo_k: 32.0,
            elo_initial: 1500,
            rbo_p: 0.9,
        }
    }
}

impl RatingContext {
    pub fn for_category(category: &str) -> Self {
        Self {
            category: Some(category.to_string()),
            ..Self::default()
        }
    }

    // Category filter applied by every counting function before anything else.
    pub fn admits(&self, m: &Match) -> bool {
        match &self.category {
            Some(wanted) => m.category() == Some(wanted.as_str()),
            None => true,
        }
    }
}
