use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatingError {
    #[error("match {home} vs {away} has status '{status}' but no score")]
    MissingScore {
        home: String,
        away: String,
        status: String,
    },

    #[error("invalid score value: {0:?}")]
    InvalidScore(String),

    #[error("unrecognized match status: {0:?}")]
    UnknownStatus(String),

    // The +2 diagonal regularization should make the Colley system solvable
    // for any match graph, so hitting this means the input was malformed.
    #[error("colley system is singular; ratings are untrustworthy")]
    SingularColleySystem,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
