//! Strength-of-schedule ratings for round-robin match data.
//!
//! The core takes a finite, in-memory list of [`Match`] records and produces
//! either a per-team statistics bundle or a ranked `(rank, team, value)` list
//! through one of the [`indices`]. Fetching match data and storing results
//! are the caller's problem; nothing in here does I/O except the
//! [`data_loader`] and [`report`] boundary modules used by the binary.

pub mod calculations;
pub mod colley;
pub mod context;
pub mod data_loader;
pub mod elo;
pub mod error;
pub mod indices;
pub mod match_model;
pub mod measurement;
pub mod report;
pub mod stats;

pub use context::RatingContext;
pub use error::RatingError;
pub use indices::{RankedEntry, RankingIndex};
pub use match_model::{Match, MatchStatus, Score, Team};
pub use stats::TeamStatistics;
