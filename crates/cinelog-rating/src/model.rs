//! Rating entries.

use chrono::{DateTime, Utc};

/// Valid rating range, inclusive on both ends.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// One user's rating of one movie. Re-rating replaces the entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub rating: f64,
    pub review: Option<String>,
    pub rated_at: DateTime<Utc>,
}
