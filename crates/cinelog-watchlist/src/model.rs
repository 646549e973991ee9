//! Watchlist entries.

use chrono::{DateTime, Utc};

/// One movie on one user's watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub added_at: DateTime<Utc>,
}
