//! Watch history entries.

use chrono::{DateTime, Utc};

/// One viewing of a movie by a user. A user can watch the same movie more
/// than once; every viewing gets its own record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchRecord {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub watched_at: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
}
