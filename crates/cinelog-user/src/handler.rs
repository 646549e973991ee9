//! Consumer-side handler for the `user.*` topics.

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;
use cinelog_events::CinelogEvent;
use cinelog_events::user::{USER_DELETED, USER_REGISTERED, USER_UPDATED};

/// Reacts to user account events. Stands in for the welcome-mail and
/// cleanup side effects a full deployment would run here.
#[derive(Default)]
pub struct UserHandler;

impl UserHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler<CinelogEvent> for UserHandler {
    async fn handle(&self, event: &CinelogEvent) -> Result<(), EventError> {
        match event {
            CinelogEvent::UserRegistered(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    username = %e.payload.username,
                    email = %e.payload.email,
                    "welcoming new user"
                );
            }
            CinelogEvent::UserUpdated(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    username = %e.payload.username,
                    "user profile changed"
                );
            }
            CinelogEvent::UserDeleted(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    username = %e.payload.username,
                    "cleaning up after deleted user"
                );
            }
            other => {
                return Err(EventError::Handler(format!(
                    "unexpected event type '{}'",
                    other.event_type()
                )));
            }
        }
        Ok(())
    }

    fn can_handle(&self, event_type: &str) -> bool {
        matches!(event_type, USER_REGISTERED | USER_UPDATED | USER_DELETED)
    }
}
