//! User domain events.

use cinelog_core::error::EventError;
use cinelog_core::event::EventMeta;
use serde::{Deserialize, Serialize};

use crate::CinelogEvent;

/// Topic tag for `UserRegistered`.
pub const USER_REGISTERED: &str = "user.user_registered";
/// Topic tag for `UserUpdated`.
pub const USER_UPDATED: &str = "user.user_updated";
/// Topic tag for `UserDeleted`.
pub const USER_DELETED: &str = "user.user_deleted";

/// Wire payload for `UserRegistered` and `UserUpdated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// Emitted after a new user row is written.
#[derive(Debug, Clone)]
pub struct UserRegistered {
    pub meta: EventMeta,
    pub payload: UserPayload,
}

impl UserRegistered {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: UserPayload {
                user_id: user_id.into(),
                username: username.into(),
                email: email.into(),
            },
        }
    }
}

/// Emitted after a user profile update is persisted.
#[derive(Debug, Clone)]
pub struct UserUpdated {
    pub meta: EventMeta,
    pub payload: UserPayload,
}

impl UserUpdated {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: UserPayload {
                user_id: user_id.into(),
                username: username.into(),
                email: email.into(),
            },
        }
    }
}

/// Wire payload for `UserDeleted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeletedPayload {
    pub user_id: String,
    pub username: String,
}

/// Emitted after a user row is removed.
#[derive(Debug, Clone)]
pub struct UserDeleted {
    pub meta: EventMeta,
    pub payload: UserDeletedPayload,
}

impl UserDeleted {
    #[must_use]
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: UserDeletedPayload {
                user_id: user_id.into(),
                username: username.into(),
            },
        }
    }
}

/// Wire decoder for the `user.user_registered` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` if the payload is not valid JSON for the
/// schema.
pub fn decode_registered(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: UserPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::UserRegistered(UserRegistered {
        meta: EventMeta::new(),
        payload,
    }))
}

/// Wire decoder for the `user.user_updated` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` if the payload is not valid JSON for the
/// schema.
pub fn decode_updated(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: UserPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::UserUpdated(UserUpdated {
        meta: EventMeta::new(),
        payload,
    }))
}

/// Wire decoder for the `user.user_deleted` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` if the payload is not valid JSON for the
/// schema.
pub fn decode_deleted(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: UserDeletedPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::UserDeleted(UserDeleted {
        meta: EventMeta::new(),
        payload,
    }))
}
