//! Explicit session context.
//!
//! The signed-in user is carried as a value with an explicit load/save
//! lifecycle through the [`SessionStore`](crate::ports::SessionStore)
//! port, replacing ambient global state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId, ValidationError};
use crate::ports::SessionStore;

/// The active user's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Signed-in user.
    pub user_id: UserId,

    /// Name shown in the dashboard header.
    pub display_name: String,

    /// When this context was established.
    pub started_at: Timestamp,
}

impl SessionContext {
    /// Starts a session for a signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the display name is blank.
    pub fn start(user_id: UserId, display_name: impl Into<String>) -> Result<Self, ValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(ValidationError::empty_field("display_name"));
        }
        Ok(Self {
            user_id,
            display_name,
            started_at: Timestamp::now(),
        })
    }

    /// Loads the session from a store, failing if nobody is signed in.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the store is empty
    pub async fn restore(store: &dyn SessionStore) -> Result<Self, DomainError> {
        store.load().await?.ok_or_else(|| {
            DomainError::new(ErrorCode::SessionNotFound, "No active session")
        })
    }

    /// Persists this session to a store.
    pub async fn persist(&self, store: &dyn SessionStore) -> Result<(), DomainError> {
        store.save(self).await
    }

    /// Ends the session, clearing the store.
    pub async fn end(self, store: &dyn SessionStore) -> Result<(), DomainError> {
        store.clear().await
    }
}
