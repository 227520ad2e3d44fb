//! In-memory session store.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::SessionContext;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::SessionStore;

/// Single-slot [`SessionStore`] holding the active session in memory.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<SessionContext>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> DomainError {
        DomainError::new(ErrorCode::StorageError, "session store lock poisoned")
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<SessionContext>, DomainError> {
        let session = self.session.read().map_err(|_| Self::lock_poisoned())?;
        Ok(session.clone())
    }

    async fn save(&self, context: &SessionContext) -> Result<(), DomainError> {
        let mut session = self.session.write().map_err(|_| Self::lock_poisoned())?;
        *session = Some(context.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut session = self.session.write().map_err(|_| Self::lock_poisoned())?;
        *session = None;
        Ok(())
    }
}
