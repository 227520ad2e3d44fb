//! Session store port.
//!
//! Backs the explicit session context: the signed-in user travels as a
//! value with a load/save lifecycle instead of living in ambient
//! storage.

use async_trait::async_trait;

use crate::application::SessionContext;
use crate::domain::foundation::DomainError;

/// Storage port for the active session context.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if a user is signed in.
    async fn load(&self) -> Result<Option<SessionContext>, DomainError>;

    /// Persist the session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &SessionContext) -> Result<(), DomainError>;

    /// Discard any stored session (sign-out).
    async fn clear(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
