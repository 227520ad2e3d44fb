//! Application layer - use-case orchestration over domain and ports.

pub mod handlers;
mod optimistic;
mod session;

pub use optimistic::{OptimisticEventCache, Reconciliation};
pub use session::SessionContext;
