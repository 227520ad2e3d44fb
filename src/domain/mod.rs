//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `event` - Event records, participant responses, and the status reducer
//! - `availability` - Weekly availability windows

pub mod availability;
pub mod event;
pub mod foundation;
