//! Adapters - Implementations of ports for concrete backends.

pub mod memory;
pub mod wire;
