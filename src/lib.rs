//! CNNCT - Meeting scheduling core
//!
//! This crate implements the event-lifecycle heart of a meeting
//! scheduler: participant responses, the pure status reducer that
//! classifies events into Pending/Upcoming/Past/Canceled dashboard
//! buckets, and weekly availability windows.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
