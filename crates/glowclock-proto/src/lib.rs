//! Shared data model for glowclock.
//!
//! The crate holds everything the other crates agree on: the configuration
//! schema with its presets and validation, and the port traits adapters
//! implement.

pub mod config;
pub mod ports;
