//! Core port definitions for glowclock adapters.
//!
//! Ports keep the clock logic independent from the concrete source of wall
//! time so tests can drive it with fixed instants.

pub mod time;
