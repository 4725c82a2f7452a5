//! Shared utilities for Tourney binaries.

pub mod logger;
pub mod time;
