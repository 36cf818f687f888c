//! Shared process setup for the repovault binaries.

pub mod output;
pub mod setup;
