//! Command implementations for the batchframe CLI.

pub mod config;
pub mod run;
