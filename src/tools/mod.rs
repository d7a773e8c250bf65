//! The tools module provides helpers for the codec and its driver.
//!
//! The tools are:
//! - cli: Command line interface for the demonstration driver.
//! - freq_count: Character frequency count of a corpus.
//!
pub mod cli;
pub mod freq_count;
