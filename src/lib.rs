pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod forge;
pub mod orchestrator;
pub mod wiki;

pub use error::{ChangelogError, Result, Severity};

#[cfg(test)]
pub mod test_helpers;
