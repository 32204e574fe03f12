//! Publishing rendered changelogs to a wiki page.
pub mod confluence;
pub mod config;
pub mod traits;
mod types;
