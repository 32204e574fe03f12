//! Remote forge access: fetching tags and commit ranges.
pub mod config;
pub mod github;
pub mod manager;
pub mod request;
pub mod traits;
