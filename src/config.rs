//! Configuration: the JSON changelog policy and runtime settings.

/// Default policy filename, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Author filtering, ignored types and section titles.
pub mod policy;

/// GitHub and Confluence connection settings.
pub mod settings;
