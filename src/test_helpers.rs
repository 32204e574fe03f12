//! Common test helper functions shared across test modules.
use secrecy::SecretString;

use crate::forge::{config::RemoteConfig, request::ForgeCommit};

/// Creates a test RemoteConfig pointing at github.com/test/repo.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        owner: "test".to_string(),
        repo: "repo".to_string(),
        token: SecretString::from("test-token".to_string()),
        api_base_url: "https://api.github.com".to_string(),
        pull_link_base_url: "https://github.com/test/repo/pull".to_string(),
    }
}

/// Creates a commit with the given id and message and no author details.
pub fn commit(id: &str, message: &str) -> ForgeCommit {
    ForgeCommit {
        id: id.to_string(),
        message: message.to_string(),
        ..ForgeCommit::default()
    }
}

/// Creates one commit per message, in order, with ids `sha0`, `sha1`, ...
pub fn commits(messages: &[&str]) -> Vec<ForgeCommit> {
    messages
        .iter()
        .enumerate()
        .map(|(i, msg)| commit(&format!("sha{i}"), msg))
        .collect()
}
