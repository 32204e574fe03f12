//! Runtime settings resolved once at startup and passed by reference.
use secrecy::SecretString;

use crate::{
    cli::SettingsArgs,
    error::{ChangelogError, Result},
    forge::config::RemoteConfig,
    wiki::config::WikiConfig,
};

/// Connection settings for the forge and, optionally, the wiki.
#[derive(Debug, Clone)]
pub struct Settings {
    pub remote: RemoteConfig,
    /// `None` when no wiki page is configured and publishing is skipped.
    pub wiki: Option<WikiConfig>,
}

/// Treat unset and blank values the same.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Settings {
    /// Validate the required GitHub settings, reporting every missing value
    /// at once.
    pub fn resolve(args: &SettingsArgs) -> Result<Self> {
        let token = present(&args.github_token);
        let owner = present(&args.github_owner);
        let repo = present(&args.github_repo);

        let (Some(token), Some(owner), Some(repo)) =
            (token.clone(), owner.clone(), repo.clone())
        else {
            let missing = [
                ("GITHUB_TOKEN", token.is_none()),
                ("GITHUB_OWNER", owner.is_none()),
                ("GITHUB_REPO", repo.is_none()),
            ]
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| name)
            .collect::<Vec<&str>>();

            return Err(ChangelogError::config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        };

        let remote = RemoteConfig::new(
            args.github_host.trim(),
            &owner,
            &repo,
            SecretString::from(token),
            present(&args.github_api_url),
        );

        let wiki =
            present(&args.confluence_page_id).map(|page_id| WikiConfig {
                base_url: present(&args.confluence_base_url),
                page_id,
                email: present(&args.confluence_email),
                api_token: present(&args.confluence_api_token)
                    .map(SecretString::from),
            });

        Ok(Self { remote, wiki })
    }
}
