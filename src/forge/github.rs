//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use url::Url;

use crate::{
    error::{ChangelogError, Result},
    forge::{
        config::RemoteConfig,
        github::types::{GithubComparison, GithubCommit, GithubTag, TagsQuery},
        request::{CompareRequest, ForgeCommit, ForgeTag, TagPageRequest},
        traits::Forge,
    },
};

mod types;

const AUTH_FAILED: &str = "Authentication failed. Please check your GITHUB_TOKEN has 'repo' or 'public_repo' scope.";
const FORBIDDEN: &str = "Access forbidden. Your token may not have permission to access this repository.";

/// Turn an HTTP status from the GitHub API into a user facing message.
/// `not_found` describes what a 404 means for the request being made.
fn describe_status(status: u16, not_found: &str, message: &str) -> String {
    match status {
        401 => AUTH_FAILED.to_string(),
        403 => FORBIDDEN.to_string(),
        404 => not_found.to_string(),
        _ => format!("GitHub API error (status {status}): {message}"),
    }
}

fn describe_error(err: octocrab::Error, not_found: &str) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => describe_status(
            source.status_code.as_u16(),
            not_found,
            &source.message,
        ),
        err => format!("GitHub API error: {err}"),
    }
}

impl From<GithubCommit> for ForgeCommit {
    fn from(commit: GithubCommit) -> Self {
        let (author_name, author_email) = commit
            .commit
            .author
            .map(|a| (a.name, a.email))
            .unwrap_or_default();

        Self {
            id: commit.sha,
            message: commit.commit.message,
            author_login: commit.author.map(|u| u.login),
            author_name,
            author_email,
        }
    }
}

/// GitHub forge implementation using Octocrab for API interactions with
/// commit comparisons and tags.
pub struct Github {
    config: RemoteConfig,
    base_url: Url,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub async fn new(config: RemoteConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ChangelogError::config(format!(
                "invalid GitHub API url {}: {e}",
                config.api_base_url
            ))
        })?;

        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(config.api_base_url.clone())
            .and_then(|builder| builder.build())
            .map_err(|e| {
                ChangelogError::config(format!(
                    "failed to create GitHub client for {}: {e}",
                    config.api_base_url
                ))
            })?;

        Ok(Self {
            config,
            base_url,
            instance,
        })
    }

    /// Repository endpoint with each segment percent-encoded, so refs
    /// containing reserved characters stay inside their segment.
    fn repo_endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();

        let repo = [
            "repos",
            self.config.owner.as_str(),
            self.config.repo.as_str(),
        ];

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(repo).extend(segments);
        }

        url.to_string()
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn compare_commits(
        &self,
        req: CompareRequest,
    ) -> Result<Vec<ForgeCommit>> {
        let range = format!("{}...{}", req.base, req.head);
        let endpoint = self.repo_endpoint(&["compare", &range]);

        debug!("comparing commits: {endpoint}");

        let comparison: GithubComparison = self
            .instance
            .get(endpoint, None::<&()>)
            .await
            .map_err(|e| {
                let not_found = format!(
                    "Tag not found: {} or {}. Please verify the tag names.",
                    req.base, req.head
                );
                ChangelogError::RangeFetch(describe_error(e, &not_found))
            })?;

        Ok(comparison
            .commits
            .into_iter()
            .map(ForgeCommit::from)
            .collect())
    }

    async fn list_tags(&self, req: TagPageRequest) -> Result<Vec<ForgeTag>> {
        let endpoint = self.repo_endpoint(&["tags"]);
        let query = TagsQuery {
            per_page: req.per_page,
            page: req.page,
        };

        let tags: Vec<GithubTag> = self
            .instance
            .get(endpoint, Some(&query))
            .await
            .map_err(|e| {
                let not_found = format!(
                    "Repository not found: {}. Please verify GITHUB_OWNER and GITHUB_REPO.",
                    self.config.path()
                );
                ChangelogError::TagFetch(describe_error(e, &not_found))
            })?;

        Ok(tags
            .into_iter()
            .map(|t| ForgeTag {
                name: t.name,
                sha: t.commit.sha,
            })
            .collect())
    }
}
