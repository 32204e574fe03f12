//! Configuration for the GitHub connection.
use secrecy::SecretString;

/// Default GitHub host.
pub const DEFAULT_HOST: &str = "github.com";
/// Default page size for paginated tag queries
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with GitHub.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Base URL of the REST API.
    pub api_base_url: String,
    /// Base URL pull request numbers are appended to in changelog links.
    pub pull_link_base_url: String,
}

impl RemoteConfig {
    /// Build the configuration for a repository on `host`, deriving the API
    /// and link base urls unless an API url is given explicitly.
    pub fn new(
        host: &str,
        owner: &str,
        repo: &str,
        token: SecretString,
        api_base_url: Option<String>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("https://api.{host}"));

        let pull_link_base_url = format!("https://{host}/{owner}/{repo}/pull");

        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
            api_base_url,
            pull_link_base_url,
        }
    }

    /// "owner/repo" path used in log and error messages.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
            api_base_url: "".to_string(),
            pull_link_base_url: "".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_github_urls() {
        let config = RemoteConfig::new(
            DEFAULT_HOST,
            "octo",
            "widgets",
            SecretString::from("token".to_string()),
            None,
        );

        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(
            config.pull_link_base_url,
            "https://github.com/octo/widgets/pull"
        );
        assert_eq!(config.path(), "octo/widgets");
    }

    #[test]
    fn explicit_api_url_wins() {
        let config = RemoteConfig::new(
            "git.example.com",
            "octo",
            "widgets",
            SecretString::from("token".to_string()),
            Some("https://git.example.com/api/v3/".into()),
        );

        assert_eq!(config.api_base_url, "https://git.example.com/api/v3");
        assert_eq!(
            config.pull_link_base_url,
            "https://git.example.com/octo/widgets/pull"
        );
    }
}
