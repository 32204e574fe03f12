use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GithubComparison {
    #[serde(default)]
    pub commits: Vec<GithubCommit>,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommit {
    pub sha: String,
    pub commit: GithubCommitDetail,
    /// GitHub account linked to the commit author, if any
    pub author: Option<GithubUser>,
}

#[derive(Debug, Deserialize)]
pub struct GithubCommitDetail {
    pub message: String,
    pub author: Option<GithubGitAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct GithubGitAuthor {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GithubUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubTag {
    pub name: String,
    pub commit: GithubTagCommit,
}

#[derive(Debug, Deserialize)]
pub struct GithubTagCommit {
    pub sha: String,
}

#[derive(Debug, Serialize)]
pub struct TagsQuery {
    pub per_page: u8,
    pub page: u32,
}
