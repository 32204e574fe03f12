use crate::{config::policy::ChangelogPolicy, forge::request::ForgeCommit};

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Check a commit's author against the policy allow-list.
///
/// Matching is a case-insensitive substring test against the author's login,
/// name and email so partial names or bare domains can be configured.
pub fn is_allowed(commit: &ForgeCommit, policy: &ChangelogPolicy) -> bool {
    if policy.authors.is_empty() {
        return true;
    }

    let candidates = [
        commit.author_login.as_deref(),
        commit.author_name.as_deref(),
        commit.author_email.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(normalize)
    .collect::<Vec<String>>();

    policy.authors.iter().map(|a| normalize(a)).any(|author| {
        candidates
            .iter()
            .any(|candidate| candidate.contains(author.as_str()))
    })
}
