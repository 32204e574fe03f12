//! Commit classification and changelog assembly.
//!
//! Parses conventional commits, filters them by author and type policy,
//! groups them into sections and renders the result as Markdown or HTML.

use log::*;

use crate::{
    analyzer::{
        changelog::{ChangelogDocument, push_item},
        commit::ParsedCommit,
        render::Rendering,
    },
    config::policy::ChangelogPolicy,
    forge::request::ForgeCommit,
};

pub mod author;
pub mod changelog;
pub mod commit;
pub mod render;
pub mod tag;

/// Turns the commits of a release range into a rendered changelog.
pub struct Analyzer {
    policy: ChangelogPolicy,
    pull_link_base_url: String,
}

impl Analyzer {
    /// Create analyzer with the changelog policy and the base url pull
    /// request numbers are appended to.
    pub fn new(
        policy: ChangelogPolicy,
        pull_link_base_url: impl Into<String>,
    ) -> Self {
        Self {
            policy,
            pull_link_base_url: pull_link_base_url.into(),
        }
    }

    /// Group commits into sections in the order they are supplied and render
    /// them under a heading for `version`.
    pub fn assemble(
        &self,
        commits: &[ForgeCommit],
        version: &str,
        rendering: Rendering,
    ) -> ChangelogDocument {
        let mut sections = vec![];

        for commit in commits.iter() {
            if !author::is_allowed(commit, &self.policy) {
                debug!("skipping commit from unlisted author: {}", commit.id);
                continue;
            }

            let parsed = ParsedCommit::parse(&commit.message);

            if self.policy.is_ignored(&parsed.commit_type) {
                debug!(
                    "skipping ignored commit type {}: {}",
                    parsed.commit_type, commit.id
                );
                continue;
            }

            let title = self.policy.section_title(&parsed.commit_type);

            let link = parsed
                .pr_number
                .as_deref()
                .map(|n| (n, format!("{}/{n}", self.pull_link_base_url)));

            let item = rendering.item(
                &parsed.description,
                link.as_ref().map(|(n, url)| (*n, url.as_str())),
            );

            push_item(&mut sections, title, item);
        }

        let content =
            rendering.document(version, &sections, &self.policy.table);

        ChangelogDocument {
            version: version.to_string(),
            rendering,
            sections,
            content,
        }
    }
}
