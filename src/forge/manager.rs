//! Manager that wraps forge implementations
use log::*;

use crate::{
    analyzer::tag,
    error::{ChangelogError, Result},
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{CompareRequest, ForgeCommit, ForgeTag, TagPageRequest},
        traits::Forge,
    },
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    /// Fetch every tag in the repository, following pages until the forge
    /// returns an empty one.
    pub async fn list_all_tags(&self) -> Result<Vec<ForgeTag>> {
        let mut tags = vec![];
        let mut page = 1;

        loop {
            debug!("fetching tags page {page}");

            let batch = self
                .forge
                .list_tags(TagPageRequest {
                    page,
                    per_page: DEFAULT_PAGE_SIZE,
                })
                .await?;

            if batch.is_empty() {
                break;
            }

            tags.extend(batch);
            page += 1;
        }

        debug!("found {} tags", tags.len());

        Ok(tags)
    }

    /// Resolve the tag released immediately before `current`.
    pub async fn find_previous_tag(&self, current: &str) -> Result<String> {
        let tags = self.list_all_tags().await?;

        if tags.is_empty() {
            return Err(ChangelogError::NoTags(self.remote_config.path()));
        }

        let previous = tag::find_previous(&tags, current)?;
        info!("previous tag for {current}: {previous}");

        Ok(previous)
    }

    pub async fn get_commits_between(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<ForgeCommit>> {
        debug!("getting commits between {from} and {to}");

        let commits = self
            .forge
            .compare_commits(CompareRequest {
                base: from.to_string(),
                head: to.to_string(),
            })
            .await?;

        info!("found {} commits between {from} and {to}", commits.len());

        Ok(commits)
    }
}
