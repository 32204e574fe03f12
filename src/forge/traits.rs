//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        request::{CompareRequest, ForgeCommit, ForgeTag, TagPageRequest},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;

    /// Commits reachable from `req.head` but not from `req.base`, oldest
    /// first.
    async fn compare_commits(
        &self,
        req: CompareRequest,
    ) -> Result<Vec<ForgeCommit>>;

    /// A single page of tags, most recent first. An empty page marks the end
    /// of the listing.
    async fn list_tags(&self, req: TagPageRequest) -> Result<Vec<ForgeTag>>;
}
