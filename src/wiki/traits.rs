//! Traits related to wiki publishing
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::error::Result;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Wiki: Send + Sync {
    /// Insert `html` at the top of the configured page, keeping the existing
    /// content below it.
    async fn prepend(&self, html: &str) -> Result<()>;
}
