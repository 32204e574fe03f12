/// Represents a normalized commit returned from the forge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgeCommit {
    pub id: String,
    pub message: String,
    /// Forge account handle of the author, when the commit is linked to one
    pub author_login: Option<String>,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

/// Named pointer to a commit, as listed by the forge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgeTag {
    pub name: String,
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request for the commits reachable from `head` but not from `base`.
pub struct CompareRequest {
    pub base: String,
    pub head: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Request for a single page of the tag listing (pages start at 1).
pub struct TagPageRequest {
    pub page: u32,
    pub per_page: u8,
}
