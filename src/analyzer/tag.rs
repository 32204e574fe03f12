use crate::{
    error::{ChangelogError, Result},
    forge::request::ForgeTag,
};

/// Number of tag names listed when the requested tag is missing.
const AVAILABLE_TAGS_PREVIEW: usize = 5;

/// Find the tag released before `current`.
///
/// `tags` must be in the order the forge lists them (most recent first), so
/// the previous release is simply the next entry after `current`.
pub fn find_previous(tags: &[ForgeTag], current: &str) -> Result<String> {
    let index = tags
        .iter()
        .position(|t| t.name == current)
        .ok_or_else(|| {
            let mut available = tags
                .iter()
                .take(AVAILABLE_TAGS_PREVIEW)
                .map(|t| t.name.as_str())
                .collect::<Vec<&str>>()
                .join(", ");

            if tags.len() > AVAILABLE_TAGS_PREVIEW {
                available.push_str("...");
            }

            ChangelogError::tag_not_found(current, available)
        })?;

    tags.get(index + 1)
        .map(|t| t.name.clone())
        .ok_or_else(|| ChangelogError::NoPreviousTag(current.to_string()))
}
