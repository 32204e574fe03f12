//! Changelog policy loaded from the JSON configuration file.
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

use crate::error::{ChangelogError, Result};

/// Section title for commit types without a configured title.
pub const OTHERS_SECTION: &str = "Others";

/// Header and placeholder text for the HTML table layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Header of the second column, left empty in the body row.
    pub description_header: String,
    /// Header of the third column.
    pub links_header: String,
    /// Single list item rendered in the links column.
    pub links_placeholder: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            description_header: "Description".into(),
            links_header: "Links".into(),
            links_placeholder: "Link to doc here".into(),
        }
    }
}

/// User supplied rules for author filtering, type exclusion and section
/// naming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangelogPolicy {
    /// Allow-listed identity substrings. Empty allows every author.
    pub authors: Vec<String>,
    /// Commit types dropped from the changelog entirely.
    pub ignore_types: Vec<String>,
    /// Commit type to section title.
    pub types: HashMap<String, String>,
    pub table: TableConfig,
}

impl ChangelogPolicy {
    /// Read and parse the policy file. A missing file is an error rather
    /// than an implicit default policy.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChangelogError::config(format!(
                "failed to read {}: {e}",
                path.display()
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            ChangelogError::config(format!(
                "failed to parse {}: {e}",
                path.display()
            ))
        })
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn is_ignored(&self, commit_type: &str) -> bool {
        self.ignore_types.iter().any(|t| t == commit_type)
    }

    pub fn section_title(&self, commit_type: &str) -> &str {
        self.types
            .get(commit_type)
            .map(String::as_str)
            .unwrap_or(OTHERS_SECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_full_policy() {
        let policy = ChangelogPolicy::from_json(
            r#"{
                "authors": ["alice", "bob@example.com"],
                "ignoreTypes": ["chore", "ci"],
                "types": { "feat": "Features", "fix": "Fixes" },
                "table": { "descriptionHeader": "Descrição" }
            }"#,
        )
        .unwrap();

        assert_eq!(policy.authors, vec!["alice", "bob@example.com"]);
        assert!(policy.is_ignored("chore"));
        assert!(policy.is_ignored("ci"));
        assert!(!policy.is_ignored("feat"));
        assert_eq!(policy.section_title("feat"), "Features");
        assert_eq!(policy.table.description_header, "Descrição");
        assert_eq!(policy.table.links_header, "Links");
    }

    #[test]
    fn empty_object_uses_defaults() {
        let policy = ChangelogPolicy::from_json("{}").unwrap();

        assert_eq!(policy, ChangelogPolicy::default());
        assert!(policy.authors.is_empty());
        assert_eq!(policy.section_title("feat"), OTHERS_SECTION);
        assert_eq!(policy.table.description_header, "Description");
        assert_eq!(policy.table.links_placeholder, "Link to doc here");
    }

    #[test]
    fn unmapped_types_fall_back_to_others() {
        let policy =
            ChangelogPolicy::from_json(r#"{"types": {"feat": "Features"}}"#)
                .unwrap();

        assert_eq!(policy.section_title("docs"), OTHERS_SECTION);
        assert_eq!(policy.section_title("other"), OTHERS_SECTION);
    }

    #[test]
    fn loads_policy_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"ignoreTypes": ["chore"]}}"#).unwrap();

        let policy = ChangelogPolicy::load(file.path()).unwrap();

        assert_eq!(policy.ignore_types, vec!["chore"]);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ChangelogPolicy::load(&dir.path().join("config.json"));

        assert!(matches!(result, Err(ChangelogError::Config(_))));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = ChangelogPolicy::load(file.path());

        let err = result.unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
        assert!(err.to_string().contains("failed to parse"));
    }
}
