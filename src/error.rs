//! Error types for relnotes with the severity used to decide whether a run
//! fails.

use thiserror::Error;

/// How an error affects the outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Aborts the run with a non-zero exit code.
    Fatal,
    /// Reported to the user, but the run still succeeds.
    Warning,
}

/// Main error type for relnotes operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Tag resolution errors
    #[error("No tags found in repository {0}")]
    NoTags(String),

    #[error("Tag \"{tag}\" not found. Available tags: {available}")]
    TagNotFound { tag: String, available: String },

    #[error("No previous tag found before \"{0}\". This is the oldest tag.")]
    NoPreviousTag(String),

    // Forge errors
    #[error("Failed to list tags: {0}")]
    TagFetch(String),

    #[error("Failed to get commits: {0}")]
    RangeFetch(String),

    // Output errors
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Wiki errors
    #[error("Wiki update failed: {0}")]
    Publish(String),

    #[error(
        "Wiki page was modified by another user while publishing. Please try again."
    )]
    PublishConflict,
}

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a tag-not-found error
    pub fn tag_not_found(
        tag: impl Into<String>,
        available: impl Into<String>,
    ) -> Self {
        Self::TagNotFound {
            tag: tag.into(),
            available: available.into(),
        }
    }

    /// Create a publish error
    pub fn publish(msg: impl Into<String>) -> Self {
        Self::Publish(msg.into())
    }

    /// Publish failures are warnings; everything else aborts the run.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Publish(_) | Self::PublishConflict => Severity::Warning,
            _ => Severity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

// reqwest is only used to talk to the wiki, so every transport failure is a
// publish failure
impl From<reqwest::Error> for ChangelogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::Publish(format!("network request failed: {err}"))
        } else if let Some(status) = err.status() {
            Self::Publish(format!("request failed with status {status}: {err}"))
        } else {
            Self::Publish(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ChangelogError::config("missing field");
        assert_eq!(err.to_string(), "Invalid configuration: missing field");

        let err = ChangelogError::tag_not_found("v9", "v3, v2, v1");
        assert_eq!(
            err.to_string(),
            "Tag \"v9\" not found. Available tags: v3, v2, v1"
        );

        let err = ChangelogError::NoPreviousTag("v1".into());
        assert_eq!(
            err.to_string(),
            "No previous tag found before \"v1\". This is the oldest tag."
        );
    }

    #[test]
    fn test_only_publish_errors_are_warnings() {
        assert_eq!(
            ChangelogError::publish("boom").severity(),
            Severity::Warning
        );
        assert_eq!(
            ChangelogError::PublishConflict.severity(),
            Severity::Warning
        );

        let fatal = vec![
            ChangelogError::config("bad"),
            ChangelogError::NoTags("o/r".into()),
            ChangelogError::tag_not_found("v9", ""),
            ChangelogError::NoPreviousTag("v1".into()),
            ChangelogError::TagFetch("denied".into()),
            ChangelogError::RangeFetch("unknown ref".into()),
            ChangelogError::Write {
                path: "CHANGELOG.md".into(),
                source: std::io::Error::other("disk full"),
            },
        ];

        for err in fatal {
            assert!(err.is_fatal(), "expected fatal: {err}");
        }
    }
}
