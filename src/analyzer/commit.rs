use regex::Regex;
use std::sync::LazyLock;

/// Type assigned to commits that do not follow the conventional format.
pub const OTHER_TYPE: &str = "other";

static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<type>[A-Za-z0-9_]+)(?:\([^)]+\))?(?<breaking>!)?:\s*(?<description>.+)$")
        .unwrap()
});

/// Matches GitHub's squash-merge back reference, e.g. "(#123)"
static PR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(?<number>\d+)\)").unwrap());

/// Commit classification derived from the first line of a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub commit_type: String,
    pub description: String,
    pub pr_number: Option<String>,
    pub breaking: bool,
}

impl ParsedCommit {
    /// Parse the first line of a commit message. Messages that are not
    /// conventional commits fall back to the "other" type instead of failing.
    pub fn parse(message: &str) -> Self {
        let first_line = message.lines().next().unwrap_or_default();

        let pr_number = PR_REGEX
            .captures(first_line)
            .map(|c| c["number"].to_string());

        match CONVENTIONAL_REGEX.captures(first_line) {
            Some(captures) => Self {
                commit_type: captures["type"].to_lowercase(),
                description: captures["description"].trim().to_string(),
                pr_number,
                breaking: captures.name("breaking").is_some(),
            },
            None => Self {
                commit_type: OTHER_TYPE.to_string(),
                description: first_line.trim().to_string(),
                pr_number,
                breaking: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_conventional_commit() {
        let parsed = ParsedCommit::parse("feat: add login page");

        assert_eq!(parsed.commit_type, "feat");
        assert_eq!(parsed.description, "add login page");
        assert_eq!(parsed.pr_number, None);
        assert!(!parsed.breaking);
    }

    #[test]
    fn test_parse_discards_scope() {
        let parsed = ParsedCommit::parse("fix(auth-service): handle expiry");

        assert_eq!(parsed.commit_type, "fix");
        assert_eq!(parsed.description, "handle expiry");
    }

    #[test]
    fn test_parse_breaking_marker() {
        let parsed = ParsedCommit::parse("refactor(api)!: drop v1 routes");

        assert_eq!(parsed.commit_type, "refactor");
        assert_eq!(parsed.description, "drop v1 routes");
        assert!(parsed.breaking);

        let parsed = ParsedCommit::parse("feat!: new config format");
        assert_eq!(parsed.commit_type, "feat");
        assert!(parsed.breaking);
    }

    #[test]
    fn test_parse_lowercases_type_and_trims_description() {
        let parsed = ParsedCommit::parse("FEAT:    shout less   ");

        assert_eq!(parsed.commit_type, "feat");
        assert_eq!(parsed.description, "shout less");
    }

    #[test]
    fn test_parse_only_uses_first_line() {
        let parsed = ParsedCommit::parse(
            "fix: null pointer\n\nfeat: not a subject (#99)\nmore body",
        );

        assert_eq!(parsed.commit_type, "fix");
        assert_eq!(parsed.description, "null pointer");
        assert_eq!(parsed.pr_number, None);
    }

    #[test]
    fn test_parse_non_conventional_falls_back_to_other() {
        let parsed = ParsedCommit::parse("  Update README wording  \nbody");

        assert_eq!(parsed.commit_type, OTHER_TYPE);
        assert_eq!(parsed.description, "Update README wording");
        assert!(!parsed.breaking);
    }

    #[test]
    fn test_parse_missing_description() {
        let parsed = ParsedCommit::parse("feat:");

        assert_eq!(parsed.commit_type, OTHER_TYPE);
        assert_eq!(parsed.description, "feat:");

        // trailing whitespace still satisfies the description capture
        let parsed = ParsedCommit::parse("feat:   ");

        assert_eq!(parsed.commit_type, "feat");
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn test_parse_non_ascii_prefix_falls_back_to_other() {
        let parsed = ParsedCommit::parse("Correção: ajusta layout");

        assert_eq!(parsed.commit_type, OTHER_TYPE);
        assert_eq!(parsed.description, "Correção: ajusta layout");

        let parsed = ParsedCommit::parse("fix: corrige descrição");
        assert_eq!(parsed.commit_type, "fix");
        assert_eq!(parsed.description, "corrige descrição");
    }

    #[test]
    fn test_parse_empty_message() {
        let parsed = ParsedCommit::parse("");

        assert_eq!(parsed.commit_type, OTHER_TYPE);
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.pr_number, None);
    }

    #[test]
    fn test_parse_extracts_pr_number() {
        let parsed = ParsedCommit::parse("feat: add login (#10)");

        assert_eq!(parsed.commit_type, "feat");
        assert_eq!(parsed.description, "add login (#10)");
        assert_eq!(parsed.pr_number, Some("10".to_string()));
    }

    #[test]
    fn test_parse_extracts_pr_number_from_non_conventional_commit() {
        let parsed = ParsedCommit::parse("Merge branch updates (#123)");

        assert_eq!(parsed.commit_type, OTHER_TYPE);
        assert_eq!(parsed.pr_number, Some("123".to_string()));
    }

    #[test]
    fn test_parse_ignores_malformed_pr_references() {
        assert_eq!(ParsedCommit::parse("fix: issue #12").pr_number, None);
        assert_eq!(ParsedCommit::parse("fix: thing (#abc)").pr_number, None);
    }
}
