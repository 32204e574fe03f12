//! CLI argument parsing and runtime settings.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::{
    analyzer::render::{HtmlLayout, Rendering},
    config::DEFAULT_CONFIG_FILE,
    forge::config::DEFAULT_HOST,
    orchestrator::TagRange,
};

/// Output file format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
}

/// Section layout for HTML output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    List,
    Table,
}

impl From<Layout> for HtmlLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::List => HtmlLayout::List,
            Layout::Table => HtmlLayout::Table,
        }
    }
}

/// Repository and wiki settings. Each falls back to the environment variable
/// of the same name, which may also be provided through a `.env` file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    /// GitHub personal access token with access to the repository.
    pub github_token: Option<String>,

    #[arg(long, env = "GITHUB_OWNER")]
    /// Owner of the GitHub repository.
    pub github_owner: Option<String>,

    #[arg(long, env = "GITHUB_REPO")]
    /// Name of the GitHub repository.
    pub github_repo: Option<String>,

    #[arg(long, env = "GITHUB_HOST", default_value = DEFAULT_HOST)]
    /// GitHub host used for pull request links.
    pub github_host: String,

    #[arg(long, env = "GITHUB_API_URL")]
    /// GitHub REST API url. Defaults to https://api.<github-host>.
    pub github_api_url: Option<String>,

    #[arg(long, env = "CONFLUENCE_BASE_URL")]
    /// Confluence site url, e.g. https://example.atlassian.net
    pub confluence_base_url: Option<String>,

    #[arg(long, env = "CONFLUENCE_PAGE_ID")]
    /// Confluence page to prepend the changelog to. Publishing is skipped
    /// when unset.
    pub confluence_page_id: Option<String>,

    #[arg(long, env = "CONFLUENCE_EMAIL")]
    /// Account email used to authenticate with Confluence.
    pub confluence_email: Option<String>,

    #[arg(long, env = "CONFLUENCE_API_TOKEN", hide_env_values = true)]
    /// Confluence API token.
    pub confluence_api_token: Option<String>,
}

/// Generate a changelog from the commits between two tags.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Tag to generate the changelog for. When TO_TAG is also given this is
    /// the starting tag instead.
    pub tag: String,

    /// Ending tag of an explicit range.
    pub to_tag: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    /// Path to the JSON changelog policy.
    pub config: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    /// Changelog file format.
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value_t = Layout::Table)]
    /// Section layout for HTML output and wiki publishing.
    pub layout: Layout,

    #[arg(long, default_value = ".")]
    /// Directory the changelog file is written to.
    pub output_dir: PathBuf,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

impl Args {
    /// Tag range requested on the command line.
    pub fn range(&self) -> TagRange {
        match &self.to_tag {
            Some(to) => TagRange::Between {
                from: self.tag.clone(),
                to: to.clone(),
            },
            None => TagRange::SincePrevious {
                to: self.tag.clone(),
            },
        }
    }

    /// Rendering used for the changelog file.
    pub fn rendering(&self) -> Rendering {
        match self.format {
            OutputFormat::Markdown => Rendering::Markdown,
            OutputFormat::Html => Rendering::Html(self.layout.into()),
        }
    }

    /// Rendering used for the wiki page, which always receives HTML.
    pub fn wiki_rendering(&self) -> Rendering {
        Rendering::Html(self.layout.into())
    }
}
