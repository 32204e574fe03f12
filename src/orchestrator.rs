//! Coordinates a single changelog run: resolve the tag range, fetch commits,
//! assemble and write the changelog, then publish it to the wiki.
use derive_builder::Builder;
use log::*;
use std::{
    path::{Path, PathBuf},
    rc::Rc,
};
use tokio::fs;

use crate::{
    analyzer::{Analyzer, changelog::ChangelogDocument, render::Rendering},
    error::{ChangelogError, Result},
    forge::manager::ForgeManager,
    wiki::traits::Wiki,
};

/// Tags bounding the release being described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRange {
    /// Both ends given explicitly.
    Between { from: String, to: String },
    /// Only the release tag given; the start is the tag listed after it.
    SincePrevious { to: String },
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunReport {
    /// Where the changelog file was written.
    pub path: PathBuf,
    pub document: ChangelogDocument,
    /// Non-fatal errors encountered after the file was written.
    pub warnings: Vec<ChangelogError>,
}

#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct OrchestratorParams {
    pub analyzer: Rc<Analyzer>,
    pub forge: Rc<ForgeManager>,
    #[builder(default)]
    pub wiki: Option<Rc<dyn Wiki>>,
    pub output_dir: PathBuf,
    #[builder(default)]
    pub rendering: Rendering,
    #[builder(default)]
    pub wiki_rendering: Rendering,
}

impl OrchestratorParamsBuilder {
    pub fn build(&self) -> Result<Orchestrator> {
        let params = self._build().map_err(|e| {
            ChangelogError::config(format!(
                "Failed to build orchestrator: {}",
                e
            ))
        })?;
        Ok(Orchestrator::new(params))
    }
}

pub struct Orchestrator {
    analyzer: Rc<Analyzer>,
    forge: Rc<ForgeManager>,
    wiki: Option<Rc<dyn Wiki>>,
    output_dir: PathBuf,
    rendering: Rendering,
    wiki_rendering: Rendering,
}

impl Orchestrator {
    pub fn builder() -> OrchestratorParamsBuilder {
        OrchestratorParamsBuilder::default()
    }

    pub fn new(params: OrchestratorParams) -> Self {
        Self {
            analyzer: params.analyzer,
            forge: params.forge,
            wiki: params.wiki,
            output_dir: params.output_dir,
            rendering: params.rendering,
            wiki_rendering: params.wiki_rendering,
        }
    }

    pub async fn run(&self, range: TagRange) -> Result<RunReport> {
        let (from, to) = self.resolve_range(range).await?;

        info!("fetching commits between {from} and {to}");
        let commits = self.forge.get_commits_between(&from, &to).await?;

        if commits.is_empty() {
            warn!("no commits found between {from} and {to}");
        }

        let document = self.analyzer.assemble(&commits, &to, self.rendering);

        if document.is_empty() {
            warn!("no changelog entries remain for {to} after filtering");
        } else {
            info!(
                "assembled {} entries in {} sections",
                document.item_count(),
                document.sections.len()
            );
        }

        let path = self.output_dir.join(document.rendering.file_name());
        write_changelog(&path, &document.content).await?;
        info!(
            "changelog for {} written to {}",
            document.version,
            path.display()
        );

        let mut warnings = vec![];

        if let Some(wiki) = self.wiki.as_ref() {
            let html = if self.wiki_rendering == self.rendering {
                document.content.clone()
            } else {
                self.analyzer
                    .assemble(&commits, &to, self.wiki_rendering)
                    .content
            };

            info!("publishing changelog to wiki");

            match wiki.prepend(&html).await {
                Ok(()) => info!("wiki page updated"),
                Err(err) if !err.is_fatal() => warnings.push(err),
                Err(err) => return Err(err),
            }
        } else {
            debug!("no wiki page configured: skipping publish");
        }

        Ok(RunReport {
            path,
            document,
            warnings,
        })
    }

    async fn resolve_range(&self, range: TagRange) -> Result<(String, String)> {
        match range {
            TagRange::Between { from, to } => Ok((from, to)),
            TagRange::SincePrevious { to } => {
                info!("finding previous tag for {to}");
                let from = self.forge.find_previous_tag(&to).await?;
                Ok((from, to))
            }
        }
    }
}

async fn write_changelog(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .map_err(|source| ChangelogError::Write {
            path: path.display().to_string(),
            source,
        })
}
