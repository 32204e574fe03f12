use clap::Parser;
use color_eyre::eyre::Result;
use log::*;
use std::rc::Rc;

use relnotes::{
    analyzer::Analyzer,
    cli::Args,
    config::{policy::ChangelogPolicy, settings::Settings},
    forge::{github::Github, manager::ForgeManager},
    orchestrator::{Orchestrator, RunReport},
    wiki::{confluence::Confluence, traits::Wiki},
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("relnotes")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

async fn execute(args: &Args) -> relnotes::Result<RunReport> {
    let policy = ChangelogPolicy::load(&args.config)?;
    let settings = Settings::resolve(&args.settings)?;

    let analyzer =
        Analyzer::new(policy, settings.remote.pull_link_base_url.clone());

    let github = Github::new(settings.remote.clone()).await?;
    let forge = ForgeManager::new(Box::new(github));

    let mut builder = Orchestrator::builder();

    builder
        .analyzer(Rc::new(analyzer))
        .forge(Rc::new(forge))
        .output_dir(args.output_dir.clone())
        .rendering(args.rendering())
        .wiki_rendering(args.wiki_rendering());

    if let Some(wiki_config) = settings.wiki.clone() {
        match Confluence::new(wiki_config) {
            Ok(confluence) => {
                builder.wiki(Rc::new(confluence) as Rc<dyn Wiki>);
            }
            Err(err) => warn!("wiki publishing disabled: {err}"),
        }
    }

    builder.build()?.run(args.range()).await
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    match execute(&args).await {
        Ok(report) => {
            for warning in report.warnings.iter() {
                warn!("{warning}");
            }

            if !report.warnings.is_empty() {
                warn!(
                    "The changelog was still saved to {}",
                    report.path.display()
                );
            }

            Ok(())
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
