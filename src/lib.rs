pub mod api;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod recommendation;
pub mod services;
pub mod similarity;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::PathBuf;

use crate::cli::{Command, QueryArgs};
use crate::config::settings::{AppConfig, DatasetSettings};
use crate::dataset::{load_dataset, RatingDataset};
use crate::services::report;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16, dataset: Option<PathBuf>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_port(port).with_dataset_path(dataset);
        let service = ServerService::new(config);
        service.run().await
    })
}

pub fn handle_recommend(args: &QueryArgs) -> Result<()> {
    let dataset = load_query_dataset(args)?;
    let recommendations = report::truncate(
        recommendation::recommend(&args.user, &dataset)?,
        args.limit,
    );

    if args.json {
        println!("{}", report::render_json(&recommendations)?);
    } else {
        print!("{}", report::render_recommendations(&args.user, &recommendations));
    }
    Ok(())
}

pub fn handle_similar(args: &QueryArgs) -> Result<()> {
    let dataset = load_query_dataset(args)?;
    let similar_users = report::truncate(
        similarity::rank_similar_users(&args.user, &dataset)?,
        args.limit,
    );

    if args.json {
        println!("{}", report::render_json(&similar_users)?);
    } else {
        print!("{}", report::render_similarities(&args.user, &similar_users));
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn load_query_dataset(args: &QueryArgs) -> Result<RatingDataset> {
    let settings = DatasetSettings::from_env().with_override(args.dataset.clone());
    load_dataset(&settings)
}
