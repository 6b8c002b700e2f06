use anyhow::Result;

use user_recommender::cli::Command;
use user_recommender::{handle_completions, handle_recommend, handle_serve, handle_similar, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, dataset } => handle_serve(*port, dataset.clone()),
        Command::Recommend(args) => handle_recommend(args),
        Command::Similar(args) => handle_similar(args),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
