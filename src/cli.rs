use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "user-based collaborative filtering recommender")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct QueryArgs {
    /// User to compute results for
    pub user: String,
    /// JSON ratings file (defaults to $DATASET_PATH, then the built-in ratings)
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,
    /// Show at most this many entries
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the recommendation server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// JSON ratings file (defaults to $DATASET_PATH, then the built-in ratings)
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
    /// Recommend unrated items for a user
    Recommend(QueryArgs),
    /// Rank the other users by similarity to a user
    Similar(QueryArgs),
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
