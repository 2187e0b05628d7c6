mod cli;
mod config;
mod editor;
mod error;
mod journal;
mod models;
mod search;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wm")]
#[command(version)]
#[command(about = "A working-memory log system", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Date of the log to open (defaults to today)
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the configuration file in the editor
    Config,
    /// Regex-search all stored logs
    Search {
        /// Search terms, each compiled as a regular expression
        #[arg(value_name = "TERM")]
        terms: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let config_path = config::file_path();

    let result = match cli.command {
        Some(Commands::Config) => cli::config::run(config_path),
        Some(Commands::Search { terms }) => cli::search::run(config_path, terms),
        None => cli::open::run(config_path, cli.date),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
