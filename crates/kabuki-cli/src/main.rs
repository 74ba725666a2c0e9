//! kabuki CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::play::PlayArgs;

#[derive(Parser)]
#[command(name = "kabuki", version, about = "Terminal quiz runner")]
struct Cli {
    /// Defaults to `play` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a quiz and play it
    Play {
        /// Quiz directory or single quiz file
        #[arg(long)]
        quizzes: Option<PathBuf>,

        /// Directory transcripts are written to
        #[arg(long)]
        results: Option<PathBuf>,

        /// Player name (asked for when not given)
        #[arg(long)]
        user: Option<String>,

        /// Do not clear the terminal between menus
        #[arg(long)]
        no_clear: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check quiz definition files
    Validate {
        /// Quiz directory or single quiz file
        #[arg(long)]
        quizzes: PathBuf,
    },

    /// List available quizzes
    List {
        /// Quiz directory or single quiz file
        #[arg(long)]
        quizzes: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::play::execute(PlayArgs::default()),
        Some(Commands::Play {
            quizzes,
            results,
            user,
            no_clear,
            config,
        }) => commands::play::execute(PlayArgs {
            quizzes,
            results,
            user,
            no_clear,
            config,
        }),
        Some(Commands::Validate { quizzes }) => commands::validate::execute(quizzes),
        Some(Commands::List { quizzes, config }) => commands::list::execute(quizzes, config),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
