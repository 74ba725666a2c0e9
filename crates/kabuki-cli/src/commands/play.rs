//! The `kabuki play` command.

use std::path::PathBuf;

use anyhow::Result;

use kabuki_core::session::{QuizSession, SessionOptions, SessionOutcome};
use kabuki_menu::TerminalMenu;
use kabuki_record::FileRecorder;

use super::load_catalog;
use crate::config::load_config_from;

/// Flags of `kabuki play`; `None` falls back to the config file.
#[derive(Debug, Default)]
pub struct PlayArgs {
    pub quizzes: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub user: Option<String>,
    pub no_clear: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let quizzes_path = args.quizzes.unwrap_or(config.quizzes_dir);
    let results_dir = args.results.unwrap_or(config.results_dir);
    let user = args.user.or(config.user);
    let clear_screen = config.clear_screen && !args.no_clear;

    let quizzes = load_catalog(&quizzes_path, config.catalog_order)?;

    let mut menu = TerminalMenu::stdio().clear_screen(clear_screen);
    let mut recorder = FileRecorder::new(results_dir);

    let outcome = QuizSession::new(&quizzes, &mut menu, &mut recorder)
        .with_options(SessionOptions {
            user,
            started_at: None,
        })
        .run()?;

    match outcome {
        SessionOutcome::Exited => {
            eprintln!("### Exiting Kabuki ###");
        }
        SessionOutcome::Completed(session) => {
            print!("\n{}", session.summary);
            eprintln!("Transcript saved to: {}", session.transcript);
        }
    }

    Ok(())
}
