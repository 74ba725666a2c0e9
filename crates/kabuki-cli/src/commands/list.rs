//! The `kabuki list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::load_catalog;
use crate::config::load_config_from;

pub fn execute(quizzes: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let quizzes_path = quizzes.unwrap_or(config.quizzes_dir);
    let quizzes = load_catalog(&quizzes_path, config.catalog_order)?;

    if quizzes.is_empty() {
        println!(
            "No quizzes found in {}. Run `kabuki init` to create an example.",
            quizzes_path.display()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Name", "Questions", "Points", "Description"]);

    for (i, quiz) in quizzes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&quiz.id),
            Cell::new(&quiz.name),
            Cell::new(quiz.questions.len()),
            Cell::new(quiz.total_points()),
            Cell::new(&quiz.description),
        ]);
    }

    println!("{table}");
    Ok(())
}
