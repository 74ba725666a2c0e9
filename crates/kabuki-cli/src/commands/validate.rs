//! The `kabuki validate` command.

use std::path::PathBuf;

use anyhow::Result;

use kabuki_core::parser::{validate_catalog, CatalogOrder};

use super::load_catalog;

pub fn execute(quizzes_path: PathBuf) -> Result<()> {
    let quizzes = load_catalog(&quizzes_path, CatalogOrder::FileName)?;

    let mut total_warnings = 0;

    for ((name, warnings), quiz) in validate_catalog(&quizzes).iter().zip(&quizzes) {
        println!("Quiz: {name} ({} questions)", quiz.questions.len());

        for w in warnings {
            let prefix = w
                .question
                .map(|n| format!("  [#{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
