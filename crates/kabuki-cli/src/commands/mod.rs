pub mod init;
pub mod list;
pub mod play;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use kabuki_core::model::Quiz;
use kabuki_core::parser::{load_quizzes, CatalogOrder};

/// Load the catalog at `path`, naming malformed definitions apart from
/// filesystem problems.
pub(crate) fn load_catalog(path: &Path, order: CatalogOrder) -> Result<Vec<Quiz>> {
    match load_quizzes(path, order) {
        Ok(quizzes) => Ok(quizzes),
        Err(e) if e.is_load_failure() => {
            Err(e).with_context(|| format!("quiz load failed in {}", path.display()))
        }
        Err(e) => {
            Err(e).with_context(|| format!("failed to read quizzes from {}", path.display()))
        }
    }
}
