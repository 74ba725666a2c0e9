//! Error types shared by every kabuki crate.
//!
//! All of these are fatal at the point where they occur: a quiz that fails to
//! load aborts startup, and a transcript that cannot be written aborts the
//! session rather than silently dropping entries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading quizzes or running a session.
#[derive(Debug, Error)]
pub enum KabukiError {
    /// A quiz definition is missing a required field, has a field of the
    /// wrong shape, or is not parseable at all.
    #[error("malformed quiz {source_name}: {reason}")]
    MalformedQuiz { source_name: String, reason: String },

    /// Reading a quiz or writing a transcript failed.
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The interactive surface could not produce a response.
    #[error("menu failed: {0}")]
    Menu(String),

    /// A menu returned an index outside the options it was given.
    #[error("selection {index} is out of range for {len} options")]
    InvalidSelection { index: usize, len: usize },
}

impl KabukiError {
    pub(crate) fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        KabukiError::MalformedQuiz {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        KabukiError::Io {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O error that happened while touching `path`.
    pub fn io_at(action: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        KabukiError::Io {
            context: format!("failed to {action}: {}", path.display()),
            source,
        }
    }

    /// Returns `true` for errors raised while loading quiz definitions.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, KabukiError::MalformedQuiz { .. })
    }
}

/// Convenience alias used throughout the core crate.
pub type Result<T, E = KabukiError> = std::result::Result<T, E>;
