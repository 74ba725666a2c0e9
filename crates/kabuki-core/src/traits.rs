//! Traits for the collaborators the session drives: the menu surface that
//! collects input and the recorder that persists the transcript.
//!
//! These are implemented by the `kabuki-menu` and `kabuki-record` crates
//! respectively.

use chrono::NaiveDateTime;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Menu provider trait
// ---------------------------------------------------------------------------

/// Trait for interactive surfaces that present choices and return selections.
///
/// Every call blocks until the player responds.
pub trait MenuProvider {
    /// Top-level menu: `options` followed by an implicit exit slot.
    ///
    /// Returns an index in `0..=options.len()`; `options.len()` means exit.
    fn present_selection(&mut self, title: &str, options: &[String]) -> Result<usize>;

    /// Pick exactly one of `options`. Returns its index.
    fn present_single_choice(&mut self, title: &str, prompt: &str, options: &[String])
        -> Result<usize>;

    /// Pick `exact_count` distinct options, returned in the order picked.
    ///
    /// The session re-asks until the returned picks are valid, so an
    /// implementation may return early (for example after a cancelled pick).
    fn present_multi_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
        exact_count: usize,
    ) -> Result<Vec<usize>>;

    /// Capture one line of free text, without its line terminator.
    fn present_free_text(&mut self, title: &str, prompt: &str) -> Result<String>;

    /// Show `message` and wait for the player to continue.
    fn present_feedback(&mut self, title: &str, message: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Session recorder trait
// ---------------------------------------------------------------------------

/// Trait for append-only transcript sinks.
pub trait SessionRecorder {
    /// Create the transcript for a new session and write `header` to it.
    ///
    /// Returns a description of where the transcript lives (a file path for
    /// the file recorder).
    fn open(&mut self, meta: &TranscriptMeta, header: &str) -> Result<String>;

    /// Append a block of text to the open transcript.
    fn append(&mut self, block: &str) -> Result<()>;
}

/// What a recorder needs to know to name a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptMeta {
    /// Sanitized player name.
    pub user: String,
    /// Sanitized quiz name.
    pub quiz: String,
    /// Local time the session started.
    pub started_at: NaiveDateTime,
}

impl TranscriptMeta {
    /// `YYYY-MM-DD_HH-MM-SS`, used in both the file name and the header.
    pub fn timestamp(&self) -> String {
        self.started_at.format("%Y-%m-%d_%H-%M-%S").to_string()
    }
}

/// Keep only alphanumeric characters. Whitespace and punctuation are dropped.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sanitize_strips_whitespace_and_punctuation() {
        assert_eq!(sanitize_name("  Ada Lovelace! "), "AdaLovelace");
        assert_eq!(sanitize_name("World Capitals (Hard)"), "WorldCapitalsHard");
        assert_eq!(sanitize_name("../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_name("Zoë"), "Zoë");
    }

    #[test]
    fn timestamp_is_zero_padded() {
        let meta = TranscriptMeta {
            user: "ada".into(),
            quiz: "capitals".into(),
            started_at: NaiveDate::from_ymd_opt(2024, 3, 7)
                .unwrap()
                .and_hms_opt(9, 5, 2)
                .unwrap(),
        };
        assert_eq!(meta.timestamp(), "2024-03-07_09-05-02");
    }
}
