//! In-memory transcripts.

use std::io;

use kabuki_core::error::{KabukiError, Result};
use kabuki_core::traits::{SessionRecorder, TranscriptMeta};

use crate::file::transcript_file_name;

/// Keeps the transcript in a string. Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    meta: Option<TranscriptMeta>,
    contents: String,
    blocks: usize,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata of the opened transcript, if a session started.
    pub fn meta(&self) -> Option<&TranscriptMeta> {
        self.meta.as_ref()
    }

    /// Everything written so far, header included.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of blocks appended after the header.
    pub fn blocks(&self) -> usize {
        self.blocks
    }
}

impl SessionRecorder for MemoryRecorder {
    fn open(&mut self, meta: &TranscriptMeta, header: &str) -> Result<String> {
        self.meta = Some(meta.clone());
        self.contents = header.to_string();
        self.blocks = 0;
        Ok(format!("memory:{}", transcript_file_name(meta)))
    }

    fn append(&mut self, block: &str) -> Result<()> {
        if self.meta.is_none() {
            return Err(KabukiError::io(
                "append to transcript",
                io::Error::new(io::ErrorKind::NotConnected, "no transcript is open"),
            ));
        }
        self.contents.push_str(block);
        self.blocks += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn records_header_and_blocks() {
        let meta = TranscriptMeta {
            user: "Ada".into(),
            quiz: "Rivers".into(),
            started_at: NaiveDate::from_ymd_opt(2025, 2, 3)
                .unwrap()
                .and_hms_opt(4, 5, 6)
                .unwrap(),
        };
        let mut recorder = MemoryRecorder::new();
        assert!(recorder.append("too early").is_err());

        let location = recorder.open(&meta, "header\n").unwrap();
        recorder.append("one\n").unwrap();
        recorder.append("two\n").unwrap();

        assert_eq!(location, "memory:Ada_Rivers_2025-02-03_04-05-06.txt");
        assert_eq!(recorder.contents(), "header\none\ntwo\n");
        assert_eq!(recorder.blocks(), 2);
        assert_eq!(recorder.meta(), Some(&meta));
    }
}
