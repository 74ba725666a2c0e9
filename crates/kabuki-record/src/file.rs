//! Transcript files on disk.
//!
//! Each session gets `<results_dir>/<user>_<quiz>_<YYYY-MM-DD_HH-MM-SS>.txt`,
//! opened in append mode and flushed after every block so an aborted session
//! still leaves everything answered so far.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use kabuki_core::error::{KabukiError, Result};
use kabuki_core::traits::{SessionRecorder, TranscriptMeta};

/// File name of the transcript for a session.
pub fn transcript_file_name(meta: &TranscriptMeta) -> String {
    format!("{}_{}_{}.txt", meta.user, meta.quiz, meta.timestamp())
}

/// Writes transcripts under a results directory.
#[derive(Debug)]
pub struct FileRecorder {
    results_dir: PathBuf,
    open: Option<(PathBuf, File)>,
}

impl FileRecorder {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            open: None,
        }
    }

    /// Path of the transcript being written, once a session has started.
    pub fn path(&self) -> Option<&Path> {
        self.open.as_ref().map(|(path, _)| path.as_path())
    }

    fn write_block(path: &Path, file: &mut File, block: &str) -> Result<()> {
        file.write_all(block.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| KabukiError::io_at("append to transcript", path, e))
    }
}

impl SessionRecorder for FileRecorder {
    fn open(&mut self, meta: &TranscriptMeta, header: &str) -> Result<String> {
        std::fs::create_dir_all(&self.results_dir)
            .map_err(|e| KabukiError::io_at("create results directory", &self.results_dir, e))?;

        let path = self.results_dir.join(transcript_file_name(meta));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| KabukiError::io_at("open transcript", &path, e))?;
        Self::write_block(&path, &mut file, header)?;

        tracing::info!("transcript opened at {}", path.display());
        let location = path.display().to_string();
        self.open = Some((path, file));
        Ok(location)
    }

    fn append(&mut self, block: &str) -> Result<()> {
        let Some((path, file)) = self.open.as_mut() else {
            return Err(KabukiError::io(
                "append to transcript",
                io::Error::new(io::ErrorKind::NotConnected, "no transcript is open"),
            ));
        };
        Self::write_block(path, file, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn meta() -> TranscriptMeta {
        TranscriptMeta {
            user: "Ada".into(),
            quiz: "WorldCapitals".into(),
            started_at: NaiveDate::from_ymd_opt(2024, 11, 30)
                .unwrap()
                .and_hms_opt(23, 59, 1)
                .unwrap(),
        }
    }

    #[test]
    fn file_name_layout() {
        assert_eq!(
            transcript_file_name(&meta()),
            "Ada_WorldCapitals_2024-11-30_23-59-01.txt"
        );
    }

    #[test]
    fn creates_directory_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let results = dir.path().join("results");
        let mut recorder = FileRecorder::new(&results);

        let location = recorder.open(&meta(), "user: Ada\n\n").unwrap();
        recorder.append("Type: single_choice\n\n").unwrap();
        recorder.append("Quiz complete!\n").unwrap();

        let path = recorder.path().unwrap().to_path_buf();
        assert_eq!(location, path.display().to_string());
        assert_eq!(path.parent().unwrap(), results);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "user: Ada\n\nType: single_choice\n\nQuiz complete!\n"
        );
    }

    #[test]
    fn append_before_open_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = FileRecorder::new(dir.path());
        assert!(matches!(
            recorder.append("x").unwrap_err(),
            KabukiError::Io { .. }
        ));
    }

    #[test]
    fn unwritable_results_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("results");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let mut recorder = FileRecorder::new(&blocker);
        let err = recorder.open(&meta(), "header").unwrap_err();
        assert!(err.to_string().contains("create results directory"), "got: {err}");
    }
}
