//! kabuki-record: implementations of the `SessionRecorder` trait.
//!
//! [`FileRecorder`] writes one plain-text transcript per session under a
//! results directory. [`MemoryRecorder`] keeps the transcript in a string.

pub mod file;
pub mod memory;

pub use file::{transcript_file_name, FileRecorder};
pub use memory::MemoryRecorder;
