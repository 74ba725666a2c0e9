//! kabuki-core: quiz model, catalog loading, answer evaluation and the
//! session state machine.
//!
//! The interactive menu and the transcript sink are reached through the
//! traits in [`traits`]; concrete implementations live in `kabuki-menu` and
//! `kabuki-record`.

pub mod error;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod traits;

pub use error::{KabukiError, Result};
