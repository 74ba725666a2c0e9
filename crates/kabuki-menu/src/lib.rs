//! kabuki-menu: implementations of the `MenuProvider` trait.
//!
//! [`TerminalMenu`] draws numbered menus on any `BufRead`/`Write` pair (the
//! process's stdin and stdout in the binary). [`ScriptedMenu`] replays a fixed
//! list of inputs for tests and demos.

pub mod scripted;
pub mod terminal;

pub use scripted::{ScriptedInput, ScriptedMenu, ShownMenu};
pub use terminal::TerminalMenu;
