//! Numbered terminal menus.
//!
//! Every menu is drawn as a title, an optional subtitle and a numbered list,
//! followed by a `>> ` prompt. The player types a number and presses Enter;
//! anything else re-prompts. Free-text prompts read a single line.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use kabuki_core::error::{KabukiError, Result};
use kabuki_core::report::verdict;
use kabuki_core::traits::MenuProvider;

/// Label of the extra slot appended to the quiz menu.
pub const EXIT_LABEL: &str = "Exit";
/// Label of the only option of the feedback menu.
pub const CONTINUE_LABEL: &str = "Continue";

const PROMPT: &str = ">> ";

/// A `MenuProvider` that reads from `input` and draws to `output`.
pub struct TerminalMenu<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl TerminalMenu<StdinLock<'static>, Stdout> {
    /// A menu on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalMenu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before drawing each menu.
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Consume the menu and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn draw(&mut self, title: &str, subtitle: &str, items: &[String]) -> Result<()> {
        let out = &mut self.output;
        if self.clear_screen {
            crossterm::queue!(out, Clear(ClearType::All), MoveTo(0, 0)).map_err(write_err)?;
        }
        writeln!(out, "\n  {}", title.bold()).map_err(write_err)?;
        if !subtitle.is_empty() {
            for line in subtitle.lines() {
                writeln!(out, "  {line}").map_err(write_err)?;
            }
        }
        writeln!(out).map_err(write_err)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(out, "  {} - {item}", i + 1).map_err(write_err)?;
        }
        if !items.is_empty() {
            writeln!(out).map_err(write_err)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        write!(self.output, "{PROMPT}").map_err(write_err)?;
        self.output.flush().map_err(write_err)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| KabukiError::io("failed to read from terminal", e))?;
        if read == 0 {
            return Err(KabukiError::Menu("input closed".into()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read until the player enters a number in `1..=count`; returns it 0-based.
    fn read_index(&mut self, count: usize) -> Result<usize> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(n - 1),
                _ => {
                    tracing::debug!("rejected menu input {line:?}");
                    writeln!(self.output, "Please enter a number between 1 and {count}.")
                        .map_err(write_err)?;
                }
            }
        }
    }
}

fn write_err(e: io::Error) -> KabukiError {
    KabukiError::io("failed to write to terminal", e)
}

impl<R: BufRead, W: Write> MenuProvider for TerminalMenu<R, W> {
    fn present_selection(&mut self, title: &str, options: &[String]) -> Result<usize> {
        let mut items = options.to_vec();
        items.push(EXIT_LABEL.to_string());
        self.draw(title, "", &items)?;
        self.read_index(items.len())
    }

    fn present_single_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<usize> {
        self.draw(title, prompt, options)?;
        self.read_index(options.len())
    }

    fn present_multi_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
        exact_count: usize,
    ) -> Result<Vec<usize>> {
        if exact_count > options.len() {
            return Err(KabukiError::InvalidSelection {
                index: exact_count,
                len: options.len(),
            });
        }
        let mut picked: Vec<usize> = Vec::with_capacity(exact_count);

        while picked.len() < exact_count {
            let items: Vec<String> = options
                .iter()
                .enumerate()
                .map(|(i, option)| match picked.iter().position(|&p| p == i) {
                    Some(order) => format!("[{}] {option}", order + 1),
                    None => format!("[ ] {option}"),
                })
                .collect();
            let subtitle = format!(
                "{prompt}\nSelect {exact_count} in order ({} left). Pick a selected item again to drop it.",
                exact_count - picked.len()
            );
            self.draw(title, &subtitle, &items)?;

            let index = self.read_index(options.len())?;
            match picked.iter().position(|&p| p == index) {
                Some(at) => {
                    picked.remove(at);
                }
                None => picked.push(index),
            }
        }

        Ok(picked)
    }

    fn present_free_text(&mut self, title: &str, prompt: &str) -> Result<String> {
        self.draw(title, prompt, &[])?;
        self.read_line()
    }

    fn present_feedback(&mut self, title: &str, message: &str) -> Result<()> {
        let styled = if message == verdict(true) {
            message.green().bold().to_string()
        } else {
            message.red().bold().to_string()
        };
        self.draw(title, &styled, &[CONTINUE_LABEL.to_string()])?;
        self.read_index(1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn menu(input: &str) -> TerminalMenu<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalMenu::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn output(menu: TerminalMenu<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn selection_includes_exit_slot() {
        let mut m = menu("3\n");
        let index = m
            .present_selection("Select a quiz", &options(&["Capitals", "Rivers"]))
            .unwrap();
        assert_eq!(index, 2);
        let out = output(m);
        assert!(out.contains("1 - Capitals"));
        assert!(out.contains("3 - Exit"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let mut m = menu("zero\n0\n9\n 2 \n");
        let index = m
            .present_single_choice("#1", "Pick", &options(&["A", "B"]))
            .unwrap();
        assert_eq!(index, 1);
        assert_eq!(
            output(m)
                .matches("Please enter a number between 1 and 2.")
                .count(),
            3
        );
    }

    #[test]
    fn multi_choice_keeps_pick_order() {
        let mut m = menu("3\n1\n");
        let picks = m
            .present_multi_choice("#2", "Pick two", &options(&["A", "B", "C"]), 2)
            .unwrap();
        assert_eq!(picks, vec![2, 0]);
        assert!(output(m).contains("[1] C"));
    }

    #[test]
    fn multi_choice_repick_drops_selection() {
        let mut m = menu("1\n1\n2\n3\n");
        let picks = m
            .present_multi_choice("#2", "Pick two", &options(&["A", "B", "C"]), 2)
            .unwrap();
        assert_eq!(picks, vec![1, 2]);
    }

    #[test]
    fn multi_choice_needing_more_picks_than_options_fails() {
        let mut m = menu("1\n");
        let err = m
            .present_multi_choice("#2", "Pick two", &options(&["A"]), 2)
            .unwrap_err();
        assert!(matches!(
            err,
            KabukiError::InvalidSelection { index: 2, len: 1 }
        ));
    }

    #[test]
    fn free_text_strips_line_ending_only() {
        let mut m = menu("  Paris  \r\n");
        let text = m.present_free_text("#3", "Capital of France?").unwrap();
        assert_eq!(text, "  Paris  ");
    }

    #[test]
    fn feedback_waits_for_continue() {
        let mut m = menu("2\n1\n");
        m.present_feedback("#1", "Incorrect").unwrap();
        let out = output(m);
        assert!(out.contains("Incorrect"));
        assert!(out.contains("1 - Continue"));
    }

    #[test]
    fn feedback_colour_follows_verdict() {
        let mut m = menu("1\n1\n");
        m.present_feedback("#1", verdict(true)).unwrap();
        m.present_feedback("#2", verdict(false)).unwrap();
        let out = output(m);
        assert!(out.contains(&verdict(true).green().bold().to_string()));
        assert!(out.contains(&verdict(false).red().bold().to_string()));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut m = menu("");
        let err = m.present_free_text("Kabuki", "Enter your name: ").unwrap_err();
        assert!(matches!(err, KabukiError::Menu(_)));
    }

    #[test]
    fn clear_screen_emits_escape_codes() {
        let mut m = menu("1\n").clear_screen(true);
        m.present_feedback("#1", "Correct").unwrap();
        assert!(output(m).contains("\u{1b}[2J"));
    }
}
