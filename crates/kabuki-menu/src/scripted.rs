//! Scripted menu provider for tests and non-interactive runs.

use std::collections::VecDeque;

use kabuki_core::error::{KabukiError, Result};
use kabuki_core::traits::MenuProvider;

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    /// Answer to a quiz menu or single-choice question.
    Select(usize),
    /// Answer to a multi-choice question, in pick order.
    Picks(Vec<usize>),
    /// Answer to a free-text prompt.
    Text(String),
}

/// A menu the session presented, as recorded by [`ScriptedMenu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMenu {
    pub title: String,
    /// Prompt, or feedback message for feedback menus.
    pub body: String,
    pub options: Vec<String>,
}

/// A `MenuProvider` that answers from a fixed script.
///
/// Feedback menus are acknowledged automatically and do not consume input.
/// Running out of script, or finding the wrong kind of input next, is a
/// [`KabukiError::Menu`] error.
#[derive(Debug, Default)]
pub struct ScriptedMenu {
    script: VecDeque<ScriptedInput>,
    shown: Vec<ShownMenu>,
    feedback: Vec<String>,
}

impl ScriptedMenu {
    pub fn new(script: impl IntoIterator<Item = ScriptedInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Number of inputs not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Every menu presented so far, feedback menus included.
    pub fn shown(&self) -> &[ShownMenu] {
        &self.shown
    }

    /// Feedback messages in the order they were shown.
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    fn record(&mut self, title: &str, body: &str, options: &[String]) {
        self.shown.push(ShownMenu {
            title: title.to_string(),
            body: body.to_string(),
            options: options.to_vec(),
        });
    }

    fn next(&mut self, title: &str, wanted: &str) -> Result<ScriptedInput> {
        self.script
            .pop_front()
            .ok_or_else(|| KabukiError::Menu(format!("script exhausted at '{title}' ({wanted})")))
    }
}

fn unexpected(title: &str, wanted: &str, got: &ScriptedInput) -> KabukiError {
    KabukiError::Menu(format!("'{title}' wants {wanted}, script has {got:?}"))
}

impl MenuProvider for ScriptedMenu {
    fn present_selection(&mut self, title: &str, options: &[String]) -> Result<usize> {
        self.record(title, "", options);
        match self.next(title, "a selection")? {
            ScriptedInput::Select(index) => Ok(index),
            other => Err(unexpected(title, "a selection", &other)),
        }
    }

    fn present_single_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<usize> {
        self.record(title, prompt, options);
        match self.next(title, "a selection")? {
            ScriptedInput::Select(index) => Ok(index),
            other => Err(unexpected(title, "a selection", &other)),
        }
    }

    fn present_multi_choice(
        &mut self,
        title: &str,
        prompt: &str,
        options: &[String],
        _exact_count: usize,
    ) -> Result<Vec<usize>> {
        self.record(title, prompt, options);
        match self.next(title, "picks")? {
            ScriptedInput::Picks(picks) => Ok(picks),
            other => Err(unexpected(title, "picks", &other)),
        }
    }

    fn present_free_text(&mut self, title: &str, prompt: &str) -> Result<String> {
        self.record(title, prompt, &[]);
        match self.next(title, "text")? {
            ScriptedInput::Text(text) => Ok(text),
            other => Err(unexpected(title, "text", &other)),
        }
    }

    fn present_feedback(&mut self, title: &str, message: &str) -> Result<()> {
        self.record(title, message, &[]);
        self.feedback.push(message.to_string());
        Ok(())
    }
}
