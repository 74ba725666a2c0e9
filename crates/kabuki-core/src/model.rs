//! Core data model types for kabuki.
//!
//! Quizzes and questions are built once by the catalog and never mutated
//! afterwards. What the player answered lives in
//! [`AnsweredQuestion`](crate::session::AnsweredQuestion), not here.

use std::fmt;
use std::str::FromStr;

/// A named collection of ordered questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    /// Identifier from the definition file (`quiz_id`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description shown next to the name in the quiz menu.
    pub description: String,
    /// Image path or URL. Unvalidated; empty when the quiz has none.
    pub image: String,
    /// The questions, in the order they are asked. Never empty.
    pub questions: Vec<Question>,
}

impl Quiz {
    /// The image reference, if one was given.
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// Sum of the point values of every question.
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

impl fmt::Display for Quiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}

/// A single question of a quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The text shown to the player.
    pub prompt: String,
    /// Image path or URL. Unvalidated; empty when the question has none.
    pub image: String,
    /// Which collection and evaluation rule applies.
    pub kind: QuestionKind,
    /// Options offered to the player. Empty for free-response questions.
    pub choices: Vec<String>,
    /// What counts as a correct response.
    pub answer: AnswerKey,
    /// Time limit in seconds. Informational only, never enforced.
    pub time_limit_secs: f64,
    /// Points awarded for a correct response.
    pub points: u32,
}

impl Question {
    /// The image reference, if one was given.
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// The three question variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Pick exactly one choice. Also accepted as `multiple_choice`.
    SingleChoice,
    /// Pick exactly two distinct choices, in order.
    SelectTwo,
    /// Type an answer. Also accepted as `custom_answer`.
    FreeResponse,
}

impl QuestionKind {
    /// Whether the question offers a list of choices.
    pub fn has_choices(self) -> bool {
        !matches!(self, QuestionKind::FreeResponse)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::SingleChoice => write!(f, "single_choice"),
            QuestionKind::SelectTwo => write!(f, "select_two"),
            QuestionKind::FreeResponse => write!(f, "free_response"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_choice" | "multiple_choice" => Ok(QuestionKind::SingleChoice),
            "select_two" => Ok(QuestionKind::SelectTwo),
            "free_response" | "custom_answer" => Ok(QuestionKind::FreeResponse),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// The answer specification of a question. Its shape always matches the
/// question kind: the catalog rejects definitions where it does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    /// The exact choice string of a `single_choice` question.
    Single(String),
    /// The two choice strings of a `select_two` question, in the order they
    /// must be picked.
    Pair([String; 2]),
    /// Every acceptable answer of a `free_response` question, as written in
    /// the definition file.
    Accepted(Vec<String>),
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::Single(answer) => write!(f, "{answer}"),
            AnswerKey::Pair([first, second]) => write!(f, "{first}, {second}"),
            AnswerKey::Accepted(answers) => write!(f, "{}", answers.join(", ")),
        }
    }
}
