//! Answer evaluation.
//!
//! Each question variant has its own correctness rule:
//!
//! - `single_choice`: exact, case-sensitive string equality with the answer.
//! - `select_two`: positional. The first pick must equal `answer[0]` and the
//!   second `answer[1]`; the right pair picked in the other order is wrong.
//! - `free_response`: trimmed and lower-cased, then compared against every
//!   acceptable answer normalized the same way.

use std::fmt;

use crate::model::{AnswerKey, Question};

/// What the player submitted for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The chosen string of a `single_choice` question.
    Choice(String),
    /// The two chosen strings of a `select_two` question, in pick order.
    Pair([String; 2]),
    /// Typed text of a `free_response` question.
    Text(String),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Choice(choice) => write!(f, "{choice}"),
            Response::Pair([first, second]) => write!(f, "{first}, {second}"),
            Response::Text(text) => write!(f, "{text}"),
        }
    }
}

/// The verdict for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: bool,
    /// The response as it should be recorded. Free text is normalized;
    /// choices are kept verbatim.
    pub response: Response,
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize_free_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Decide whether `response` answers `question` correctly.
///
/// A response whose shape does not match the question's answer key is
/// scored incorrect.
pub fn evaluate(question: &Question, response: Response) -> Evaluation {
    match (&question.answer, response) {
        (AnswerKey::Single(answer), Response::Choice(choice)) => Evaluation {
            correct: choice == *answer,
            response: Response::Choice(choice),
        },
        (AnswerKey::Pair(answer), Response::Pair(picks)) => {
            let matched = picks
                .iter()
                .zip(answer.iter())
                .filter(|(pick, expected)| pick == expected)
                .count();
            Evaluation {
                correct: matched == 2,
                response: Response::Pair(picks),
            }
        }
        (AnswerKey::Accepted(answers), Response::Text(text)) => {
            let normalized = normalize_free_text(&text);
            Evaluation {
                correct: answers.iter().any(|a| normalize_free_text(a) == normalized),
                response: Response::Text(normalized),
            }
        }
        (_, response) => {
            tracing::warn!(
                "{} response {:?} does not fit the answer key, scoring incorrect",
                question.kind,
                response
            );
            Evaluation {
                correct: false,
                response,
            }
        }
    }
}
