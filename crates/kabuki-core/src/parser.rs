//! Quiz definition parser.
//!
//! Loads quizzes from JSON (or `.toml`) files and directories, rejects
//! definitions the session cannot run, and produces advisory warnings.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{KabukiError, Result};
use crate::model::{AnswerKey, Question, QuestionKind, Quiz};

/// Intermediate structure for parsing quiz definition files.
#[derive(Debug, Deserialize)]
struct RawQuizFile {
    quiz_id: String,
    name: String,
    description: String,
    image: String,
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    prompt: String,
    image: String,
    #[serde(rename = "type")]
    kind: String,
    choices: Vec<String>,
    answer: RawAnswer,
    /// Any number; integers and floats are both read as `f64`.
    time_limit: f64,
    points: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Text(String),
    List(Vec<String>),
}

/// How [`load_quiz_directory`] orders the quizzes it finds.
///
/// Directory enumeration order differs between platforms and filesystems, so
/// `FileName` is the default. `Directory` keeps whatever `read_dir` yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrder {
    #[default]
    FileName,
    Directory,
}

/// Definition file formats understood by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFormat {
    Json,
    Toml,
}

impl QuizFormat {
    /// `.toml` files are TOML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "toml") {
            QuizFormat::Toml
        } else {
            QuizFormat::Json
        }
    }
}

/// Parse a single definition file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let bytes = std::fs::read(path).map_err(|e| KabukiError::io_at("read quiz file", path, e))?;
    let source_name = path.display().to_string();
    let content = String::from_utf8(bytes)
        .map_err(|_| KabukiError::malformed(&source_name, "not valid UTF-8"))?;

    parse_quiz_str(&content, QuizFormat::from_path(path), &source_name)
}

/// Parse definition text into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, format: QuizFormat, source_name: &str) -> Result<Quiz> {
    let parsed: RawQuizFile = match format {
        QuizFormat::Json => serde_json::from_str(content)
            .map_err(|e| KabukiError::malformed(source_name, e.to_string()))?,
        QuizFormat::Toml => toml::from_str(content)
            .map_err(|e| KabukiError::malformed(source_name, e.message().to_string()))?,
    };

    if parsed.questions.is_empty() {
        return Err(KabukiError::malformed(source_name, "quiz has no questions"));
    }

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            build_question(q).map_err(|reason| {
                KabukiError::malformed(source_name, format!("question {}: {reason}", i + 1))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Quiz {
        id: parsed.quiz_id,
        name: parsed.name,
        description: parsed.description,
        image: parsed.image,
        questions,
    })
}

fn build_question(raw: RawQuestion) -> std::result::Result<Question, String> {
    let kind: QuestionKind = raw.kind.parse()?;

    let answer = match (kind, raw.answer) {
        (QuestionKind::SingleChoice, RawAnswer::Text(answer)) => AnswerKey::Single(answer),
        (QuestionKind::SingleChoice, RawAnswer::List(_)) => {
            return Err("single_choice answer must be a single string".into());
        }
        (QuestionKind::SelectTwo, RawAnswer::List(answers)) => {
            let pair: [String; 2] = answers.try_into().map_err(|a: Vec<String>| {
                format!("select_two answer must list exactly 2 choices, got {}", a.len())
            })?;
            AnswerKey::Pair(pair)
        }
        (QuestionKind::SelectTwo, RawAnswer::Text(_)) => {
            return Err("select_two answer must be a list of 2 choices".into());
        }
        (QuestionKind::FreeResponse, RawAnswer::Text(answer)) => {
            AnswerKey::Accepted(vec![answer])
        }
        (QuestionKind::FreeResponse, RawAnswer::List(answers)) => {
            if answers.is_empty() {
                return Err("free_response answer lists no acceptable answers".into());
            }
            AnswerKey::Accepted(answers)
        }
    };

    match kind {
        QuestionKind::SingleChoice if raw.choices.is_empty() => {
            return Err("single_choice question has no choices".into());
        }
        QuestionKind::SelectTwo if raw.choices.len() < 2 => {
            return Err("select_two question needs at least 2 choices".into());
        }
        _ => {}
    }

    if !raw.time_limit.is_finite() || raw.time_limit < 0.0 {
        return Err(format!(
            "time_limit must be a non-negative number of seconds, got {}",
            raw.time_limit
        ));
    }
    let points = whole_points(raw.points)?;

    Ok(Question {
        prompt: raw.prompt,
        image: raw.image,
        kind,
        choices: raw.choices,
        answer,
        time_limit_secs: raw.time_limit,
        points,
    })
}

/// `10` and `10.0` are both ten points; negative or fractional values are not.
fn whole_points(points: f64) -> std::result::Result<u32, String> {
    let whole = points.is_finite() && points >= 0.0 && points.fract() == 0.0;
    if whole && points <= u32::MAX as f64 {
        Ok(points as u32)
    } else {
        Err(format!("points must be a non-negative whole number, got {points}"))
    }
}

/// Load every regular file in `dir` (non-recursive) as a quiz.
///
/// Any file that fails to parse aborts the whole load.
pub fn load_quiz_directory(dir: &Path, order: CatalogOrder) -> Result<Vec<Quiz>> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| KabukiError::io_at("read quiz directory", dir, e))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| KabukiError::io_at("read quiz directory", dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    if order == CatalogOrder::FileName {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    let quizzes = files
        .iter()
        .map(|path| parse_quiz(path))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!("loaded {} quizzes from {}", quizzes.len(), dir.display());
    Ok(quizzes)
}

/// Load a directory of quizzes, or a single quiz file.
pub fn load_quizzes(path: &Path, order: CatalogOrder) -> Result<Vec<Quiz>> {
    if path.is_dir() {
        load_quiz_directory(path, order)
    } else {
        Ok(vec![parse_quiz(path)?])
    }
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a quiz for problems that do not stop it from loading but make a
/// question unwinnable or confusing.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (i, question) in quiz.questions.iter().enumerate() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: Some(i + 1),
                message,
            })
        };

        if question.prompt.trim().is_empty() {
            warn("prompt is empty".into());
        }

        let mut seen = HashSet::new();
        for choice in &question.choices {
            if !seen.insert(choice) {
                warn(format!("duplicate choice: {choice}"));
            }
        }

        match &question.answer {
            AnswerKey::Single(answer) => {
                if !question.choices.contains(answer) {
                    warn(format!("answer '{answer}' is not one of the choices"));
                }
            }
            AnswerKey::Pair([first, second]) => {
                if first == second {
                    warn("select_two answer names the same choice twice".into());
                }
                for answer in [first, second] {
                    if !question.choices.contains(answer) {
                        warn(format!("answer '{answer}' is not one of the choices"));
                    }
                }
            }
            AnswerKey::Accepted(answers) => {
                if answers.iter().any(|a| a.trim().is_empty()) {
                    warn("an acceptable answer is blank".into());
                }
                if !question.choices.is_empty() {
                    warn("free_response choices are ignored".into());
                }
            }
        }
    }

    warnings
}

/// Check a whole catalog: per-quiz warnings plus duplicate quiz ids.
pub fn validate_catalog(quizzes: &[Quiz]) -> Vec<(String, Vec<ValidationWarning>)> {
    let mut seen_ids = HashSet::new();
    quizzes
        .iter()
        .map(|quiz| {
            let mut warnings = validate_quiz(quiz);
            if !seen_ids.insert(&quiz.id) {
                warnings.insert(
                    0,
                    ValidationWarning {
                        question: None,
                        message: format!("duplicate quiz ID: {}", quiz.id),
                    },
                );
            }
            (quiz.name.clone(), warnings)
        })
        .collect()
}
