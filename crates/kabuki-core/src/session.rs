//! The quiz session state machine.
//!
//! A session walks through
//! `SelectingQuiz → RecordingStarted → AskingQuestion(0) → ShowingFeedback(0)
//! → AskingQuestion(1) → … → Summarizing → Done`.
//! Choosing the exit slot of the quiz menu goes straight from
//! `SelectingQuiz` to `Done` without opening a transcript. There is no other
//! way out once a quiz has started.

use chrono::NaiveDateTime;

use crate::error::{KabukiError, Result};
use crate::evaluator::{evaluate, Response};
use crate::model::{Question, QuestionKind, Quiz};
use crate::report::{render_header, render_question_block, verdict, SessionSummary};
use crate::traits::{sanitize_name, MenuProvider, SessionRecorder, TranscriptMeta};

/// Title of the top-level quiz menu.
pub const QUIZ_MENU_TITLE: &str = "Select a quiz";

/// Name recorded when the player's name sanitizes to nothing.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    SelectingQuiz,
    RecordingStarted,
    AskingQuestion(usize),
    ShowingFeedback(usize),
    Summarizing,
    Done,
}

/// A question together with what the player answered.
///
/// Produced once per question by the session, after evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
    /// 1-based position in the quiz.
    pub number: usize,
    pub question: Question,
    /// The recorded response (normalized for free text).
    pub response: Response,
    pub correct: bool,
    pub points_awarded: u32,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The player chose exit at the quiz menu. Nothing was recorded.
    Exited,
    /// The player answered every question of a quiz.
    Completed(CompletedSession),
}

/// Everything a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSession {
    pub quiz_id: String,
    pub quiz_name: String,
    /// Where the recorder put the transcript.
    pub transcript: String,
    pub answers: Vec<AnsweredQuestion>,
    pub summary: SessionSummary,
}

/// Per-session settings.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Player name. Asked for through the menu when `None`.
    pub user: Option<String>,
    /// Start time override. Defaults to the local time when recording starts.
    pub started_at: Option<NaiveDateTime>,
}

/// Drives one run of one quiz.
pub struct QuizSession<'a, M: MenuProvider, R: SessionRecorder> {
    quizzes: &'a [Quiz],
    menu: &'a mut M,
    recorder: &'a mut R,
    options: SessionOptions,
    state: SessionState,
    quiz: Option<&'a Quiz>,
    transcript: Option<String>,
    answers: Vec<AnsweredQuestion>,
    tally: SessionSummary,
}

impl<'a, M: MenuProvider, R: SessionRecorder> QuizSession<'a, M, R> {
    pub fn new(quizzes: &'a [Quiz], menu: &'a mut M, recorder: &'a mut R) -> Self {
        Self {
            quizzes,
            menu,
            recorder,
            options: SessionOptions::default(),
            state: SessionState::SelectingQuiz,
            quiz: None,
            transcript: None,
            answers: Vec::new(),
            tally: SessionSummary::default(),
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Score so far.
    pub fn tally(&self) -> SessionSummary {
        self.tally
    }

    /// Run the session to completion.
    pub fn run(mut self) -> Result<SessionOutcome> {
        while self.state != SessionState::Done {
            self.step()?;
        }
        Ok(self.into_outcome())
    }

    /// Do the work of the current state and move to the next one.
    pub fn step(&mut self) -> Result<SessionState> {
        let from = self.state;
        let next = match (from, self.quiz) {
            (SessionState::Done, _) => SessionState::Done,
            (SessionState::SelectingQuiz, _) => self.select_quiz()?,
            (SessionState::RecordingStarted, Some(quiz)) => self.start_recording(quiz)?,
            (SessionState::AskingQuestion(i), Some(quiz)) => self.ask(quiz, i)?,
            (SessionState::ShowingFeedback(i), Some(quiz)) => self.show_feedback(quiz, i)?,
            (SessionState::Summarizing, Some(_)) => self.summarize()?,
            (state, None) => unreachable!("{state:?} entered without a selected quiz"),
        };
        tracing::debug!(?from, to = ?next, "session transition");
        self.state = next;
        Ok(next)
    }

    fn select_quiz(&mut self) -> Result<SessionState> {
        let quizzes = self.quizzes;
        let options: Vec<String> = quizzes.iter().map(|q| q.to_string()).collect();
        let index = self.menu.present_selection(QUIZ_MENU_TITLE, &options)?;

        if index == options.len() {
            tracing::info!("exit selected at quiz menu");
            return Ok(SessionState::Done);
        }
        let quiz = quizzes.get(index).ok_or(KabukiError::InvalidSelection {
            index,
            len: options.len() + 1,
        })?;

        tracing::info!("selected quiz '{}' ({} questions)", quiz.name, quiz.questions.len());
        self.quiz = Some(quiz);
        Ok(SessionState::RecordingStarted)
    }

    fn start_recording(&mut self, quiz: &Quiz) -> Result<SessionState> {
        let raw_user = match &self.options.user {
            Some(user) => user.clone(),
            None => self.menu.present_free_text(&quiz.name, "Enter your name: ")?,
        };
        let mut user = sanitize_name(&raw_user);
        if user.is_empty() {
            user = ANONYMOUS_USER.to_string();
        }

        let meta = TranscriptMeta {
            user,
            quiz: sanitize_name(&quiz.name),
            started_at: self
                .options
                .started_at
                .unwrap_or_else(|| chrono::Local::now().naive_local()),
        };
        let location = self.recorder.open(&meta, &render_header(&meta))?;
        tracing::info!("recording session to {location}");

        self.transcript = Some(location);
        self.tally = SessionSummary {
            total_questions: quiz.questions.len(),
            ..SessionSummary::default()
        };
        Ok(SessionState::AskingQuestion(0))
    }

    fn ask(&mut self, quiz: &Quiz, index: usize) -> Result<SessionState> {
        let question = &quiz.questions[index];
        let title = question_title(index + 1, question);

        let response = self.collect_response(question, &title)?;
        let evaluation = evaluate(question, response);

        let points_awarded = if evaluation.correct {
            self.tally.number_correct += 1;
            self.tally.points += question.points;
            question.points
        } else {
            0
        };

        self.answers.push(AnsweredQuestion {
            number: index + 1,
            question: question.clone(),
            response: evaluation.response,
            correct: evaluation.correct,
            points_awarded,
        });
        Ok(SessionState::ShowingFeedback(index))
    }

    fn collect_response(&mut self, question: &Question, title: &str) -> Result<Response> {
        let choices = &question.choices;
        match question.kind {
            QuestionKind::SingleChoice => {
                let index = self
                    .menu
                    .present_single_choice(title, &question.prompt, choices)?;
                let choice = choices.get(index).ok_or(KabukiError::InvalidSelection {
                    index,
                    len: choices.len(),
                })?;
                Ok(Response::Choice(choice.clone()))
            }
            QuestionKind::SelectTwo => loop {
                let picks = self
                    .menu
                    .present_multi_choice(title, &question.prompt, choices, 2)?;
                if let Some(&index) = picks.iter().find(|&&i| i >= choices.len()) {
                    return Err(KabukiError::InvalidSelection {
                        index,
                        len: choices.len(),
                    });
                }
                match picks.as_slice() {
                    [first, second] if first != second => {
                        break Ok(Response::Pair([
                            choices[*first].clone(),
                            choices[*second].clone(),
                        ]));
                    }
                    _ => tracing::warn!(
                        "select_two needs exactly 2 distinct picks, got {picks:?}; asking again"
                    ),
                }
            },
            QuestionKind::FreeResponse => {
                let text = self.menu.present_free_text(title, &question.prompt)?;
                Ok(Response::Text(text))
            }
        }
    }

    fn show_feedback(&mut self, quiz: &Quiz, index: usize) -> Result<SessionState> {
        let Some(answered) = self.answers.last() else {
            unreachable!("feedback for question {index} before it was answered");
        };
        let title = question_title(answered.number, &answered.question);
        self.menu.present_feedback(&title, verdict(answered.correct))?;
        self.recorder.append(&render_question_block(answered))?;
        tracing::debug!(
            question = answered.number,
            correct = answered.correct,
            points = answered.points_awarded,
            "answer recorded"
        );

        if index + 1 < quiz.questions.len() {
            Ok(SessionState::AskingQuestion(index + 1))
        } else {
            Ok(SessionState::Summarizing)
        }
    }

    fn summarize(&mut self) -> Result<SessionState> {
        self.recorder.append(&self.tally.to_string())?;
        tracing::info!(
            "quiz complete: {}/{} correct, {} points",
            self.tally.number_correct,
            self.tally.total_questions,
            self.tally.points
        );
        Ok(SessionState::Done)
    }

    fn into_outcome(self) -> SessionOutcome {
        match (self.quiz, self.transcript) {
            (Some(quiz), Some(transcript)) => SessionOutcome::Completed(CompletedSession {
                quiz_id: quiz.id.clone(),
                quiz_name: quiz.name.clone(),
                transcript,
                answers: self.answers,
                summary: self.tally,
            }),
            _ => SessionOutcome::Exited,
        }
    }
}

/// Menu title for the 1-based question `number`, e.g. `#2 - select_two (30s)`.
pub fn question_title(number: usize, question: &Question) -> String {
    format!(
        "#{} - {} ({}s)",
        number,
        question.kind,
        question.time_limit_secs
    )
}
