//! Transcript rendering and the end-of-session summary.

use std::fmt;

use crate::session::AnsweredQuestion;
use crate::traits::TranscriptMeta;

/// Feedback text shown after each question and written to the transcript.
pub fn verdict(correct: bool) -> &'static str {
    if correct {
        "Correct"
    } else {
        "Incorrect"
    }
}

/// The block that opens every transcript.
pub fn render_header(meta: &TranscriptMeta) -> String {
    format!(
        "user: {}\nquiz: {}\nstart_time: {}\n\n",
        meta.user,
        meta.quiz,
        meta.timestamp()
    )
}

/// One question as answered, followed by a blank line.
///
/// Free-response questions have no choice lines.
pub fn render_question_block(answered: &AnsweredQuestion) -> String {
    let question = &answered.question;
    let mut block = format!("Type: {}\nPrompt: {}\n", question.kind, question.prompt);
    if question.kind.has_choices() {
        for choice in &question.choices {
            block.push_str(choice);
            block.push('\n');
        }
    }
    block.push_str(&format!(
        "You answered: {}\nCorrect answer(s): {}\nResult: {}\n\n",
        answered.response,
        question.answer,
        verdict(answered.correct)
    ));
    block
}

/// Running tally of a session, and its final score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub number_correct: usize,
    pub total_questions: usize,
    pub points: u32,
}

impl SessionSummary {
    /// `100 * number_correct / total_questions`, or `None` for an empty quiz.
    pub fn percentage(&self) -> Option<f64> {
        if self.total_questions == 0 {
            return None;
        }
        Some(self.number_correct as f64 / self.total_questions as f64 * 100.0)
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quiz complete!")?;
        match self.percentage() {
            Some(p) => writeln!(f, "Score: {p:.1}")?,
            None => writeln!(f, "Score: n/a")?,
        }
        writeln!(
            f,
            "Number Correct: {}/{}",
            self.number_correct, self.total_questions
        )?;
        writeln!(f, "Points: {}", self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Response;
    use crate::model::{AnswerKey, Question, QuestionKind};
    use chrono::NaiveDate;

    fn answered(
        kind: QuestionKind,
        choices: &[&str],
        answer: AnswerKey,
        response: Response,
        correct: bool,
    ) -> AnsweredQuestion {
        AnsweredQuestion {
            number: 1,
            question: Question {
                prompt: "Which one?".into(),
                image: String::new(),
                kind,
                choices: choices.iter().map(|c| c.to_string()).collect(),
                answer,
                time_limit_secs: 30.0,
                points: 10,
            },
            response,
            correct,
            points_awarded: if correct { 10 } else { 0 },
        }
    }

    #[test]
    fn header_layout() {
        let meta = TranscriptMeta {
            user: "Ada".into(),
            quiz: "Capitals".into(),
            started_at: NaiveDate::from_ymd_opt(2025, 1, 2)
                .unwrap()
                .and_hms_opt(13, 4, 5)
                .unwrap(),
        };
        assert_eq!(
            render_header(&meta),
            "user: Ada\nquiz: Capitals\nstart_time: 2025-01-02_13-04-05\n\n"
        );
    }

    #[test]
    fn single_choice_block() {
        let block = render_question_block(&answered(
            QuestionKind::SingleChoice,
            &["A", "B"],
            AnswerKey::Single("A".into()),
            Response::Choice("A".into()),
            true,
        ));
        assert_eq!(
            block,
            "Type: single_choice\nPrompt: Which one?\nA\nB\nYou answered: A\nCorrect answer(s): A\nResult: Correct\n\n"
        );
    }

    #[test]
    fn free_response_block_omits_choices() {
        let block = render_question_block(&answered(
            QuestionKind::FreeResponse,
            &[],
            AnswerKey::Accepted(vec!["Rome".into(), "Roma".into()]),
            Response::Text("milan".into()),
            false,
        ));
        assert_eq!(
            block,
            "Type: free_response\nPrompt: Which one?\nYou answered: milan\nCorrect answer(s): Rome, Roma\nResult: Incorrect\n\n"
        );
    }

    #[test]
    fn summary_formatting() {
        let summary = SessionSummary {
            number_correct: 1,
            total_questions: 1,
            points: 10,
        };
        assert_eq!(
            summary.to_string(),
            "Quiz complete!\nScore: 100.0\nNumber Correct: 1/1\nPoints: 10\n"
        );
    }

    #[test]
    fn percentage_matches_ratio() {
        let summary = SessionSummary {
            number_correct: 2,
            total_questions: 3,
            points: 0,
        };
        let p = summary.percentage().unwrap();
        assert!((p - 200.0 / 3.0).abs() < 1e-9);
        assert!(summary.to_string().contains("Score: 66.7"));
    }

    #[test]
    fn percentage_undefined_for_empty_quiz() {
        assert_eq!(SessionSummary::default().percentage(), None);
    }
}
