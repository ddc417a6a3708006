use serde::Serialize;

use super::question::Question;

/// One answered (or skipped) question, as shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question_id: usize,
    pub question: String,
    pub selected_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(question: &Question, selected: Option<usize>) -> Self {
        let selected_answer = selected.and_then(|index| question.options.get(index).cloned());
        let is_correct = selected_answer.as_deref() == Some(question.correct_answer.as_str());

        Self {
            question_id: question.id,
            question: question.prompt.clone(),
            selected_answer,
            correct_answer: question.correct_answer.clone(),
            is_correct,
        }
    }
}

/// Score of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percentage: u32,
}

impl QuizSummary {
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        let correct = records.iter().filter(|record| record.is_correct).count();
        let total = records.len();
        let percentage = if total > 0 {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            correct,
            total,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grammar::{Case, Number, Paradigm};
    use crate::models::question::QuestionFormat;

    fn question(id: usize) -> Question {
        Question {
            id,
            format: QuestionFormat::EndingFromDescription,
            prompt: "1st Declension, Singular, Accusative".to_string(),
            correct_answer: "am".to_string(),
            options: vec!["ae".to_string(), "am".to_string()],
            paradigm: Paradigm::First,
            number: Number::Singular,
            case: Case::Accusative,
            word: None,
        }
    }

    #[test]
    fn test_answer_record_marks_correctness() {
        let q = question(1);
        assert!(AnswerRecord::new(&q, Some(1)).is_correct);
        assert!(!AnswerRecord::new(&q, Some(0)).is_correct);

        let skipped = AnswerRecord::new(&q, None);
        assert!(!skipped.is_correct);
        assert_eq!(skipped.selected_answer, None);
        assert_eq!(skipped.correct_answer, "am");
    }

    #[test]
    fn test_summary_rounds_percentage() {
        let q = question(1);
        let records = vec![
            AnswerRecord::new(&q, Some(1)),
            AnswerRecord::new(&q, Some(0)),
            AnswerRecord::new(&q, Some(0)),
        ];
        let summary = QuizSummary::from_records(&records);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage, 33);

        let records = vec![AnswerRecord::new(&q, Some(1)), AnswerRecord::new(&q, Some(0))];
        assert_eq!(QuizSummary::from_records(&records).percentage, 50);
    }

    #[test]
    fn test_summary_of_empty_quiz() {
        let summary = QuizSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0);
    }
}
