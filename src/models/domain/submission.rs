use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum percentage for a passing result.
pub const PASS_PERCENTAGE: f64 = 40.0;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserAnswer {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub question_id: String,
    pub selected_option: i32, // 1-based, mirrors QuizQuestion.correct_option
    pub is_correct: bool,
    pub is_active: bool,
    pub created_at: DateTime,
}

impl UserAnswer {
    pub fn new(
        user_id: &str,
        quiz_id: &str,
        question_id: &str,
        selected_option: i32,
        is_correct: bool,
    ) -> Self {
        UserAnswer {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            question_id: question_id.to_string(),
            selected_option,
            is_correct,
            is_active: true,
            created_at: DateTime::now(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum ResultStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub total_marks: i32,
    pub obtained_marks: i32,
    pub percentage: f64,
    pub status: ResultStatus,
    pub is_active: bool,
    pub created_at: DateTime,
}

impl QuizResult {
    /// Grades a finished attempt. `total_marks` is the quiz's declared
    /// question count, not the number of answers submitted.
    pub fn from_score(user_id: &str, quiz_id: &str, obtained_marks: i32, total_marks: i32) -> Self {
        let percentage = if total_marks > 0 {
            f64::from(obtained_marks) / f64::from(total_marks) * 100.0
        } else {
            0.0
        };
        let status = if percentage >= PASS_PERCENTAGE {
            ResultStatus::Pass
        } else {
            ResultStatus::Fail
        };

        QuizResult {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            total_marks,
            obtained_marks,
            percentage,
            status,
            is_active: true,
            created_at: DateTime::now(),
        }
    }
}
