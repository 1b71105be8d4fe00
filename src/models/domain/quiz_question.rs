use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub quiz_id: String, // not referentially validated against quizzes
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i32, // 1-based index into options
    pub is_active: bool,
    pub created_at: DateTime,
    pub modified_at: DateTime,
}

impl QuizQuestion {
    pub fn new(quiz_id: &str, text: &str, options: Vec<String>, correct_option: i32) -> Self {
        let now = DateTime::now();
        QuizQuestion {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            text: text.to_string(),
            options,
            correct_option,
            is_active: true,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn is_correct_choice(&self, selected_option: i32) -> bool {
        selected_option == self.correct_option
    }
}
