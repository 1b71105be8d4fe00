use crate::models::domain::{Link, Note, Quiz, QuizQuestion};

pub mod fixtures {
    use super::*;

    /// Creates a private note owned by the given user.
    pub fn test_note(owner_id: &str, is_public: bool) -> Note {
        Note::new(
            owner_id,
            "Graph theory",
            "Adjacency lists beat matrices for sparse graphs",
            is_public,
            None,
        )
    }

    /// Creates a public link owned by the given user.
    pub fn test_link(owner_id: &str) -> Link {
        Link::new(
            owner_id,
            "Rust book",
            "The official book",
            "https://doc.rust-lang.org/book/",
            true,
        )
    }

    /// Creates a published quiz with a fixed id and an open window.
    pub fn published_quiz(id: &str, question_count: i32) -> Quiz {
        let mut quiz = Quiz::new("Ownership", "Moves and borrows", question_count);
        quiz.id = id.to_string();
        quiz.is_published = true;
        quiz.start_date = Some(mongodb::bson::DateTime::now());
        quiz.end_date = Some(mongodb::bson::DateTime::from_millis(
            mongodb::bson::DateTime::now().timestamp_millis() + 86_400_000,
        ));
        quiz
    }

    /// Creates an active question with a fixed id.
    pub fn test_question(id: &str, quiz_id: &str, correct_option: i32) -> QuizQuestion {
        let mut question = QuizQuestion::new(
            quiz_id,
            "What does Vec::pop return?",
            vec![
                "Option<T>".to_string(),
                "T".to_string(),
                "Result<T, E>".to_string(),
                "()".to_string(),
            ],
            correct_option,
        );
        question.id = id.to_string();
        question
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_note_defaults() {
        let note = test_note("user_1", false);
        assert_eq!(note.owner_id, "user_1");
        assert!(!note.is_public);
        assert!(note.is_active);
    }

    #[test]
    fn test_fixture_published_quiz_is_open() {
        let quiz = published_quiz("quiz_1", 5);
        assert!(quiz.is_published);
        assert!(!quiz.is_expired());
    }

    #[test]
    fn test_fixture_question_knows_its_answer() {
        let question = test_question("q1", "quiz_1", 2);
        assert!(question.is_correct_choice(2));
        assert!(!question.is_correct_choice(1));
    }
}
