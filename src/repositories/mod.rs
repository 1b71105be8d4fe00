pub mod link_repository;
pub mod note_repository;
pub mod question_repository;
pub mod quiz_repository;
pub mod submission_repository;
pub mod user_repository;

pub use link_repository::{LinkRepository, MongoLinkRepository};
pub use note_repository::{MongoNoteRepository, NoteCounter, NoteRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use submission_repository::{MongoSubmissionRepository, SubmissionRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use {
    link_repository::MockLinkRepository, note_repository::MockNoteRepository,
    question_repository::MockQuestionRepository, quiz_repository::MockQuizRepository,
    submission_repository::MockSubmissionRepository, user_repository::MockUserRepository,
};
