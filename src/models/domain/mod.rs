pub mod link;
pub mod note;
pub mod quiz;
pub mod quiz_question;
pub mod submission;
pub mod user;

pub use link::Link;
pub use note::Note;
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use submission::{QuizResult, ResultStatus, UserAnswer};
pub use user::{User, UserRole};
