use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Link, Note, Quiz, QuizQuestion, QuizResult, ResultStatus, User, UserRole};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: &str) -> Self {
        ApiResponse {
            data,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CounterResponse {
    pub message: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub is_public: bool,
    pub view_count: i64,
    pub download_count: i64,
    pub public_view_count: i64,
    pub public_download_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        NoteResponse {
            id: note.id,
            owner_id: note.owner_id,
            title: note.title,
            content: note.content,
            file_path: note.file_path,
            is_public: note.is_public,
            view_count: note.view_count,
            download_count: note.download_count,
            public_view_count: note.public_view_count,
            public_download_count: note.public_download_count,
            created_at: note.created_at.to_chrono(),
            modified_at: note.modified_at.to_chrono(),
        }
    }
}

/// Public listing row: the note plus its owner's display names, when the
/// owner is still known.
#[derive(Debug, Serialize)]
pub struct PublicNoteResponse {
    #[serde(flatten)]
    pub note: NoteResponse,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PublicNoteResponse {
    pub fn from_note(note: Note, owner: Option<&User>) -> Self {
        PublicNoteResponse {
            note: note.into(),
            first_name: owner.map(|u| u.first_name.clone()),
            last_name: owner.map(|u| u.last_name.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub is_public: bool,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        LinkResponse {
            id: link.id,
            owner_id: link.owner_id,
            title: link.title,
            description: link.description,
            url: link.url,
            is_public: link.is_public,
            view_count: link.view_count,
            created_at: link.created_at.to_chrono(),
            modified_at: link.modified_at.to_chrono(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicLinkResponse {
    #[serde(flatten)]
    pub link: LinkResponse,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PublicLinkResponse {
    pub fn from_link(link: Link, owner: Option<&User>) -> Self {
        PublicLinkResponse {
            link: link.into(),
            first_name: owner.map(|u| u.first_name.clone()),
            last_name: owner.map(|u| u.last_name.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub question_count: i32,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub is_expired: bool, // derived at read time
    pub created_at: DateTime<Utc>,
}

impl From<Quiz> for QuizResponse {
    fn from(quiz: Quiz) -> Self {
        let is_expired = quiz.is_expired();
        QuizResponse {
            id: quiz.id,
            name: quiz.name,
            description: quiz.description,
            question_count: quiz.question_count,
            is_published: quiz.is_published,
            start_date: quiz.start_date.map(|d| d.to_chrono()),
            end_date: quiz.end_date.map(|d| d.to_chrono()),
            is_expired,
            created_at: quiz.created_at.to_chrono(),
        }
    }
}

/// Authoring view of a question, answer included.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionResponse {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i32,
    pub created_at: DateTime<Utc>,
}

impl From<QuizQuestion> for QuizQuestionResponse {
    fn from(question: QuizQuestion) -> Self {
        QuizQuestionResponse {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            options: question.options,
            correct_option: question.correct_option,
            created_at: question.created_at.to_chrono(),
        }
    }
}

/// Taker view of a question: the correct option is never exposed.
#[derive(Debug, Clone, Serialize)]
pub struct TakerQuestionResponse {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<QuizQuestion> for TakerQuestionResponse {
    fn from(question: QuizQuestion) -> Self {
        TakerQuestionResponse {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            options: question.options,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionCountResponse {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub obtained_marks: i32,
    pub total_marks: i32,
    pub percentage: f64,
    pub status: ResultStatus,
}

impl From<&QuizResult> for SubmitQuizResponse {
    fn from(result: &QuizResult) -> Self {
        SubmitQuizResponse {
            obtained_marks: result.obtained_marks,
            total_marks: result.total_marks,
            percentage: result.percentage,
            status: result.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub user_id: String,
    pub quiz_id: String,
    pub total_marks: i32,
    pub obtained_marks: i32,
    pub percentage: f64,
    pub status: ResultStatus,
    pub created_at: DateTime<Utc>,
}

impl From<QuizResult> for QuizResultResponse {
    fn from(result: QuizResult) -> Self {
        QuizResultResponse {
            user_id: result.user_id,
            quiz_id: result.quiz_id,
            total_marks: result.total_marks,
            obtained_marks: result.obtained_marks,
            percentage: result.percentage,
            status: result.status,
            created_at: result.created_at.to_chrono(),
        }
    }
}

/// One row of the question-by-question answer review.
#[derive(Debug, Serialize)]
pub struct AnswerReviewResponse {
    pub question_id: String,
    pub text: String,
    pub options: Vec<String>,
    pub selected_option: i32,
    pub correct_option: i32,
    pub is_correct: bool,
}

#[derive(Debug, Serialize)]
pub struct SolvedQuizResponse {
    pub quiz_id: String,
}

#[derive(Debug, Serialize)]
pub struct QuizReportRow {
    pub quiz_name: String,
    pub obtained_marks: i32,
    pub total_marks: i32,
    pub percentage: f64,
    pub status: ResultStatus,
    pub attempt_date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UserResultRow {
    pub quiz_id: String,
    pub percentage: f64,
    pub status: ResultStatus,
}

#[derive(Debug, Serialize)]
pub struct QuizAnalysisRow {
    pub name: String,
    pub percentage: f64,
    pub status: ResultStatus,
}

#[derive(Debug, Serialize)]
pub struct QuizAnalysisResponse {
    pub quiz: QuizResponse,
    pub results: Vec<QuizAnalysisRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            created_at: user.created_at.to_chrono(),
        }
    }
}

/// One row of the user-activity report over a date range.
#[derive(Debug, Serialize)]
pub struct ActivityReportRow {
    pub user: UserResponse,
    pub note_count: usize,
    pub link_count: usize,
}
