#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mongodb::bson::DateTime as BsonDateTime;
use tokio::sync::RwLock;

use prepshare_server::{
    errors::{AppError, AppResult},
    models::domain::{Link, Note, Quiz, QuizQuestion, QuizResult, User, UserAnswer, UserRole},
    repositories::{
        LinkRepository, NoteCounter, NoteRepository, QuestionRepository, QuizRepository,
        SubmissionRepository, UserRepository,
    },
};

pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<HashMap<String, Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, note: Note) -> AppResult<Note> {
        let mut notes = self.notes.write().await;
        if notes.contains_key(&note.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: note '{}'",
                note.id
            )));
        }
        notes.insert(note.id.clone(), note.clone());
        Ok(note)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Note>> {
        let notes = self.notes.read().await;
        let mut items: Vec<_> = notes
            .values()
            .filter(|n| n.owner_id == owner_id && n.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_public(&self) -> AppResult<Vec<Note>> {
        let notes = self.notes.read().await;
        let mut items: Vec<_> = notes
            .values()
            .filter(|n| n.is_public && n.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_by_owner_in_range(
        &self,
        owner_id: &str,
        from: BsonDateTime,
        to: BsonDateTime,
    ) -> AppResult<Vec<Note>> {
        // Like the production query, range reads ignore the soft-delete flag.
        let notes = self.notes.read().await;
        let mut items: Vec<_> = notes
            .values()
            .filter(|n| n.owner_id == owner_id && n.created_at >= from && n.created_at <= to)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
        is_public: bool,
        file_path: Option<String>,
    ) -> AppResult<bool> {
        let mut notes = self.notes.write().await;
        match notes.get_mut(id) {
            Some(note) => {
                note.title = title.to_string();
                note.content = content.to_string();
                note.is_public = is_public;
                if let Some(path) = file_path {
                    note.file_path = Some(path);
                }
                note.modified_at = BsonDateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        let mut notes = self.notes.write().await;
        match notes.get_mut(id) {
            Some(note) => {
                note.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment(&self, id: &str, counter: NoteCounter) -> AppResult<Option<i64>> {
        let mut notes = self.notes.write().await;
        match notes.get_mut(id) {
            Some(note) if note.is_active => {
                let value = match counter {
                    NoteCounter::View => {
                        note.view_count += 1;
                        note.view_count
                    }
                    NoteCounter::Download => {
                        note.download_count += 1;
                        note.download_count
                    }
                    NoteCounter::PublicView => {
                        note.public_view_count += 1;
                        note.public_view_count
                    }
                    NoteCounter::PublicDownload => {
                        note.public_download_count += 1;
                        note.public_download_count
                    }
                };
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }
}

pub struct InMemoryLinkRepository {
    links: Arc<RwLock<HashMap<String, Link>>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, link: Link) -> AppResult<Link> {
        let mut links = self.links.write().await;
        if links.contains_key(&link.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: link '{}'",
                link.id
            )));
        }
        links.insert(link.id.clone(), link.clone());
        Ok(link)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Link>> {
        let links = self.links.read().await;
        Ok(links.get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<Link>> {
        let links = self.links.read().await;
        let mut items: Vec<_> = links
            .values()
            .filter(|l| l.owner_id == owner_id && l.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_public(&self) -> AppResult<Vec<Link>> {
        let links = self.links.read().await;
        let mut items: Vec<_> = links
            .values()
            .filter(|l| l.is_public && l.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_by_owner_in_range(
        &self,
        owner_id: &str,
        from: BsonDateTime,
        to: BsonDateTime,
    ) -> AppResult<Vec<Link>> {
        let links = self.links.read().await;
        let mut items: Vec<_> = links
            .values()
            .filter(|l| l.owner_id == owner_id && l.created_at >= from && l.created_at <= to)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn update_link(
        &self,
        id: &str,
        title: &str,
        description: &str,
        url: &str,
        is_public: bool,
    ) -> AppResult<bool> {
        let mut links = self.links.write().await;
        match links.get_mut(id) {
            Some(link) => {
                link.title = title.to_string();
                link.description = description.to_string();
                link.url = url.to_string();
                link.is_public = is_public;
                link.modified_at = BsonDateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        let mut links = self.links.write().await;
        match links.get_mut(id) {
            Some(link) => {
                link.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn increment_view(&self, id: &str) -> AppResult<Option<i64>> {
        let mut links = self.links.write().await;
        match links.get_mut(id) {
            Some(link) if link.is_active => {
                link.view_count += 1;
                Ok(Some(link.view_count))
            }
            _ => Ok(None),
        }
    }
}

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: quiz '{}'",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_active_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).filter(|q| q.is_active).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn list_active(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes.values().filter(|q| q.is_active).cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn update_details(
        &self,
        id: &str,
        name: &str,
        description: &str,
        question_count: i32,
    ) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.get_mut(id) {
            Some(quiz) => {
                quiz.name = name.to_string();
                quiz.description = description.to_string();
                quiz.question_count = question_count;
                quiz.modified_at = BsonDateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn publish(
        &self,
        id: &str,
        start_date: BsonDateTime,
        end_date: BsonDateTime,
    ) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.get_mut(id) {
            Some(quiz) => {
                quiz.is_published = true;
                quiz.start_date = Some(start_date);
                quiz.end_date = Some(end_date);
                quiz.modified_at = BsonDateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.get_mut(id) {
            Some(quiz) => {
                quiz.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<String, QuizQuestion>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create(&self, question: QuizQuestion) -> AppResult<QuizQuestion> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: question '{}'",
                question.id
            )));
        }
        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn find_active_by_id(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).filter(|q| q.is_active).cloned())
    }

    async fn find_active_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self.questions.read().await;
        let mut items: Vec<_> = questions
            .values()
            .filter(|q| q.quiz_id == quiz_id && q.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn count_active_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let questions = self.questions.read().await;
        let count = questions
            .values()
            .filter(|q| q.quiz_id == quiz_id && q.is_active)
            .count();
        Ok(count as u64)
    }

    async fn update_question(
        &self,
        id: &str,
        text: &str,
        options: Vec<String>,
        correct_option: i32,
    ) -> AppResult<bool> {
        let mut questions = self.questions.write().await;
        match questions.get_mut(id) {
            Some(question) => {
                question.text = text.to_string();
                question.options = options;
                question.correct_option = correct_option;
                question.modified_at = BsonDateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        let mut questions = self.questions.write().await;
        match questions.get_mut(id) {
            Some(question) => {
                question.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let mut questions = self.questions.write().await;
        let mut flipped = 0;
        for question in questions.values_mut() {
            if question.quiz_id == quiz_id && question.is_active {
                question.is_active = false;
                flipped += 1;
            }
        }
        Ok(flipped)
    }
}

pub struct InMemorySubmissionRepository {
    answers: Arc<RwLock<HashMap<String, UserAnswer>>>,
    results: Arc<RwLock<HashMap<String, QuizResult>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(HashMap::new())),
            results: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn replace_attempt(
        &self,
        answers: Vec<UserAnswer>,
        result: QuizResult,
    ) -> AppResult<QuizResult> {
        let mut stored_answers = self.answers.write().await;
        let mut stored_results = self.results.write().await;

        stored_answers.retain(|_, a| !(a.user_id == result.user_id && a.quiz_id == result.quiz_id));
        stored_results.retain(|_, r| !(r.user_id == result.user_id && r.quiz_id == result.quiz_id));

        for answer in answers {
            stored_answers.insert(answer.id.clone(), answer);
        }
        stored_results.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    async fn find_result(&self, quiz_id: &str, user_id: &str) -> AppResult<Option<QuizResult>> {
        let results = self.results.read().await;
        Ok(results
            .values()
            .find(|r| r.quiz_id == quiz_id && r.user_id == user_id && r.is_active)
            .cloned())
    }

    async fn find_results_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.user_id == user_id && r.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn find_results_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.quiz_id == quiz_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn find_answers(&self, quiz_id: &str, user_id: &str) -> AppResult<Vec<UserAnswer>> {
        let answers = self.answers.read().await;
        let mut items: Vec<_> = answers
            .values()
            .filter(|a| a.quiz_id == quiz_id && a.user_id == user_id && a.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }
}

pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.user_id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: user '{}'",
                user.user_id
            )));
        }
        users.insert(user.user_id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn update_profile(
        &self,
        user_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: UserRole,
        is_active: bool,
    ) -> AppResult<bool> {
        let mut users = self.users.write().await;
        match users.get_mut(user_id) {
            Some(user) => {
                user.email = email.to_string();
                user.first_name = first_name.to_string();
                user.last_name = last_name.to_string();
                user.role = role;
                user.is_active = is_active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn deactivate(&self, user_id: &str) -> AppResult<bool> {
        let mut users = self.users.write().await;
        match users.get_mut(user_id) {
            Some(user) => {
                user.is_active = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_all_active(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        let mut items: Vec<_> = users.values().filter(|u| u.is_active).cloned().collect();
        items.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(items)
    }
}

pub fn make_note(id: &str, owner_id: &str, is_public: bool) -> Note {
    let mut note = Note::new(
        owner_id,
        "Ownership in Rust",
        "Moves, borrows and lifetimes.",
        is_public,
        None,
    );
    note.id = id.to_string();
    note
}

pub fn make_link(id: &str, owner_id: &str, is_public: bool) -> Link {
    let mut link = Link::new(
        owner_id,
        "The Rust Book",
        "The official language book",
        "https://doc.rust-lang.org/book/",
        is_public,
    );
    link.id = id.to_string();
    link
}

pub fn make_quiz(id: &str, name: &str, question_count: i32) -> Quiz {
    let mut quiz = Quiz::new(name, "Fundamentals", question_count);
    quiz.id = id.to_string();
    quiz
}

pub fn make_question(id: &str, quiz_id: &str, correct_option: i32) -> QuizQuestion {
    let mut question = QuizQuestion::new(
        quiz_id,
        "What does `Vec::pop` return?",
        vec![
            "The first element".to_string(),
            "Option<T>".to_string(),
            "A slice".to_string(),
            "The new length".to_string(),
        ],
        correct_option,
    );
    question.id = id.to_string();
    question
}

pub fn make_user(user_id: &str, first_name: &str, last_name: &str) -> User {
    User::new(
        user_id,
        &format!("{}@example.com", user_id),
        first_name,
        last_name,
        UserRole::User,
    )
}
