use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use mongodb::bson::DateTime as BsonDateTime;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Link, Note};
use crate::models::dto::response::{
    ActivityReportRow, QuizAnalysisResponse, QuizAnalysisRow,
};
use crate::repositories::{
    LinkRepository, NoteRepository, QuizRepository, SubmissionRepository, UserRepository,
};

/// Cross-collection reporting reads. All queries go against the base
/// note/link collections, not the admin ones.
pub struct ReportService {
    notes: Arc<dyn NoteRepository>,
    links: Arc<dyn LinkRepository>,
    users: Arc<dyn UserRepository>,
    quizzes: Arc<dyn QuizRepository>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl ReportService {
    pub fn new(
        notes: Arc<dyn NoteRepository>,
        links: Arc<dyn LinkRepository>,
        users: Arc<dyn UserRepository>,
        quizzes: Arc<dyn QuizRepository>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            notes,
            links,
            users,
            quizzes,
            submissions,
        }
    }

    pub async fn notes_in_range(
        &self,
        owner_id: &str,
        from: &str,
        to: &str,
    ) -> AppResult<Vec<Note>> {
        let (from, to) = parse_range(from, to)?;
        self.notes.find_by_owner_in_range(owner_id, from, to).await
    }

    pub async fn links_in_range(
        &self,
        owner_id: &str,
        from: &str,
        to: &str,
    ) -> AppResult<Vec<Link>> {
        let (from, to) = parse_range(from, to)?;
        self.links.find_by_owner_in_range(owner_id, from, to).await
    }

    /// Per-user content counts for a date range. Queries notes and links
    /// once per active user.
    pub async fn activity_report(&self, from: &str, to: &str) -> AppResult<Vec<ActivityReportRow>> {
        let (from, to) = parse_range(from, to)?;
        let users = self.users.find_all_active().await?;

        let mut rows = Vec::with_capacity(users.len());
        for user in users {
            let notes = self
                .notes
                .find_by_owner_in_range(&user.user_id, from, to)
                .await?;
            let links = self
                .links
                .find_by_owner_in_range(&user.user_id, from, to)
                .await?;
            rows.push(ActivityReportRow {
                user: user.into(),
                note_count: notes.len(),
                link_count: links.len(),
            });
        }
        Ok(rows)
    }

    /// Every stored result for a quiz, with participant names joined from
    /// the active user set. Deactivated participants show as
    /// "Unknown User"; the results themselves are not filtered.
    pub async fn quiz_analysis(&self, quiz_id: &str) -> AppResult<QuizAnalysisResponse> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id {} not found", quiz_id)))?;

        let results = self.submissions.find_results_by_quiz(quiz_id).await?;
        if results.is_empty() {
            return Err(AppError::NotFound(
                "No results found for this quiz".to_string(),
            ));
        }

        let users = self.users.find_all_active().await?;
        let rows = results
            .into_iter()
            .map(|result| {
                let name = users
                    .iter()
                    .find(|u| u.user_id == result.user_id)
                    .map(|u| u.display_name())
                    .unwrap_or_else(|| "Unknown User".to_string());
                QuizAnalysisRow {
                    name,
                    percentage: result.percentage,
                    status: result.status,
                }
            })
            .collect();

        Ok(QuizAnalysisResponse {
            quiz: quiz.into(),
            results: rows,
        })
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (read as
/// midnight UTC).
fn parse_date_bound(raw: &str) -> AppResult<BsonDateTime> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(BsonDateTime::from_chrono(parsed.with_timezone(&Utc)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        return Ok(BsonDateTime::from_chrono(midnight));
    }
    Err(AppError::ValidationError(format!("Invalid date: {}", raw)))
}

fn parse_range(from: &str, to: &str) -> AppResult<(BsonDateTime, BsonDateTime)> {
    Ok((parse_date_bound(from)?, parse_date_bound(to)?))
}
