use std::sync::Arc;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Quiz, QuizQuestion, QuizResult, UserAnswer};
use crate::models::dto::request::SubmitQuizRequest;
use crate::models::dto::response::{
    AnswerReviewResponse, QuizReportRow, SolvedQuizResponse, UserResultRow,
};
use crate::repositories::{QuestionRepository, QuizRepository, SubmissionRepository};

/// Taker-facing quiz flow: browsing, submission, results and review.
pub struct QuizTakingService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    submissions: Arc<dyn SubmissionRepository>,
}

impl QuizTakingService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            quizzes,
            questions,
            submissions,
        }
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        self.quizzes.list_active().await
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id {} not found", id)))
    }

    /// Questions for an attempt. An empty quiz is not an error here; the
    /// handler strips the correct option before responding.
    pub async fn get_questions(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        self.questions.find_active_by_quiz(quiz_id).await
    }

    /// Grades and stores an attempt. A re-attempt replaces the previous
    /// answers and result in one transaction; nothing is written when the
    /// quiz turns out to be missing or inactive.
    pub async fn submit(&self, quiz_id: &str, request: SubmitQuizRequest) -> AppResult<QuizResult> {
        request.validate()?;
        let user_id = request.user_id.as_str();

        let mut answers = Vec::with_capacity(request.answers.len());
        let mut obtained_marks = 0;
        for answer in &request.answers {
            // Answers referencing deleted questions are dropped silently.
            let question = match self.questions.find_active_by_id(&answer.question_id).await? {
                Some(question) => question,
                None => continue,
            };
            let is_correct = question.is_correct_choice(answer.selected_option);
            if is_correct {
                obtained_marks += 1;
            }
            answers.push(UserAnswer::new(
                user_id,
                quiz_id,
                &question.id,
                answer.selected_option,
                is_correct,
            ));
        }

        let quiz = self
            .quizzes
            .find_active_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::ValidationError("Quiz not found or inactive".to_string()))?;

        let result = QuizResult::from_score(user_id, quiz_id, obtained_marks, quiz.question_count);
        self.submissions.replace_attempt(answers, result).await
    }

    pub async fn get_result(&self, quiz_id: &str, user_id: &str) -> AppResult<QuizResult> {
        self.submissions
            .find_result(quiz_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Result not found".to_string()))
    }

    /// Answer review for a finished attempt, joined with the question text.
    /// Answers whose question has since been deleted are omitted.
    pub async fn get_review(
        &self,
        quiz_id: &str,
        user_id: &str,
    ) -> AppResult<Vec<AnswerReviewResponse>> {
        let answers = self.submissions.find_answers(quiz_id, user_id).await?;
        if answers.is_empty() {
            return Err(AppError::NotFound(
                "No answers found for this quiz".to_string(),
            ));
        }

        let mut review = Vec::with_capacity(answers.len());
        for answer in answers {
            let question = match self.questions.find_active_by_id(&answer.question_id).await? {
                Some(question) => question,
                None => continue,
            };
            review.push(AnswerReviewResponse {
                question_id: question.id,
                text: question.text,
                options: question.options,
                selected_option: answer.selected_option,
                correct_option: question.correct_option,
                is_correct: answer.is_correct,
            });
        }
        Ok(review)
    }

    /// Quiz ids the user has a stored result for.
    pub async fn solved_quizzes(&self, user_id: &str) -> AppResult<Vec<SolvedQuizResponse>> {
        let results = self.submissions.find_results_by_user(user_id).await?;
        Ok(results
            .into_iter()
            .map(|result| SolvedQuizResponse {
                quiz_id: result.quiz_id,
            })
            .collect())
    }

    /// Per-quiz score report for a user. Quiz names are joined even for
    /// soft-deleted quizzes so old attempts keep their labels.
    pub async fn solved_quiz_report(&self, user_id: &str) -> AppResult<Vec<QuizReportRow>> {
        let results = self.submissions.find_results_by_user(user_id).await?;

        let mut report = Vec::with_capacity(results.len());
        for result in results {
            let quiz_name = match self.quizzes.find_by_id(&result.quiz_id).await? {
                Some(quiz) => quiz.name,
                None => "Unknown Quiz".to_string(),
            };
            report.push(QuizReportRow {
                quiz_name,
                obtained_marks: result.obtained_marks,
                total_marks: result.total_marks,
                percentage: result.percentage,
                status: result.status,
                attempt_date: result.created_at.to_chrono(),
            });
        }
        Ok(report)
    }

    pub async fn results_summary(&self, user_id: &str) -> AppResult<Vec<UserResultRow>> {
        let results = self.submissions.find_results_by_user(user_id).await?;
        Ok(results
            .into_iter()
            .map(|result| UserResultRow {
                quiz_id: result.quiz_id,
                percentage: result.percentage,
                status: result.status,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::ResultStatus;
    use crate::models::dto::request::AnswerInput;
    use crate::repositories::{
        MockQuestionRepository, MockQuizRepository, MockSubmissionRepository,
    };
    use crate::test_utils::fixtures::{published_quiz, test_question};

    fn service(
        quizzes: MockQuizRepository,
        questions: MockQuestionRepository,
        submissions: MockSubmissionRepository,
    ) -> QuizTakingService {
        QuizTakingService::new(Arc::new(quizzes), Arc::new(questions), Arc::new(submissions))
    }

    fn question(id: &str, correct_option: i32) -> QuizQuestion {
        test_question(id, "quiz_1", correct_option)
    }

    fn submit_request(answers: Vec<AnswerInput>) -> SubmitQuizRequest {
        SubmitQuizRequest {
            user_id: "user_1".to_string(),
            answers,
        }
    }

    #[actix_rt::test]
    async fn test_submit_grades_against_declared_question_count() {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_active_by_id()
            .returning(|_| Ok(Some(published_quiz("quiz_1", 2))));

        let mut questions = MockQuestionRepository::new();
        questions
            .expect_find_active_by_id()
            .returning(|id| match id {
                "q1" => Ok(Some(question("q1", 2))),
                "q2" => Ok(Some(question("q2", 3))),
                _ => Ok(None),
            });

        let mut submissions = MockSubmissionRepository::new();
        submissions
            .expect_replace_attempt()
            .withf(|answers, result| {
                answers.len() == 2 && result.obtained_marks == 1 && result.total_marks == 2
            })
            .returning(|_, result| Ok(result));

        let service = service(quizzes, questions, submissions);
        let result = service
            .submit(
                "quiz_1",
                submit_request(vec![
                    AnswerInput {
                        question_id: "q1".to_string(),
                        selected_option: 2,
                    },
                    AnswerInput {
                        question_id: "q2".to_string(),
                        selected_option: 1,
                    },
                ]),
            )
            .await
            .unwrap();

        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.status, ResultStatus::Pass);
    }

    #[actix_rt::test]
    async fn test_submit_skips_answers_for_deleted_questions() {
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_active_by_id()
            .returning(|_| Ok(Some(published_quiz("quiz_1", 3))));

        let mut questions = MockQuestionRepository::new();
        questions
            .expect_find_active_by_id()
            .returning(|id| match id {
                "q1" => Ok(Some(question("q1", 1))),
                _ => Ok(None),
            });

        let mut submissions = MockSubmissionRepository::new();
        submissions
            .expect_replace_attempt()
            .withf(|answers, result| answers.len() == 1 && result.obtained_marks == 1)
            .returning(|_, result| Ok(result));

        let service = service(quizzes, questions, submissions);
        let result = service
            .submit(
                "quiz_1",
                submit_request(vec![
                    AnswerInput {
                        question_id: "q1".to_string(),
                        selected_option: 1,
                    },
                    AnswerInput {
                        question_id: "gone".to_string(),
                        selected_option: 4,
                    },
                ]),
            )
            .await
            .unwrap();

        assert_eq!(result.total_marks, 3);
    }

    #[actix_rt::test]
    async fn test_submit_writes_nothing_for_inactive_quiz() {
        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_find_active_by_id().returning(|_| Ok(None));

        let mut questions = MockQuestionRepository::new();
        questions
            .expect_find_active_by_id()
            .returning(|id| Ok(Some(question(id, 1))));

        let mut submissions = MockSubmissionRepository::new();
        submissions.expect_replace_attempt().times(0);

        let service = service(quizzes, questions, submissions);
        let result = service
            .submit(
                "quiz_1",
                submit_request(vec![AnswerInput {
                    question_id: "q1".to_string(),
                    selected_option: 1,
                }]),
            )
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_rt::test]
    async fn test_get_result_maps_missing_to_not_found() {
        let mut submissions = MockSubmissionRepository::new();
        submissions.expect_find_result().returning(|_, _| Ok(None));

        let service = service(
            MockQuizRepository::new(),
            MockQuestionRepository::new(),
            submissions,
        );
        let result = service.get_result("quiz_1", "user_1").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_rt::test]
    async fn test_review_requires_stored_answers() {
        let mut submissions = MockSubmissionRepository::new();
        submissions
            .expect_find_answers()
            .returning(|_, _| Ok(Vec::new()));

        let service = service(
            MockQuizRepository::new(),
            MockQuestionRepository::new(),
            submissions,
        );
        let result = service.get_review("quiz_1", "user_1").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_rt::test]
    async fn test_report_labels_deleted_quizzes() {
        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_find_by_id().returning(|_| Ok(None));

        let mut submissions = MockSubmissionRepository::new();
        submissions.expect_find_results_by_user().returning(|_| {
            Ok(vec![QuizResult::from_score("user_1", "quiz_gone", 4, 5)])
        });

        let service = service(quizzes, MockQuestionRepository::new(), submissions);
        let report = service.solved_quiz_report("user_1").await.unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].quiz_name, "Unknown Quiz");
        assert_eq!(report[0].status, ResultStatus::Pass);
    }
}
