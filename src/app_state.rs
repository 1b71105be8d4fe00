use std::sync::Arc;

use crate::{
    auth::SessionVerifier,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoLinkRepository, MongoNoteRepository, MongoQuestionRepository, MongoQuizRepository,
        MongoSubmissionRepository, MongoUserRepository,
    },
    services::{
        IdentityService, LinkService, NoteService, QuizAdminService, QuizTakingService,
        ReportService,
    },
    storage::UploadStore,
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub note_service: Arc<NoteService>,
    pub admin_note_service: Arc<NoteService>,
    pub link_service: Arc<LinkService>,
    pub admin_link_service: Arc<LinkService>,
    pub quiz_admin_service: Arc<QuizAdminService>,
    pub quiz_taking_service: Arc<QuizTakingService>,
    pub identity_service: Arc<IdentityService>,
    pub report_service: Arc<ReportService>,
    pub session_verifier: SessionVerifier,
    pub uploads: UploadStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let note_repository = Arc::new(MongoNoteRepository::new(&db, "notes"));
        note_repository.ensure_indexes().await?;
        let admin_note_repository = Arc::new(MongoNoteRepository::new(&db, "admin_notes"));
        admin_note_repository.ensure_indexes().await?;

        let link_repository = Arc::new(MongoLinkRepository::new(&db, "links"));
        link_repository.ensure_indexes().await?;
        let admin_link_repository = Arc::new(MongoLinkRepository::new(&db, "admin_links"));
        admin_link_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;
        let submission_repository = Arc::new(MongoSubmissionRepository::new(&db));
        submission_repository.ensure_indexes().await?;

        let note_service = Arc::new(NoteService::new(
            note_repository.clone(),
            user_repository.clone(),
        ));
        let admin_note_service = Arc::new(NoteService::new(
            admin_note_repository,
            user_repository.clone(),
        ));
        let link_service = Arc::new(LinkService::new(
            link_repository.clone(),
            user_repository.clone(),
        ));
        let admin_link_service = Arc::new(LinkService::new(
            admin_link_repository,
            user_repository.clone(),
        ));
        let quiz_admin_service = Arc::new(QuizAdminService::new(
            quiz_repository.clone(),
            question_repository.clone(),
        ));
        let quiz_taking_service = Arc::new(QuizTakingService::new(
            quiz_repository.clone(),
            question_repository,
            submission_repository.clone(),
        ));
        let identity_service = Arc::new(IdentityService::new(user_repository.clone()));
        let report_service = Arc::new(ReportService::new(
            note_repository,
            link_repository,
            user_repository,
            quiz_repository,
            submission_repository,
        ));

        let session_verifier = SessionVerifier::new(&config.session_secret);
        let uploads = UploadStore::new(&config.uploads_dir)?;

        Ok(Self {
            db,
            note_service,
            admin_note_service,
            link_service,
            admin_link_service,
            quiz_admin_service,
            quiz_taking_service,
            identity_service,
            report_service,
            session_verifier,
            uploads,
            config: Arc::new(config),
        })
    }
}
