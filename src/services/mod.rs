pub mod identity_service;
pub mod link_service;
pub mod note_service;
pub mod quiz_admin_service;
pub mod quiz_taking_service;
pub mod report_service;

pub use identity_service::IdentityService;
pub use link_service::LinkService;
pub use note_service::NoteService;
pub use quiz_admin_service::QuizAdminService;
pub use quiz_taking_service::QuizTakingService;
pub use report_service::ReportService;
