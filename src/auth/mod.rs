pub mod claims;
pub mod extractor;
pub mod token;
pub mod utils;

pub use claims::SessionClaims;
pub use extractor::AdminUser;
pub use token::SessionVerifier;
pub use utils::require_admin;
