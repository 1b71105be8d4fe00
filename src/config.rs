use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_secret: SecretString,
    pub uploads_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "prepshare-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            session_secret: SecretString::from(
                env::var("SESSION_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            uploads_dir: env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let session_secret = self.session_secret.expose_secret();

        if session_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: SESSION_SECRET is using default value! Set SESSION_SECRET environment variable to a secure random string."
            );
        }

        if session_secret.len() < 32 {
            panic!(
                "FATAL: SESSION_SECRET is too short ({}). Must be at least 32 characters for security.",
                session_secret.len()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "prepshare-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_secret: SecretString::from("test_session_secret_key".to_string()),
            uploads_dir: "uploads".to_string(),
        }
    }
}
