use thiserror::Error;

/// Startup failures surfaced from `main`
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] uc_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] uc_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
