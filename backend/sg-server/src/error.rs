use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sg_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sg_db::DbError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
