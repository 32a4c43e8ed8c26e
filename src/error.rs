use thiserror::Error;

#[derive(Debug, Error)]
pub enum OsLogError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid metadata content mode: {0}")]
    InvalidContentMode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging system already bootstrapped")]
    AlreadyBootstrapped,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment file error: {0}")]
    Env(#[from] dotenvy::Error),
}

pub type Result<T> = std::result::Result<T, OsLogError>;
