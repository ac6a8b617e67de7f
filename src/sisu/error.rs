use thiserror::Error;

#[derive(Error, Debug)]
pub enum SisuError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("invalid id {0:?}: expected an integer")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SisuError>;
