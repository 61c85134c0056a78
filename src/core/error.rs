use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Snapshot is missing its header and separator lines")]
    MissingHeader,

    #[error("Snapshot header declares no columns")]
    EmptyHeader,

    #[error("Invalid direction: {0:?} (expected up, down, left or right)")]
    InvalidDirection(String),

    #[error("Unknown help topic '{topic}'. Available topics are: {}", available.join(", "))]
    UnknownHelpTopic {
        topic: String,
        available: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, InsightError>;
