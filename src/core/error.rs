use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Rule table must end with the fallback rule (found {0:?})")]
    MissingFallback(Option<&'static str>),

    #[error("Unknown rule name: {0}")]
    UnknownRule(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
