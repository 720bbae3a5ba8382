use thiserror::Error;

/// Configuration rejected by validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("section id at position {0} is empty")]
    EmptySectionId(usize),
    #[error("section id {0:?} is registered more than once")]
    DuplicateSection(String),
    #[error("{name} must be a finite, non-negative distance (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("hidden class must not be empty")]
    EmptyHiddenClass,
    #[error("markup name {0} must not be empty")]
    EmptyMarkupName(&'static str),
}

/// Crate error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
