use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    /// Malformed command text. Carries the usage string for the command, or a
    /// description of the offending field.
    #[error("{0}")]
    Parse(String),

    /// A well-formed command that violates a runtime invariant (duplicate
    /// natural key, out-of-range index, history boundary, wrapped persistence
    /// failure).
    #[error("{0}")]
    Command(String),

    /// A value object constraint failure. The parser rewraps these as
    /// [`PlanError::Parse`]; storage surfaces them when persisted data breaks
    /// an entity invariant.
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
