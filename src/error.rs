use thiserror::Error;

/// Errors that can occur while building or driving a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A feed list contained the same label twice
    #[error("Duplicate feed label: {0}")]
    DuplicateFeedLabel(String),

    /// Failed to serialize the recipe descriptor
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
