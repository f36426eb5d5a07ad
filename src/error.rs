//! Error types for bbcode-complete

use thiserror::Error;

/// Result type alias for registry and configuration operations
pub type Result<T> = std::result::Result<T, CompleteError>;

/// Errors raised while loading configuration or auditing a tag registry.
///
/// Completion resolution itself never fails; these only come out of
/// [`crate::Config::load`], [`crate::Config::parse`] and [`crate::tags::audit`].
#[derive(Error, Debug)]
pub enum CompleteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid value for '{key}': {value}")]
    InvalidSetting { key: String, value: String },

    #[error("Duplicate tag label: {0}")]
    DuplicateLabel(String),

    #[error("Duplicate snippet trigger '{trigger}' in tag '{tag}'")]
    DuplicateTrigger { tag: String, trigger: String },

    #[error("Empty attribute template for tag: {0}")]
    EmptyTemplate(String),
}
