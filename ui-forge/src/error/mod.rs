//! Error types and error handling

use thiserror::Error;

/// Framework error type
#[derive(Debug, Error)]
pub enum UiError {
    /// `close_tag` was called with nothing left on the tag stack
    #[error("no tags open")]
    NoOpenTag,

    /// The template engine failed to compile or render markup
    #[error("template render error: {0}")]
    Render(#[from] minijinja::Error),

    /// Configuration could not be loaded or extracted
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

/// Result alias used across the crate
pub type UiResult<T> = Result<T, UiError>;
