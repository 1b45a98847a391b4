//! Error types for promptsmith.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::prompt::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptsmith operations.
///
/// Every filesystem failure is fatal. The only recoverable condition, a
/// failed home-directory lookup during tilde expansion, never reaches this
/// type: the directive resolver logs it and degrades to `Unset`.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The override directive points at a file that does not exist.
    #[error("missing system prompt file '{}'", .0.display())]
    MissingOverrideFile(PathBuf),

    /// Config file could not be read, parsed, or failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The built-in skeleton could not be rendered.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::MissingOverrideFile(_) => exit_codes::CONFIG_ERROR,
            PromptError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            PromptError::Io(_) => exit_codes::IO_FAILURE,
            PromptError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            PromptError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for promptsmith operations.
pub type Result<T> = std::result::Result<T, PromptError>;
