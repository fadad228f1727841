//! Error types for expression building

use thiserror::Error;

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while building or checking expressions
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Generated or user-supplied expression does not parse
    #[error("invalid template syntax: {message}")]
    Syntax { message: String },

    /// Unknown comparison operator
    #[error("unknown operator '{operator}'")]
    UnknownOperator { operator: String },

    /// Invalid argument to a builder
    #[error("invalid argument to {function}: {message}")]
    InvalidArgument { function: String, message: String },
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => TemplateError::Syntax {
                message: err.to_string(),
            },
            _ => TemplateError::InvalidArgument {
                function: "check_syntax".to_string(),
                message: err.to_string(),
            },
        }
    }
}
