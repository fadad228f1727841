//! Error types for the dashboard strategy

use dash_config::ConfigError;
use dash_registries::RegistryError;
use dash_template::TemplateError;
use thiserror::Error;

/// Result type for strategy operations
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Text shown to the user when the dashboard cannot be generated
pub const USER_ERROR_MESSAGE: &str =
    "Error while generating the dashboard, check the console for details";

#[derive(Debug, Error)]
pub enum StrategyError {
    /// A registry read was rejected
    #[error("failed to fetch registries: {0}")]
    Registry(#[from] RegistryError),

    /// User options could not be loaded
    #[error("invalid strategy options: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A single chip could not be built
    #[error("failed to build chip for {domain}: {message}")]
    Chip { domain: String, message: String },
}

impl StrategyError {
    /// Message for the dashboard itself; details go to the log
    pub fn user_message(&self) -> &'static str {
        USER_ERROR_MESSAGE
    }

    /// Check if the error aborts dashboard generation
    pub fn is_fatal(&self) -> bool {
        matches!(self, StrategyError::Registry(_) | StrategyError::Config(_))
    }
}
