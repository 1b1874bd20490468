use thiserror::Error;

/// Errors from everything around the formatter: providers, inventory, notifications and config
#[derive(Error, Debug)]
pub enum PantryError {
    /// HTTP transport failure while talking to a provider
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    /// Provider answered but produced no text
    #[error("Provider '{0}' returned no text")]
    EmptyResponse(String),

    /// No API key in config or environment
    #[error("API key for '{0}' not found in config or environment")]
    MissingApiKey(String),

    /// Provider name not known to the factory
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Inventory store failed
    #[error("Inventory error: {0}")]
    Inventory(String),

    /// Notification sink failed
    #[error("Notification error: {0}")]
    Notification(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
