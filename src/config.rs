use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Generative text provider used for recipes
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Background expiry check settings
    #[serde(default)]
    pub expiry: ExpiryConfig,
}

/// Configuration for the generative text provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Provider name understood by the factory (e.g. "google")
    #[serde(default = "default_provider")]
    pub name: String,
    /// Model identifier (e.g. "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for proxies and tests)
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout: default_timeout(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Configuration for the expiry check
#[derive(Debug, Deserialize, Clone)]
pub struct ExpiryConfig {
    /// Items expiring within this many days are reported
    #[serde(default = "default_days_threshold")]
    pub days_threshold: u32,
    /// How many item names are listed before "and N more"
    #[serde(default = "default_max_listed")]
    pub max_listed: usize,
    /// Notification id, so repeated checks replace the previous notification
    #[serde(default = "default_notification_id")]
    pub notification_id: i32,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            days_threshold: default_days_threshold(),
            max_listed: default_max_listed(),
            notification_id: default_notification_id(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    30
}

fn default_days_threshold() -> u32 {
    3
}

fn default_max_listed() -> usize {
    3
}

fn default_notification_id() -> i32 {
    1001
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY__PROVIDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: PANTRY__EXPIRY__DAYS_THRESHOLD
        .add_source(
            Environment::with_prefix("PANTRY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
