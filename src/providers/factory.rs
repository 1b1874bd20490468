use crate::config::{AppConfig, ProviderConfig};
use crate::error::PantryError;
use crate::providers::{GoogleProvider, TextProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn TextProvider>, PantryError> {
        match config.name.as_str() {
            "google" | "gemini" => Ok(Box::new(GoogleProvider::new(config)?)),
            other => Err(PantryError::UnknownProvider(other.to_string())),
        }
    }

    /// Create the provider configured for the application
    pub fn from_app_config(config: &AppConfig) -> Result<Box<dyn TextProvider>, PantryError> {
        Self::create(&config.provider)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "gemini"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider_config() -> ProviderConfig {
        ProviderConfig {
            api_key: Some("test-key".to_string()),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_create_google_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create(&config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_gemini_alias() {
        let mut config = create_test_provider_config();
        config.name = "gemini".to_string();
        let provider = ProviderFactory::create(&config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_create_unknown_provider() {
        let mut config = create_test_provider_config();
        config.name = "unknown".to_string();

        let result = ProviderFactory::create(&config);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown provider"));
        }
    }

    #[test]
    fn test_from_app_config() {
        let config = AppConfig {
            provider: create_test_provider_config(),
            ..AppConfig::default()
        };
        let provider = ProviderFactory::from_app_config(&config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_available_providers() {
        assert_eq!(
            ProviderFactory::available_providers(),
            vec!["google", "gemini"]
        );
    }

    #[test]
    fn test_every_listed_provider_can_be_created() {
        for name in ProviderFactory::available_providers() {
            let mut config = create_test_provider_config();
            config.name = name.to_string();
            assert!(
                ProviderFactory::create(&config).is_ok(),
                "listed provider '{}' was rejected",
                name
            );
        }
    }
}
