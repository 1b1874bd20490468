use crate::config::ProviderConfig;
use crate::error::PantryError;
use crate::providers::TextProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, PantryError> {
        // Try config first, then fall back to environment variables
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| PantryError::MissingApiKey("google".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleProvider {
            client,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, PantryError> {
        debug!("Requesting {} from {}", self.model, self.base_url);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PantryError::ProviderStatus {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| PantryError::EmptyResponse(self.provider_name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            api_key: Some("test-key".to_string()),
            ..ProviderConfig::default()
        }
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = GoogleProvider::new(&test_config()).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_endpoint_uses_model_and_base_url() {
        let mut config = test_config();
        config.base_url = Some("http://localhost:1234/v1beta/".to_string());
        let provider = GoogleProvider::new(&config).unwrap();
        assert_eq!(
            provider.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_default_endpoint() {
        let provider = GoogleProvider::new(&test_config()).unwrap();
        assert!(provider
            .endpoint()
            .starts_with("https://generativelanguage.googleapis.com/v1beta/models/"));
    }
}
