mod factory;
mod google;

pub use factory::ProviderFactory;
pub use google::GoogleProvider;

use async_trait::async_trait;

use crate::error::PantryError;

/// A hosted model that turns a prompt into free-form text.
///
/// Providers are built once by the composition root and handed to callers as
/// `&dyn TextProvider`.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send `prompt` and return the generated text.
    ///
    /// A response without any text is reported as [`PantryError::EmptyResponse`].
    async fn generate(&self, prompt: &str) -> Result<String, PantryError>;
}
