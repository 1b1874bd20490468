pub mod config;
pub mod error;
pub mod expiry;
pub mod formatter;
pub mod model;
pub mod providers;
pub mod uniffi_bindings;

pub use config::{AppConfig, ExpiryConfig, ProviderConfig};
pub use error::PantryError;
pub use expiry::{
    expiry_message, ExpiryCheck, InventoryStore, Notification, NotificationSink, WorkOutcome,
};
pub use formatter::{format, parse_inline, parse_key_value, InlineSpan, LineRule, TextBlock};
pub use model::{FoodItem, Recipe, StorageArea};
pub use providers::{GoogleProvider, ProviderFactory, TextProvider};

use log::debug;

/// Asks `provider` for text and formats the answer into blocks.
pub async fn generate_recipe_blocks(
    provider: &dyn TextProvider,
    prompt: &str,
) -> Result<Vec<TextBlock>, PantryError> {
    let text = provider.generate(prompt).await?;
    let blocks = format(&text);
    debug!(
        "{} returned {} lines of recipe text",
        provider.provider_name(),
        blocks.len()
    );
    Ok(blocks)
}
