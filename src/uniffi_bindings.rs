//! UniFFI bindings for pantry-keeper
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Async provider calls are wrapped in synchronous functions that manage their own tokio runtime.

use std::fmt;

use crate::{
    expiry_message, parse_key_value, FoodItem, InlineSpan, PantryError, ProviderConfig,
    ProviderFactory, TextBlock,
};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible inline span
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiInlineSpan {
    pub text: String,
    pub bold: bool,
}

impl From<InlineSpan> for FfiInlineSpan {
    fn from(span: InlineSpan) -> Self {
        FfiInlineSpan {
            text: span.text,
            bold: span.bold,
        }
    }
}

fn spans(content: Vec<InlineSpan>) -> Vec<FfiInlineSpan> {
    content.into_iter().map(Into::into).collect()
}

/// FFI-compatible text block, one per line of recipe text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiTextBlock {
    Blank,
    SectionHeader { text: String },
    BoldLine { text: String },
    KeyValue { key: String, value: String },
    NumberedItem { number: String, content: Vec<FfiInlineSpan> },
    BulletItem { content: Vec<FfiInlineSpan> },
    PlainLine { content: Vec<FfiInlineSpan> },
}

impl From<TextBlock> for FfiTextBlock {
    fn from(block: TextBlock) -> Self {
        match block {
            TextBlock::Blank => FfiTextBlock::Blank,
            TextBlock::SectionHeader { text } => FfiTextBlock::SectionHeader { text },
            TextBlock::BoldLine { text } => FfiTextBlock::BoldLine { text },
            TextBlock::KeyValue { key, value } => FfiTextBlock::KeyValue { key, value },
            TextBlock::NumberedItem { number, content } => FfiTextBlock::NumberedItem {
                number,
                content: spans(content),
            },
            TextBlock::BulletItem { content } => FfiTextBlock::BulletItem {
                content: spans(content),
            },
            TextBlock::PlainLine { content } => FfiTextBlock::PlainLine {
                content: spans(content),
            },
        }
    }
}

/// FFI-compatible food item
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFoodItem {
    pub id: String,
    pub name: String,
    pub expiry_date: String,
    pub area: String,
    pub notes: String,
    pub quantity: u32,
}

impl From<FfiFoodItem> for FoodItem {
    fn from(ffi: FfiFoodItem) -> Self {
        FoodItem {
            id: ffi.id,
            name: ffi.name,
            expiry_date: ffi.expiry_date,
            area: ffi.area,
            notes: ffi.notes,
            quantity: ffi.quantity,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiPantryError {
    /// Network or provider failure
    ProviderError { message: String },
    /// Provider returned no usable text
    EmptyResponse { message: String },
    /// Configuration error (missing key, unknown provider)
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiPantryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiPantryError::ProviderError { message } => write!(f, "Provider error: {}", message),
            FfiPantryError::EmptyResponse { message } => write!(f, "Empty response: {}", message),
            FfiPantryError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiPantryError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiPantryError {}

impl From<PantryError> for FfiPantryError {
    fn from(err: PantryError) -> Self {
        let message = err.to_string();
        match err {
            PantryError::EmptyResponse(_) => FfiPantryError::EmptyResponse { message },
            PantryError::MissingApiKey(_)
            | PantryError::UnknownProvider(_)
            | PantryError::Config(_) => FfiPantryError::ConfigError { message },
            PantryError::Http(_)
            | PantryError::ProviderStatus { .. }
            | PantryError::Json(_)
            | PantryError::Io(_)
            | PantryError::Inventory(_)
            | PantryError::Notification(_) => FfiPantryError::ProviderError { message },
        }
    }
}

/// Provider settings passed in from the host app
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiProviderConfig {
    /// Optional API key (uses environment variable if not specified)
    pub api_key: Option<String>,
    /// Optional model name (uses provider default if not specified)
    pub model: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
}

impl From<FfiProviderConfig> for ProviderConfig {
    fn from(ffi: FfiProviderConfig) -> Self {
        let defaults = ProviderConfig::default();
        ProviderConfig {
            api_key: ffi.api_key,
            model: ffi.model.unwrap_or(defaults.model.clone()),
            timeout: ffi.timeout_seconds.unwrap_or(defaults.timeout),
            ..defaults
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiPantryError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiPantryError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Format generated recipe text into display blocks
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_recipe_text(text: String) -> Vec<FfiTextBlock> {
    crate::format(&text).into_iter().map(Into::into).collect()
}

/// Split a `**Key:** value` line into a key/value block
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_key_value_line(line: String) -> FfiTextBlock {
    parse_key_value(line.trim()).into()
}

/// Summary message for a list of expiring items, or `None` if the list is empty
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn expiry_summary(items: Vec<FfiFoodItem>, max_listed: u32) -> Option<String> {
    let items: Vec<FoodItem> = items.into_iter().map(Into::into).collect();
    expiry_message(&items, max_listed as usize)
}

/// Send a prompt to the configured provider and format the answer
///
/// # Arguments
/// * `prompt` - The full prompt text
/// * `config` - Optional provider settings
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn generate_recipe(
    prompt: String,
    config: Option<FfiProviderConfig>,
) -> Result<Vec<FfiTextBlock>, FfiPantryError> {
    let config: ProviderConfig = config.unwrap_or_default().into();
    let provider = ProviderFactory::create(&config)?;

    let rt = create_runtime()?;
    let blocks = rt.block_on(crate::generate_recipe_blocks(provider.as_ref(), &prompt))?;
    Ok(blocks.into_iter().map(Into::into).collect())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
