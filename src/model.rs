use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::formatter::{self, TextBlock};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_area() -> String {
    "Uncategorized".to_string()
}

fn default_quantity() -> u32 {
    1
}

/// A food item stored in the fridge or pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    /// ISO-8601 date, e.g. `2026-10-21`
    pub expiry_date: String,
    /// Storage area name
    #[serde(default = "default_area")]
    pub area: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, expiry_date: impl Into<String>) -> Self {
        FoodItem {
            id: new_id(),
            name: name.into(),
            expiry_date: expiry_date.into(),
            area: default_area(),
            notes: String::new(),
            quantity: default_quantity(),
        }
    }

    pub fn in_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }
}

/// A storage area or category (e.g. "Freezer", "Door shelf")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageArea {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
}

impl StorageArea {
    pub fn new(name: impl Into<String>) -> Self {
        StorageArea {
            id: new_id(),
            name: name.into(),
        }
    }
}

/// A saved recipe. `content` holds the generated text as returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Recipe {
            id: new_id(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// Formats the recipe content for display
    pub fn blocks(&self) -> Vec<TextBlock> {
        formatter::format(&self.content)
    }
}
