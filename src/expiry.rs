//! Periodic check for food that is about to expire.
//!
//! The host schedules [`ExpiryCheck::run`] in the background; the check asks the
//! inventory for items expiring soon and posts a single summary notification.

use async_trait::async_trait;
use log::{debug, error, info};

use crate::config::ExpiryConfig;
use crate::error::PantryError;
use crate::model::FoodItem;

pub const EXPIRY_NOTIFICATION_TITLE: &str = "⚠️ Food Expiring Soon";

/// Read access to the stored food items
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Items whose expiry date falls within the next `days` days
    async fn expiring_within(&self, days: u32) -> Result<Vec<FoodItem>, PantryError>;
}

/// Displays local notifications
pub trait NotificationSink: Send + Sync {
    fn show(&self, notification: &Notification) -> Result<(), PantryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: i32,
    pub title: String,
    pub message: String,
}

/// Result of one background run, as reported to the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOutcome {
    Success,
    Failure,
}

/// Builds the summary line for expiring items.
///
/// Lists at most `max_listed` names (never fewer than one); returns `None`
/// when nothing is expiring.
pub fn expiry_message(items: &[FoodItem], max_listed: usize) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let max_listed = max_listed.max(1);

    let names = items
        .iter()
        .take(max_listed)
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let message = if items.len() > max_listed {
        format!(
            "{} and {} more items are expiring soon!",
            names,
            items.len() - max_listed
        )
    } else {
        let verb = if items.len() == 1 { "is" } else { "are" };
        format!("{} {} expiring soon!", names, verb)
    };

    Some(message)
}

pub struct ExpiryCheck<'a> {
    store: &'a dyn InventoryStore,
    sink: &'a dyn NotificationSink,
    config: ExpiryConfig,
}

impl<'a> ExpiryCheck<'a> {
    pub fn new(
        store: &'a dyn InventoryStore,
        sink: &'a dyn NotificationSink,
        config: ExpiryConfig,
    ) -> Self {
        ExpiryCheck {
            store,
            sink,
            config,
        }
    }

    /// Runs one check. Errors are logged and reported as [`WorkOutcome::Failure`].
    pub async fn run(&self) -> WorkOutcome {
        match self.check().await {
            Ok(Some(notification)) => {
                info!("Posted expiry notification: {}", notification.message);
                WorkOutcome::Success
            }
            Ok(None) => {
                debug!(
                    "No items expiring within {} days",
                    self.config.days_threshold
                );
                WorkOutcome::Success
            }
            Err(e) => {
                error!("Expiry check failed: {}", e);
                WorkOutcome::Failure
            }
        }
    }

    async fn check(&self) -> Result<Option<Notification>, PantryError> {
        let items = self
            .store
            .expiring_within(self.config.days_threshold)
            .await?;

        let Some(message) = expiry_message(&items, self.config.max_listed) else {
            return Ok(None);
        };

        let notification = Notification {
            id: self.config.notification_id,
            title: EXPIRY_NOTIFICATION_TITLE.to_string(),
            message,
        };
        self.sink.show(&notification)?;

        Ok(Some(notification))
    }
}
