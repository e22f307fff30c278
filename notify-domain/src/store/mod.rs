//! Contract with the host's notification manager.

pub mod channel;
pub mod memory;

pub use channel::{register_channel, NotificationChannel};
pub use memory::InMemoryNotificationStore;

use crate::error::StoreError;
use crate::notification::{NotificationId, PostableNotification};

/// A notification currently shown by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedNotification {
    pub id: NotificationId,
    pub notification: PostableNotification,
}

/// The host's registry of live notifications and channels.
///
/// Implementations may hold notifications that Notify never posted.
/// Individual calls are expected to be atomic; nothing more is assumed.
pub trait NotificationStore: Send + Sync {
    /// Every notification currently live, in posting order.
    fn active_notifications(&self) -> Result<Vec<PostedNotification>, StoreError>;

    /// Posts `notification` under `id`, replacing a live one with the same id.
    fn notify(&self, id: NotificationId, notification: PostableNotification) -> Result<(), StoreError>;

    /// Removes the notification under `id`. Unknown ids are ignored.
    fn cancel(&self, id: NotificationId) -> Result<(), StoreError>;

    fn channel(&self, key: &str) -> Result<Option<NotificationChannel>, StoreError>;

    fn create_channel(&self, channel: NotificationChannel) -> Result<(), StoreError>;
}
