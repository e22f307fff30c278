use std::collections::HashMap;
use std::sync::RwLock;

use tracing::trace;

use super::{NotificationChannel, NotificationStore, PostedNotification};
use crate::error::StoreError;
use crate::notification::{NotificationId, PostableNotification};

/// Map-backed store for hosts without a notification manager, and for tests.
#[derive(Debug, Default)]
pub struct InMemoryNotificationStore {
    active: RwLock<Vec<PostedNotification>>,
    channels: RwLock<HashMap<String, NotificationChannel>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Live notification under `id`, if any.
    pub fn get(&self, id: NotificationId) -> Result<Option<PostableNotification>, StoreError> {
        let active = self
            .active
            .read()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire read lock for active notifications: {}", e)))?;
        Ok(active.iter().find(|p| p.id == id).map(|p| p.notification.clone()))
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let active = self
            .active
            .read()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire read lock for active notifications: {}", e)))?;
        Ok(active.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl NotificationStore for InMemoryNotificationStore {
    fn active_notifications(&self) -> Result<Vec<PostedNotification>, StoreError> {
        let active = self
            .active
            .read()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire read lock for active notifications: {}", e)))?;
        Ok(active.clone())
    }

    fn notify(&self, id: NotificationId, notification: PostableNotification) -> Result<(), StoreError> {
        let mut active = self
            .active
            .write()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire write lock for active notifications: {}", e)))?;
        match active.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                trace!("Replacing live notification {}.", id);
                existing.notification = notification;
            }
            None => active.push(PostedNotification { id, notification }),
        }
        Ok(())
    }

    fn cancel(&self, id: NotificationId) -> Result<(), StoreError> {
        let mut active = self
            .active
            .write()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire write lock for active notifications: {}", e)))?;
        active.retain(|p| p.id != id);
        Ok(())
    }

    fn channel(&self, key: &str) -> Result<Option<NotificationChannel>, StoreError> {
        let channels = self
            .channels
            .read()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire read lock for channels: {}", e)))?;
        Ok(channels.get(key).cloned())
    }

    fn create_channel(&self, channel: NotificationChannel) -> Result<(), StoreError> {
        let mut channels = self
            .channels
            .write()
            .map_err(|e| StoreError::Internal(format!("Failed to acquire write lock for channels: {}", e)))?;
        channels.insert(channel.id.clone(), channel);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(InMemoryNotificationStore: NotificationStore, Default, Send, Sync);

    fn titled(title: &str) -> PostableNotification {
        PostableNotification {
            content_title: Some(title.to_string()),
            ..PostableNotification::default()
        }
    }

    #[test]
    fn notify_upserts_in_place() {
        let store = InMemoryNotificationStore::new();
        store.notify(NotificationId(1), titled("first")).unwrap();
        store.notify(NotificationId(2), titled("second")).unwrap();
        store.notify(NotificationId(1), titled("replaced")).unwrap();

        let live = store.active_notifications().unwrap();
        assert_eq!(live.len(), 2);
        assert_eq!(live[0].id, NotificationId(1));
        assert_eq!(live[0].notification.content_title.as_deref(), Some("replaced"));
        assert_eq!(live[1].id, NotificationId(2));
    }

    #[test]
    fn cancel_unknown_id_is_a_no_op() {
        let store = InMemoryNotificationStore::new();
        store.notify(NotificationId(1), titled("first")).unwrap();
        store.cancel(NotificationId(7)).unwrap();
        assert_eq!(store.len().unwrap(), 1);

        store.cancel(NotificationId(1)).unwrap();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.get(NotificationId(1)).unwrap(), None);
    }
}
