use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::NotificationStore;
use crate::error::StoreError;
use crate::notification::{Alerts, Visibility, NO_LIGHTS};

/// Alerting behaviour shared by every notification posted to a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub description: String,
    /// `1..=5`.
    pub importance: u8,
    pub lock_screen_visibility: Visibility,
    pub light_color: Option<u32>,
    pub vibration_pattern: Option<Vec<u64>>,
    pub sound: Option<String>,
}

impl From<&Alerts> for NotificationChannel {
    fn from(alerts: &Alerts) -> Self {
        NotificationChannel {
            id: alerts.channel_key.clone(),
            name: alerts.channel_name.clone(),
            description: alerts.channel_description.clone(),
            importance: alerts.channel_importance.channel_importance(),
            lock_screen_visibility: alerts.lock_screen_visibility,
            light_color: Some(alerts.light_color).filter(|c| *c != NO_LIGHTS),
            vibration_pattern: Some(alerts.vibration_pattern.clone()).filter(|p| !p.is_empty()),
            sound: alerts.sound.clone(),
        }
    }
}

/// Creates the channel described by `alerts` unless one with the same key
/// already exists. Existing channels are left untouched.
///
/// Returns whether the channel exists afterwards.
pub fn register_channel(store: &dyn NotificationStore, alerts: &Alerts) -> Result<bool, StoreError> {
    if store.channel(&alerts.channel_key)?.is_some() {
        trace!("Channel '{}' already registered.", alerts.channel_key);
        return Ok(true);
    }

    store.create_channel(NotificationChannel::from(alerts))?;
    debug!("Registered notification channel '{}'.", alerts.channel_key);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Importance;
    use crate::store::InMemoryNotificationStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn channel_from_default_alerts() {
        let channel = NotificationChannel::from(&Alerts::default());
        assert_eq!(channel.id, "application_notification");
        assert_eq!(channel.importance, 3);
        assert_eq!(channel.light_color, None);
        assert_eq!(channel.vibration_pattern, None);
    }

    #[test]
    fn channel_keeps_lights_and_vibration() {
        let alerts = Alerts {
            channel_importance: Importance::High,
            light_color: 0xFF0000,
            vibration_pattern: vec![0, 200, 100, 200],
            ..Alerts::default()
        };
        let channel = NotificationChannel::from(&alerts);
        assert_eq!(channel.importance, 4);
        assert_eq!(channel.light_color, Some(0xFF0000));
        assert_eq!(channel.vibration_pattern, Some(vec![0, 200, 100, 200]));
    }

    #[test]
    fn existing_channel_is_not_modified() {
        let store = InMemoryNotificationStore::new();
        assert!(register_channel(&store, &Alerts::default()).unwrap());

        let louder = Alerts {
            channel_importance: Importance::Max,
            ..Alerts::default()
        };
        assert!(register_channel(&store, &louder).unwrap());

        let stored = store.channel("application_notification").unwrap().unwrap();
        assert_eq!(stored.importance, 3);
    }
}
