//! Building blocks shared by descriptors and postable notifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Integer key under which a notification is posted, replaced and cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u32);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NotificationId {
    fn from(value: u32) -> Self {
        NotificationId(value)
    }
}

/// Handler fired by the host when the user interacts with a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intent(pub String);

impl Intent {
    pub fn new(target: impl Into<String>) -> Self {
        Intent(target.into())
    }
}

/// Icon resource name or path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(pub String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Icon(name.into())
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon(DEFAULT_ICON.to_string())
    }
}

/// Bitmap reference used for large icons and pictures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Image(pub String);

impl Image {
    pub fn new(path: impl Into<String>) -> Self {
        Image(path.into())
    }
}

pub const DEFAULT_ICON: &str = "ic_app_icon";
pub const DEFAULT_COLOR: u32 = 0x4A90E2;
pub const CHANNEL_DEFAULT_KEY: &str = "application_notification";
pub const CHANNEL_DEFAULT_NAME: &str = "Application notifications.";
pub const CHANNEL_DEFAULT_DESCRIPTION: &str = "General application notifications.";
pub const DEFAULT_SOUND: &str = "notification://default";
/// `light_color` value that disables the notification LED.
pub const NO_LIGHTS: u32 = 0;

/// A button shown under the notification body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub icon: Icon,
    pub title: String,
    pub intent: Intent,
}

impl Action {
    pub fn new(icon: Icon, title: impl Into<String>, intent: Intent) -> Self {
        Action {
            icon,
            title: title.into(),
            intent,
        }
    }
}

/// Non-layout behaviour of a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub click_intent: Option<Intent>,
    /// Fired on swipe-away or "clear all".
    pub clear_intent: Option<Intent>,
    pub cancel_on_click: bool,
    pub category: Option<String>,
    /// Host-side bundling key. Independent of stacking.
    pub group: Option<String>,
    pub local_only: bool,
    /// Sticky notifications survive "clear all" and cannot be dismissed.
    pub sticky: bool,
    /// Auto-dismiss delay; zero keeps the notification until dismissed.
    pub timeout: Duration,
    /// Contact references (`mailto:`, `tel:` or lookup URIs).
    pub contacts: Vec<String>,
}

impl Default for Meta {
    fn default() -> Self {
        Meta {
            click_intent: None,
            clear_intent: None,
            cancel_on_click: true,
            category: None,
            group: None,
            local_only: false,
            sticky: false,
            timeout: Duration::ZERO,
            contacts: Vec::new(),
        }
    }
}

impl Meta {
    pub fn people(&mut self, init: impl FnOnce(&mut Vec<String>)) {
        init(&mut self.contacts);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    Min,
    Low,
    #[default]
    Normal,
    High,
    Max,
}

impl Importance {
    /// Per-notification priority, `-2..=2`.
    pub fn priority(self) -> i8 {
        match self {
            Importance::Min => -2,
            Importance::Low => -1,
            Importance::Normal => 0,
            Importance::High => 1,
            Importance::Max => 2,
        }
    }

    /// Channel importance, `1..=5`.
    pub fn channel_importance(self) -> u8 {
        (self.priority() + 3) as u8
    }
}

/// How much of the notification shows on a locked screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Secret,
    #[default]
    Private,
    Public,
}

/// Alerting configuration, also used to register the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Alerts {
    pub lock_screen_visibility: Visibility,
    pub channel_key: String,
    pub channel_name: String,
    pub channel_description: String,
    pub channel_importance: Importance,
    /// LED colour, [`NO_LIGHTS`] to disable.
    pub light_color: u32,
    /// Only applied at [`Importance::Normal`] or above.
    pub vibration_pattern: Vec<u64>,
    /// Only applied at [`Importance::Normal`] or above.
    pub sound: Option<String>,
}

impl Default for Alerts {
    fn default() -> Self {
        Alerts {
            lock_screen_visibility: Visibility::Private,
            channel_key: CHANNEL_DEFAULT_KEY.to_string(),
            channel_name: CHANNEL_DEFAULT_NAME.to_string(),
            channel_description: CHANNEL_DEFAULT_DESCRIPTION.to_string(),
            channel_importance: Importance::Normal,
            light_color: NO_LIGHTS,
            vibration_pattern: Vec::new(),
            sound: Some(DEFAULT_SOUND.to_string()),
        }
    }
}

impl Alerts {
    /// Copy of `self` bound to another channel.
    pub fn with_channel_key(&self, key: impl Into<String>) -> Self {
        Alerts {
            channel_key: key.into(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Header {
    pub icon: Icon,
    /// Tint of the icon, app name and expand chevron.
    pub color: u32,
    /// Text shown next to the app name.
    pub header_text: Option<String>,
    pub show_timestamp: bool,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            icon: Icon::default(),
            color: DEFAULT_COLOR,
            header_text: None,
            show_timestamp: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Progress {
    pub show_progress: bool,
    /// Determinate bar when set, indeterminate otherwise.
    pub enable_percentage: bool,
    pub progress_percent: u8,
}

/// Floating conversation bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bubble {
    /// Required.
    pub target_activity: Option<Intent>,
    pub clear_intent: Option<Intent>,
    pub desired_height: u32,
    /// Required.
    pub bubble_icon: Option<Icon>,
    pub auto_expand: bool,
    pub suppress_initial_notification: bool,
}

impl Default for Bubble {
    fn default() -> Self {
        Bubble {
            target_activity: None,
            clear_intent: None,
            desired_height: 600,
            bubble_icon: None,
            auto_expand: false,
            suppress_initial_notification: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(NotificationId: fmt::Debug, Clone, Copy, Eq, std::hash::Hash, Serialize, Deserialize<'static>, Send, Sync);
    assert_impl_all!(Alerts: Clone, Default, Serialize, Deserialize<'static>, Send, Sync);

    #[test]
    fn id_from_raw_value() {
        let id = NotificationId::from(7u32);
        assert_eq!(id, NotificationId(7));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn importance_mappings() {
        assert_eq!(Importance::default(), Importance::Normal);
        assert_eq!(Importance::Min.priority(), -2);
        assert_eq!(Importance::Max.priority(), 2);
        assert_eq!(Importance::Min.channel_importance(), 1);
        assert_eq!(Importance::Normal.channel_importance(), 3);
        assert_eq!(Importance::Max.channel_importance(), 5);
        assert!(Importance::High >= Importance::Normal);
    }

    #[test]
    fn alerts_defaults() {
        let alerts = Alerts::default();
        assert_eq!(alerts.channel_key, CHANNEL_DEFAULT_KEY);
        assert_eq!(alerts.lock_screen_visibility, Visibility::Private);
        assert_eq!(alerts.light_color, NO_LIGHTS);
        assert_eq!(alerts.sound.as_deref(), Some(DEFAULT_SOUND));
    }

    #[test]
    fn with_channel_key_keeps_other_fields() {
        let base = Alerts { channel_importance: Importance::High, ..Alerts::default() };
        let copy = base.with_channel_key("chat");
        assert_eq!(copy.channel_key, "chat");
        assert_eq!(copy.channel_importance, Importance::High);
        assert_eq!(base.channel_key, CHANNEL_DEFAULT_KEY);
    }

    #[test]
    fn meta_defaults_cancel_on_click() {
        let mut meta = Meta::default();
        assert!(meta.cancel_on_click);
        assert_eq!(meta.timeout, Duration::ZERO);
        meta.people(|p| p.push("tel:5555555".to_string()));
        assert_eq!(meta.contacts, vec!["tel:5555555".to_string()]);
    }

    #[test]
    fn partial_header_deserializes_with_defaults() {
        let header: Header = serde_json::from_str(r#"{ "header_text": "Inbox" }"#).unwrap();
        assert_eq!(header.header_text.as_deref(), Some("Inbox"));
        assert_eq!(header.color, DEFAULT_COLOR);
        assert!(header.show_timestamp);
    }
}
