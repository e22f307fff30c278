//! The fully assembled object handed to the notification store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use super::content::Message;
use super::types::{Action, Icon, Image, Intent, Visibility};

/// Opaque per-notification metadata bag. Survives a round trip through the store.
pub type Extras = HashMap<String, serde_json::Value>;

/// LED blink configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lights {
    pub color: u32,
    pub on_ms: u32,
    pub off_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressBar {
    pub max: u8,
    pub current: u8,
    pub indeterminate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleMetadata {
    pub intent: Intent,
    pub icon: Icon,
    pub desired_height: u32,
    pub auto_expand: bool,
    pub suppress_notification: bool,
    pub delete_intent: Option<Intent>,
}

/// Expanded layout of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "kebab-case")]
pub enum NotificationStyle {
    /// Line list. Used by text lists and by collapsed stack summaries.
    Inbox {
        big_content_title: Option<String>,
        lines: Vec<String>,
    },
    BigText {
        big_text: String,
    },
    BigPicture {
        summary_text: Option<String>,
        picture: Option<Image>,
    },
    Messaging {
        user_display_name: String,
        conversation_title: Option<String>,
        messages: Vec<Message>,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PostableNotification {
    pub channel_id: String,
    pub small_icon: Icon,
    pub color: u32,
    pub sub_text: Option<String>,
    pub show_when: bool,
    pub auto_cancel: bool,
    pub content_intent: Option<Intent>,
    pub delete_intent: Option<Intent>,
    pub category: Option<String>,
    pub group: Option<String>,
    pub local_only: bool,
    pub ongoing: bool,
    pub timeout_after: Duration,
    pub people: Vec<String>,
    pub content_title: Option<String>,
    pub content_text: Option<String>,
    pub large_icon: Option<Image>,
    pub actions: Vec<Action>,
    pub visibility: Visibility,
    pub priority: i8,
    pub lights: Option<Lights>,
    pub vibration_pattern: Option<Vec<u64>>,
    pub sound: Option<String>,
    pub progress: Option<ProgressBar>,
    pub bubble: Option<BubbleMetadata>,
    pub style: Option<NotificationStyle>,
    pub extras: Extras,
}

impl PostableNotification {
    pub fn set_style(&mut self, style: Option<NotificationStyle>) {
        self.style = style;
    }

    pub fn set_content_title(&mut self, title: Option<String>) {
        self.content_title = title;
    }

    pub fn set_content_text(&mut self, text: Option<String>) {
        self.content_text = text;
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    pub fn extras_mut(&mut self) -> &mut Extras {
        &mut self.extras
    }

    /// Lines of an inbox style, if that is the active style.
    pub fn text_lines(&self) -> Option<&[String]> {
        match &self.style {
            Some(NotificationStyle::Inbox { lines, .. }) => Some(lines),
            _ => None,
        }
    }
}
