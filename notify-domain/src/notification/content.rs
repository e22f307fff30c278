//! Content variants. Exactly one is active per descriptor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::Image;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultContent {
    pub title: Option<String>,
    pub text: Option<String>,
    pub large_icon: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextListContent {
    pub title: Option<String>,
    pub text: Option<String>,
    pub large_icon: Option<Image>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BigTextContent {
    pub title: Option<String>,
    pub text: Option<String>,
    pub large_icon: Option<Image>,
    /// Leading paragraph of the expanded view.
    pub expanded_text: Option<String>,
    pub big_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BigPictureContent {
    pub title: Option<String>,
    pub text: Option<String>,
    pub large_icon: Option<Image>,
    pub expanded_text: Option<String>,
    pub image: Option<Image>,
}

/// One entry of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// `None` for messages written by the device user.
    pub sender: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>, sender: Option<String>) -> Self {
        Message {
            text: text.into(),
            timestamp,
            sender,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageContent {
    pub large_icon: Option<Image>,
    pub conversation_title: Option<String>,
    /// Display name of the device user.
    pub user_display_name: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Content {
    Default(DefaultContent),
    TextList(TextListContent),
    BigText(BigTextContent),
    BigPicture(BigPictureContent),
    Message(MessageContent),
}

impl Default for Content {
    fn default() -> Self {
        Content::Default(DefaultContent::default())
    }
}

impl Content {
    /// Title and text of the collapsed view. `Message` content has neither.
    pub fn title_and_text(&self) -> Option<(Option<&str>, Option<&str>)> {
        match self {
            Content::Default(c) => Some((c.title.as_deref(), c.text.as_deref())),
            Content::TextList(c) => Some((c.title.as_deref(), c.text.as_deref())),
            Content::BigText(c) => Some((c.title.as_deref(), c.text.as_deref())),
            Content::BigPicture(c) => Some((c.title.as_deref(), c.text.as_deref())),
            Content::Message(_) => None,
        }
    }

    pub fn large_icon(&self) -> Option<&Image> {
        match self {
            Content::Default(c) => c.large_icon.as_ref(),
            Content::TextList(c) => c.large_icon.as_ref(),
            Content::BigText(c) => c.large_icon.as_ref(),
            Content::BigPicture(c) => c.large_icon.as_ref(),
            Content::Message(c) => c.large_icon.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_default_variant() {
        assert_eq!(Content::default(), Content::Default(DefaultContent::default()));
    }

    #[test]
    fn message_has_no_standard_title() {
        let content = Content::Message(MessageContent {
            conversation_title: Some("Lunch".to_string()),
            ..MessageContent::default()
        });
        assert!(content.title_and_text().is_none());
    }

    #[test]
    fn standard_title_and_text() {
        let content = Content::BigText(BigTextContent {
            title: Some("Title".to_string()),
            text: Some("Text".to_string()),
            ..BigTextContent::default()
        });
        assert_eq!(content.title_and_text(), Some((Some("Title"), Some("Text"))));
    }

    #[test]
    fn tagged_serialization() {
        let json = serde_json::to_value(Content::TextList(TextListContent {
            lines: vec!["a".to_string()],
            ..TextListContent::default()
        }))
        .unwrap();
        assert_eq!(json["kind"], "text-list");
        assert_eq!(json["lines"][0], "a");
    }
}
