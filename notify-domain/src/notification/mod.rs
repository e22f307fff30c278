//! Notification data model: what callers describe and what the store receives.

pub mod content;
pub mod descriptor;
pub mod postable;
pub mod types;

pub use content::{
    BigPictureContent, BigTextContent, Content, DefaultContent, Message, MessageContent, TextListContent,
};
pub use descriptor::{CountFormatter, NotificationDescriptor, StackSpec};
pub use postable::{BubbleMetadata, Extras, Lights, NotificationStyle, PostableNotification, ProgressBar};
pub use types::{
    Action, Alerts, Bubble, Header, Icon, Image, Importance, Intent, Meta, NotificationId, Progress, Visibility,
    NO_LIGHTS,
};
