//! Fluent entry point over the [`NotificationAssembler`].

use std::sync::Arc;

use tracing::debug;

use crate::assembler::{Assembled, NotificationAssembler};
use crate::config::NotifyConfig;
use crate::error::NotifyError;
use crate::notification::{
    Action, Alerts, BigPictureContent, BigTextContent, Bubble, Content, DefaultContent, Header, Meta,
    MessageContent, NotificationDescriptor, NotificationId, Progress, StackSpec, TextListContent,
};
use crate::store::NotificationStore;

/// Owns the configuration and the store binding. Cheap to share by reference.
pub struct Notify {
    config: NotifyConfig,
    assembler: NotificationAssembler,
}

impl Notify {
    pub fn new(config: NotifyConfig, store: Arc<dyn NotificationStore>) -> Self {
        Notify {
            config,
            assembler: NotificationAssembler::new(store),
        }
    }

    /// Starts a notification from the configured defaults.
    pub fn creator(&self) -> NotifyCreator<'_> {
        NotifyCreator {
            notify: self,
            descriptor: NotificationDescriptor {
                header: self.config.header.clone(),
                alerting: self.config.alerting.clone(),
                progress: self.config.progress,
                ..NotificationDescriptor::default()
            },
        }
    }

    pub fn cancel(&self, id: NotificationId) -> Result<(), NotifyError> {
        self.assembler.cancel(id)
    }

    /// Installs the global `tracing` subscriber from `config.logging`.
    pub fn init_logging(&self, is_reload: bool) -> Result<(), NotifyError> {
        notify_core::init_logging(&self.config.logging, is_reload)?;
        Ok(())
    }

    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    pub fn assembler(&self) -> &NotificationAssembler {
        &self.assembler
    }
}

/// Builder for one notification. Consumed by [`NotifyCreator::show`].
///
/// ```ignore
/// let id = notify
///     .creator()
///     .content(|c| {
///         c.title = Some("New message".into());
///         c.text = Some("Hey, are you there?".into());
///     })
///     .stackable(|s| {
///         s.key = "chat".into();
///         s.summary_content = Some("Hey, are you there?".into());
///     })?
///     .show()?;
/// ```
pub struct NotifyCreator<'a> {
    notify: &'a Notify,
    descriptor: NotificationDescriptor,
}

impl<'a> NotifyCreator<'a> {
    pub fn meta(mut self, init: impl FnOnce(&mut Meta)) -> Self {
        init(&mut self.descriptor.meta);
        self
    }

    /// Binds the notification to channel `key`, starting from the current alerting.
    pub fn alerting(mut self, key: impl Into<String>, init: impl FnOnce(&mut Alerts)) -> Self {
        let mut alerts = self.descriptor.alerting.with_channel_key(key);
        init(&mut alerts);
        self.descriptor.alerting = alerts;
        self
    }

    pub fn header(mut self, init: impl FnOnce(&mut Header)) -> Self {
        init(&mut self.descriptor.header);
        self
    }

    pub fn progress(mut self, init: impl FnOnce(&mut Progress)) -> Self {
        init(&mut self.descriptor.progress);
        self
    }

    pub fn content(mut self, init: impl FnOnce(&mut DefaultContent)) -> Self {
        let mut content = DefaultContent::default();
        init(&mut content);
        self.descriptor.content = Content::Default(content);
        self
    }

    pub fn as_text_list(mut self, init: impl FnOnce(&mut TextListContent)) -> Self {
        let mut content = TextListContent::default();
        init(&mut content);
        self.descriptor.content = Content::TextList(content);
        self
    }

    pub fn as_big_text(mut self, init: impl FnOnce(&mut BigTextContent)) -> Self {
        let mut content = BigTextContent::default();
        init(&mut content);
        self.descriptor.content = Content::BigText(content);
        self
    }

    pub fn as_big_picture(mut self, init: impl FnOnce(&mut BigPictureContent)) -> Self {
        let mut content = BigPictureContent::default();
        init(&mut content);
        self.descriptor.content = Content::BigPicture(content);
        self
    }

    pub fn as_message(mut self, init: impl FnOnce(&mut MessageContent)) -> Self {
        let mut content = MessageContent::default();
        init(&mut content);
        self.descriptor.content = Content::Message(content);
        self
    }

    /// Replaces the action list.
    pub fn actions(mut self, init: impl FnOnce(&mut Vec<Action>)) -> Self {
        let mut actions = Vec::new();
        init(&mut actions);
        self.descriptor.actions = Some(actions);
        self
    }

    /// Fails when the bubble has no icon or no target.
    pub fn bubblize(mut self, init: impl FnOnce(&mut Bubble)) -> Result<Self, NotifyError> {
        let mut bubble = Bubble::default();
        init(&mut bubble);
        crate::notification::descriptor::validate_bubble(&bubble)?;
        self.descriptor.bubble = Some(bubble);
        Ok(self)
    }

    /// Fails when the stack key is empty.
    pub fn stackable(mut self, init: impl FnOnce(&mut StackSpec)) -> Result<Self, NotifyError> {
        let mut stack = StackSpec::default();
        init(&mut stack);
        stack.validate()?;
        self.descriptor.stack = Some(stack);
        Ok(self)
    }

    /// Posts under `id` unless the notification collapses into a stack summary.
    pub fn with_id(mut self, id: NotificationId) -> Self {
        self.descriptor.id = Some(id);
        self
    }

    pub fn descriptor(&self) -> &NotificationDescriptor {
        &self.descriptor
    }

    pub fn into_descriptor(self) -> NotificationDescriptor {
        self.descriptor
    }

    /// Builds the notification without posting it.
    pub fn as_postable(&self) -> Result<Assembled, NotifyError> {
        self.notify.assembler.build(&self.descriptor)
    }

    /// Posts the notification and returns the id it lives under.
    pub fn show(self) -> Result<NotificationId, NotifyError> {
        debug!("Showing notification on channel '{}'.", self.descriptor.alerting.channel_key);
        self.notify.assembler.post(&self.descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::notification::{Icon, Importance, Intent};
    use crate::store::InMemoryNotificationStore;

    fn notify() -> Notify {
        Notify::new(NotifyConfig::default(), Arc::new(InMemoryNotificationStore::new()))
    }

    #[test]
    fn creator_starts_from_config_defaults() {
        let mut config = NotifyConfig::default();
        config.header.header_text = Some("Inbox".to_string());
        config.alerting.channel_importance = Importance::High;
        let notify = Notify::new(config, Arc::new(InMemoryNotificationStore::new()));

        let creator = notify.creator();
        assert_eq!(creator.descriptor().header.header_text.as_deref(), Some("Inbox"));
        assert_eq!(creator.descriptor().alerting.channel_importance, Importance::High);
    }

    #[test]
    fn creators_do_not_share_state() {
        let notify = notify();
        let first = notify.creator().header(|h| h.header_text = Some("changed".to_string()));
        let second = notify.creator();

        assert_eq!(first.descriptor().header.header_text.as_deref(), Some("changed"));
        assert_eq!(second.descriptor().header.header_text, None);
        assert_eq!(notify.config().header.header_text, None);
    }

    #[test]
    fn alerting_rebinds_channel() {
        let notify = notify();
        let creator = notify.creator().alerting("chat", |a| a.channel_importance = Importance::Max);

        assert_eq!(creator.descriptor().alerting.channel_key, "chat");
        assert_eq!(creator.descriptor().alerting.channel_importance, Importance::Max);
        assert_eq!(notify.creator().descriptor().alerting.channel_key, "application_notification");
    }

    #[test]
    fn stackable_rejects_empty_key() {
        let notify = notify();
        let err = notify.creator().stackable(|s| s.summary_content = Some("Hi".to_string())).err();
        assert!(matches!(err, Some(NotifyError::InvalidArgument(ValidationError::MissingStackKey))));
    }

    #[test]
    fn bubblize_validates_icon_and_target() {
        let notify = notify();
        let err = notify.creator().bubblize(|b| b.target_activity = Some(Intent::new("chat://open"))).err();
        assert!(matches!(err, Some(NotifyError::InvalidArgument(ValidationError::MissingBubbleIcon))));

        let creator = notify
            .creator()
            .bubblize(|b| {
                b.target_activity = Some(Intent::new("chat://open"));
                b.bubble_icon = Some(Icon::new("ic_bubble"));
            })
            .unwrap();
        assert!(creator.descriptor().bubble.is_some());
    }

    #[test]
    fn logging_reload_is_tolerated() {
        let notify = notify();
        assert!(notify.init_logging(true).is_ok());
        assert!(notify.init_logging(true).is_ok());
    }

    #[test]
    fn show_then_cancel() {
        let notify = notify();
        let id = notify
            .creator()
            .content(|c| c.title = Some("Hello".to_string()))
            .with_id(NotificationId(5))
            .show()
            .unwrap();
        assert_eq!(id, NotificationId(5));

        let live = notify.assembler().store().active_notifications().unwrap();
        assert_eq!(live.len(), 1);

        notify.cancel(id).unwrap();
        assert!(notify.assembler().store().active_notifications().unwrap().is_empty());
    }
}
