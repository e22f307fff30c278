//! Turns a [`NotificationDescriptor`] into a postable notification and posts it.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::error::{NotifyError, StoreError};
use crate::notification::{
    Alerts, Bubble, BubbleMetadata, Content, Importance, Lights, NotificationDescriptor, NotificationId,
    NotificationStyle, PostableNotification, Progress, ProgressBar, StackSpec, NO_LIGHTS,
};
use crate::stacking::{self, Aggregation, NotifyExtension, PostedRecord};
use crate::store::{register_channel, NotificationStore};

const LIGHTS_ON_MS: u32 = 500;
const LIGHTS_OFF_MS: u32 = 2000;

/// A built notification together with the id it must be posted under.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    pub id: NotificationId,
    pub notification: PostableNotification,
    /// Group members folded into this summary that live under another id.
    pub superseded: Vec<NotificationId>,
}

impl Assembled {
    pub fn is_stacked(&self) -> bool {
        stacking::decode(self.notification.extras()).stacked
    }
}

pub struct NotificationAssembler {
    store: Arc<dyn NotificationStore>,
}

impl NotificationAssembler {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        NotificationAssembler { store }
    }

    pub fn store(&self) -> &Arc<dyn NotificationStore> {
        &self.store
    }

    /// Builds the notification without posting it.
    ///
    /// Validation runs before the store is touched. Stackable descriptors
    /// read the live notifications to decide whether the group collapses.
    pub fn build(&self, descriptor: &NotificationDescriptor) -> Result<Assembled, NotifyError> {
        if let Err(e) = descriptor.validate() {
            warn!("Rejected notification descriptor: {}", e);
            return Err(e.into());
        }

        register_channel(self.store.as_ref(), &descriptor.alerting)?;

        let mut notification = render_base(descriptor);

        let aggregation = match &descriptor.stack {
            Some(spec) => {
                let live = self.live_records()?;
                stacking::aggregate(spec, &live)
            }
            None => None,
        };

        let assembled = match (&descriptor.stack, aggregation) {
            (Some(spec), Some(aggregation)) => collapse(notification, spec, aggregation),
            (stack, _) => {
                let style = render_style(&mut notification, &descriptor.content);
                notification.set_style(style);

                let extension = match stack {
                    Some(spec) => NotifyExtension::stackable(spec.key.clone(), spec.summary_content.clone()),
                    None => NotifyExtension::plain(),
                };
                stacking::encode(&extension, notification.extras_mut());

                Assembled {
                    id: descriptor.id.unwrap_or_else(stacking::random_id),
                    notification,
                    superseded: Vec::new(),
                }
            }
        };

        trace!("Assembled notification {} (stacked: {}).", assembled.id, assembled.is_stacked());
        Ok(assembled)
    }

    /// Builds and posts the notification, returning the id it was posted under.
    ///
    /// When the post collapses a group, members that lived under other ids
    /// are cancelled once the summary is up.
    pub fn post(&self, descriptor: &NotificationDescriptor) -> Result<NotificationId, NotifyError> {
        let assembled = self.build(descriptor)?;
        self.show(assembled)
    }

    /// Posts an already built notification.
    ///
    /// A superseded member that cannot be cancelled stays live. The summary
    /// lists it as folded, so the next collapse skips its line and retries
    /// the cancel.
    pub fn show(&self, assembled: Assembled) -> Result<NotificationId, NotifyError> {
        let Assembled {
            id,
            notification,
            superseded,
        } = assembled;

        self.store.notify(id, notification)?;
        for member in superseded {
            trace!("Retiring stack member {} in favour of {}.", member, id);
            if let Err(e) = self.store.cancel(member) {
                warn!("Failed to retire stack member {} after posting {}: {}", member, id, e);
            }
        }

        info!("Posted notification {}.", id);
        Ok(id)
    }

    pub fn cancel(&self, id: NotificationId) -> Result<(), NotifyError> {
        debug!("Cancelling notification {}.", id);
        self.store.cancel(id)?;
        Ok(())
    }

    fn live_records(&self) -> Result<Vec<PostedRecord>, StoreError> {
        let live = self.store.active_notifications()?;
        debug!("Inspecting {} live notification(s) for stacking.", live.len());
        Ok(live
            .into_iter()
            .map(|posted| PostedRecord {
                id: posted.id,
                extension: stacking::decode(posted.notification.extras()),
            })
            .collect())
    }
}

fn collapse(mut notification: PostableNotification, spec: &StackSpec, aggregation: Aggregation) -> Assembled {
    let id = stacking::derive_group_id(&spec.key);
    let Aggregation {
        lines,
        title,
        description,
        members,
    } = aggregation;

    notification.set_content_title(title.clone());
    notification.set_content_text(description);
    notification.content_intent = spec.click_intent.clone();
    notification.actions = spec.stack_actions.clone().unwrap_or_default();
    notification.set_style(Some(NotificationStyle::Inbox {
        big_content_title: title,
        lines: lines.clone(),
    }));

    let superseded: Vec<NotificationId> = members.into_iter().filter(|member| *member != id).collect();
    let extension = NotifyExtension::stackable(spec.key.clone(), spec.summary_content.clone())
        .into_stacked(lines, superseded.clone());
    stacking::encode(&extension, notification.extras_mut());

    debug!("Stack '{}' collapsed into notification {}.", spec.key, id);
    Assembled {
        id,
        notification,
        superseded,
    }
}

/// Everything except the expanded style and the bookkeeping record.
fn render_base(descriptor: &NotificationDescriptor) -> PostableNotification {
    let NotificationDescriptor {
        meta,
        alerting,
        header,
        content,
        progress,
        actions,
        bubble,
        ..
    } = descriptor;

    let mut notification = PostableNotification {
        channel_id: alerting.channel_key.clone(),
        small_icon: header.icon.clone(),
        color: header.color,
        sub_text: header.header_text.clone(),
        show_when: header.show_timestamp,
        auto_cancel: meta.cancel_on_click,
        content_intent: meta.click_intent.clone(),
        delete_intent: meta.clear_intent.clone(),
        category: meta.category.clone(),
        group: meta.group.clone(),
        local_only: meta.local_only,
        ongoing: meta.sticky,
        timeout_after: meta.timeout,
        people: meta.contacts.clone(),
        large_icon: content.large_icon().cloned(),
        actions: actions.clone().unwrap_or_default(),
        progress: render_progress(progress),
        bubble: bubble.as_ref().and_then(render_bubble),
        ..PostableNotification::default()
    };

    if let Some((title, text)) = content.title_and_text() {
        notification.set_content_title(title.map(str::to_string));
        notification.set_content_text(text.map(str::to_string));
    }

    apply_alerting(&mut notification, alerting);
    notification
}

fn apply_alerting(notification: &mut PostableNotification, alerting: &Alerts) {
    notification.visibility = alerting.lock_screen_visibility;
    notification.priority = alerting.channel_importance.priority();

    if alerting.light_color != NO_LIGHTS {
        notification.lights = Some(Lights {
            color: alerting.light_color,
            on_ms: LIGHTS_ON_MS,
            off_ms: LIGHTS_OFF_MS,
        });
    }

    if alerting.channel_importance >= Importance::Normal {
        if !alerting.vibration_pattern.is_empty() {
            notification.vibration_pattern = Some(alerting.vibration_pattern.clone());
        }
        notification.sound = alerting.sound.clone();
    }
}

fn render_progress(progress: &Progress) -> Option<ProgressBar> {
    if !progress.show_progress {
        return None;
    }
    Some(if progress.enable_percentage {
        ProgressBar {
            max: 100,
            current: progress.progress_percent.min(100),
            indeterminate: false,
        }
    } else {
        ProgressBar {
            max: 0,
            current: 0,
            indeterminate: true,
        }
    })
}

fn render_bubble(bubble: &Bubble) -> Option<BubbleMetadata> {
    let (intent, icon) = (bubble.target_activity.clone()?, bubble.bubble_icon.clone()?);
    Some(BubbleMetadata {
        intent,
        icon,
        desired_height: bubble.desired_height,
        auto_expand: bubble.auto_expand,
        suppress_notification: bubble.suppress_initial_notification,
        delete_intent: bubble.clear_intent.clone(),
    })
}

/// Expanded style of a single, uncollapsed notification.
fn render_style(notification: &mut PostableNotification, content: &Content) -> Option<NotificationStyle> {
    match content {
        Content::Default(_) => None,
        Content::TextList(c) => Some(NotificationStyle::Inbox {
            big_content_title: None,
            lines: c.lines.clone(),
        }),
        Content::BigText(c) => {
            notification.set_content_text(Some(c.text.clone().unwrap_or_default()));
            let lead = c.expanded_text.as_ref().map(|e| format!("{}\n", e)).unwrap_or_default();
            Some(NotificationStyle::BigText {
                big_text: lead + c.big_text.as_deref().unwrap_or_default(),
            })
        }
        Content::BigPicture(c) => Some(NotificationStyle::BigPicture {
            summary_text: c.expanded_text.clone().or_else(|| c.text.clone()),
            picture: c.image.clone(),
        }),
        Content::Message(c) => Some(NotificationStyle::Messaging {
            user_display_name: c.user_display_name.clone(),
            conversation_title: c.conversation_title.clone(),
            messages: c.messages.clone(),
        }),
    }
}
