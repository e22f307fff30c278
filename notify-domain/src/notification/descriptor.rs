//! The caller's description of one notification request.

use std::fmt;
use std::sync::Arc;

use super::content::Content;
use super::types::{Action, Alerts, Bubble, Header, Intent, Meta, NotificationId, Progress};
use crate::error::ValidationError;

/// Maps the number of stacked lines to a summary string.
pub type CountFormatter = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Opt-in to stacking: every notification posted with the same `key`
/// collapses into a single summary once a second one arrives.
#[derive(Clone, Default)]
pub struct StackSpec {
    pub key: String,
    /// Click handler of the collapsed summary.
    pub click_intent: Option<Intent>,
    /// This notification's line in the collapsed summary.
    pub summary_content: Option<String>,
    pub summary_title: Option<CountFormatter>,
    pub summary_description: Option<CountFormatter>,
    /// Replaces the actions of the collapsed summary.
    pub stack_actions: Option<Vec<Action>>,
}

impl StackSpec {
    pub fn new(key: impl Into<String>) -> Self {
        StackSpec {
            key: key.into(),
            ..StackSpec::default()
        }
    }

    pub fn with_click_intent(mut self, intent: Intent) -> Self {
        self.click_intent = Some(intent);
        self
    }

    pub fn with_summary_content(mut self, content: impl Into<String>) -> Self {
        self.summary_content = Some(content.into());
        self
    }

    pub fn with_summary_title<F>(mut self, title: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.summary_title = Some(Arc::new(title));
        self
    }

    pub fn with_summary_description<F>(mut self, description: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        self.summary_description = Some(Arc::new(description));
        self
    }

    pub fn actions(&mut self, init: impl FnOnce(&mut Vec<Action>)) {
        init(self.stack_actions.get_or_insert_with(Vec::new));
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.stack_actions = Some(actions);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key.trim().is_empty() {
            return Err(ValidationError::MissingStackKey);
        }
        Ok(())
    }
}

impl fmt::Debug for StackSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackSpec")
            .field("key", &self.key)
            .field("click_intent", &self.click_intent)
            .field("summary_content", &self.summary_content)
            .field("summary_title", &self.summary_title.as_ref().map(|_| "Fn(usize)"))
            .field("summary_description", &self.summary_description.as_ref().map(|_| "Fn(usize)"))
            .field("stack_actions", &self.stack_actions)
            .finish()
    }
}

pub fn validate_bubble(bubble: &Bubble) -> Result<(), ValidationError> {
    if bubble.bubble_icon.is_none() {
        return Err(ValidationError::MissingBubbleIcon);
    }
    if bubble.target_activity.is_none() {
        return Err(ValidationError::MissingBubbleTarget);
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct NotificationDescriptor {
    pub meta: Meta,
    pub alerting: Alerts,
    pub header: Header,
    pub content: Content,
    pub progress: Progress,
    pub actions: Option<Vec<Action>>,
    pub bubble: Option<Bubble>,
    pub stack: Option<StackSpec>,
    /// Ignored when the notification collapses into a stack summary.
    pub id: Option<NotificationId>,
}

impl NotificationDescriptor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(stack) = &self.stack {
            stack.validate()?;
        }
        if let Some(bubble) = &self.bubble {
            validate_bubble(bubble)?;
        }
        Ok(())
    }
}
