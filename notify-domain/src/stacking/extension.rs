//! Bookkeeping record carried inside every notification posted by Notify.
//!
//! The record lives as a nested object under [`EXTENSIONS_KEY`] in the
//! notification's [`Extras`] bag so it survives a round trip through the store.
//! Decoding never fails: anything unreadable falls back to the default value.

use serde_json::{Map, Value};

use crate::notification::{Extras, NotificationId};

pub const EXTENSIONS_KEY: &str = "notify.extensions";

const VALID: &str = "notify_valid";
const STACKABLE: &str = "stackable";
const STACKED: &str = "stacked";
const STACK_KEY: &str = "stack_key";
const STACK_ITEMS: &str = "stack_items";
const STACK_MEMBERS: &str = "stack_members";
const SUMMARY_CONTENT: &str = "summary_content";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotifyExtension {
    /// Set on everything Notify posts. `false` marks a foreign notification.
    pub valid: bool,
    pub stackable: bool,
    /// The notification is itself a collapsed summary.
    pub stacked: bool,
    pub stack_key: Option<String>,
    /// Accumulated lines of a collapsed summary.
    pub stack_items: Vec<String>,
    /// Ids whose lines are already part of `stack_items`.
    pub stack_members: Vec<NotificationId>,
    /// This notification's line in a future summary.
    pub summary_content: Option<String>,
}

impl NotifyExtension {
    /// Record for a notification that takes no part in stacking.
    pub fn plain() -> Self {
        NotifyExtension {
            valid: true,
            ..NotifyExtension::default()
        }
    }

    /// Record for the stackable, not yet collapsed, member of a group.
    pub fn stackable(key: impl Into<String>, summary_content: Option<String>) -> Self {
        NotifyExtension {
            valid: true,
            stackable: true,
            stack_key: Some(key.into()),
            summary_content,
            ..NotifyExtension::default()
        }
    }

    /// Marks the record as a collapsed summary holding `lines`, folded from
    /// the notifications in `members`.
    pub fn into_stacked(self, lines: Vec<String>, members: Vec<NotificationId>) -> Self {
        NotifyExtension {
            stackable: true,
            stacked: true,
            stack_items: lines,
            stack_members: members,
            ..self
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Writes `extension` into `bag`, replacing any previous record.
pub fn encode(extension: &NotifyExtension, bag: &mut Extras) {
    let mut record = Map::new();
    record.insert(VALID.to_string(), Value::Bool(extension.valid));

    if extension.stackable {
        record.insert(STACKABLE.to_string(), Value::Bool(true));
        if let Some(key) = non_blank(&extension.stack_key) {
            record.insert(STACK_KEY.to_string(), Value::String(key.to_string()));
        }
    }

    if extension.stacked {
        record.insert(STACKED.to_string(), Value::Bool(true));
        let items = extension.stack_items.iter().cloned().map(Value::String).collect();
        record.insert(STACK_ITEMS.to_string(), Value::Array(items));
        let members = extension.stack_members.iter().map(|id| Value::from(id.0)).collect();
        record.insert(STACK_MEMBERS.to_string(), Value::Array(members));
    }

    if let Some(summary) = non_blank(&extension.summary_content) {
        record.insert(SUMMARY_CONTENT.to_string(), Value::String(summary.to_string()));
    }

    bag.insert(EXTENSIONS_KEY.to_string(), Value::Object(record));
}

/// Reads the record back. Missing or mistyped fields take their default, and
/// a bag without a record decodes to an invalid, all-default extension.
pub fn decode(bag: &Extras) -> NotifyExtension {
    let Some(record) = bag.get(EXTENSIONS_KEY).and_then(Value::as_object) else {
        return NotifyExtension::default();
    };

    let flag = |name: &str| record.get(name).and_then(Value::as_bool).unwrap_or(false);
    let text = |name: &str| record.get(name).and_then(Value::as_str).map(str::to_string);

    NotifyExtension {
        valid: flag(VALID),
        stackable: flag(STACKABLE),
        stacked: flag(STACKED),
        stack_key: text(STACK_KEY),
        stack_items: record
            .get(STACK_ITEMS)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default(),
        stack_members: record
            .get(STACK_MEMBERS)
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_u64)
                    .filter_map(|id| u32::try_from(id).ok())
                    .map(NotificationId::from)
                    .collect()
            })
            .unwrap_or_default(),
        summary_content: text(SUMMARY_CONTENT),
    }
}

/// Group key of the record in `bag`, without decoding the rest.
pub fn extract_group_key(bag: &Extras) -> Option<String> {
    bag.get(EXTENSIONS_KEY)?
        .as_object()?
        .get(STACK_KEY)?
        .as_str()
        .map(str::to_string)
}
