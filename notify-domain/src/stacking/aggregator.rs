//! Folds the live members of a group and a new submission into one summary.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::extension::NotifyExtension;
use crate::notification::{NotificationId, StackSpec};

/// A live notification as seen by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedRecord {
    pub id: NotificationId,
    pub extension: NotifyExtension,
}

/// Result of collapsing a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Oldest first, the new submission last.
    pub lines: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Ids of the live notifications folded into `lines`, including members
    /// a live summary already holds but that are still posted.
    pub members: Vec<NotificationId>,
}

impl Aggregation {
    pub fn count(&self) -> usize {
        self.lines.len()
    }
}

fn is_member(extension: &NotifyExtension, key: &str) -> bool {
    extension.valid && extension.stackable && extension.stack_key.as_deref() == Some(key)
}

/// Collapses the members of `spec.key` found in `live` together with the new
/// submission.
///
/// Returns `None` when no live member exists: the submission is the first of
/// its group and is shown as an ordinary notification.
///
/// A plain member whose id a live summary lists in `stack_members` adds no
/// line, since its line is already in that summary's history.
pub fn aggregate(spec: &StackSpec, live: &[PostedRecord]) -> Option<Aggregation> {
    let group: Vec<&PostedRecord> = live.iter().filter(|r| is_member(&r.extension, &spec.key)).collect();
    let folded: HashSet<NotificationId> = group
        .iter()
        .filter(|r| r.extension.stacked)
        .flat_map(|r| r.extension.stack_members.iter().copied())
        .collect();

    let mut lines = Vec::new();
    let mut members = Vec::new();

    for record in group {
        if record.extension.stacked {
            lines.extend(record.extension.stack_items.iter().cloned());
        } else if folded.contains(&record.id) {
            trace!("Member {} of stack '{}' is already summarised.", record.id, spec.key);
        } else if let Some(summary) = &record.extension.summary_content {
            lines.push(summary.clone());
        }
        members.push(record.id);
    }

    trace!("Stack '{}' has {} live member(s) out of {} live notification(s).", spec.key, members.len(), live.len());
    if members.is_empty() {
        return None;
    }

    if let Some(summary) = &spec.summary_content {
        lines.push(summary.clone());
    }

    let count = lines.len();
    let title = spec.summary_title.as_ref().map(|f| f(count));
    let description = spec.summary_description.as_ref().map(|f| f(count));

    debug!("Collapsed stack '{}' into {} line(s).", spec.key, count);
    Some(Aggregation {
        lines,
        title,
        description,
        members,
    })
}
