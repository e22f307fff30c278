//! # Notify Domain Library (`notify-domain`)
//!
//! Describes notifications and posts them to a [`NotificationStore`], collapsing
//! notifications that share a stack key into a single summary.
//!
//! - [`notification`]: descriptors, content variants and the postable result.
//! - [`stacking`]: the bookkeeping codec, the aggregator and group ids.
//! - [`store`]: the host contract plus an in-memory implementation.
//! - [`NotificationAssembler`] and the fluent [`Notify`] / [`NotifyCreator`].
//!
//! Group membership is read back from the store on every stackable post; no
//! state is kept between calls. Callers posting to the same stack key from
//! several threads must serialize those posts themselves.

pub mod assembler;
pub mod config;
pub mod creator;
pub mod error;
pub mod notification;
pub mod stacking;
pub mod store;

pub use assembler::{Assembled, NotificationAssembler};
pub use config::NotifyConfig;
pub use creator::{Notify, NotifyCreator};
pub use error::{NotifyError, StoreError, ValidationError};
pub use notification::{NotificationDescriptor, NotificationId, PostableNotification, StackSpec};
pub use store::{InMemoryNotificationStore, NotificationStore, PostedNotification};
