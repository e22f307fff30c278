//! Stacking engine: bookkeeping codec, group aggregation and group identity.

pub mod aggregator;
pub mod extension;
pub mod identity;

pub use aggregator::{aggregate, Aggregation, PostedRecord};
pub use extension::{decode, encode, extract_group_key, NotifyExtension, EXTENSIONS_KEY};
pub use identity::{derive_group_id, random_id};
