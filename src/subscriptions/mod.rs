//! Subscription system for live store updates.
//!
//! Every mutation of the store is followed by a fan-out of the full record
//! snapshot to all subscribers, in the order they subscribed. Subscribers
//! come in two forms:
//! - Callbacks, invoked synchronously before the mutating call returns
//! - Bounded channels, for consumers that drain at their own pace
//!
//! A channel subscriber whose buffer is full (or whose receiver is gone) is
//! dropped instead of blocking the store.
//!
//! # Example
//!
//! ```ignore
//! let store = RecordStore::new();
//!
//! store.subscribe(|records| println!("{} records", records.len()));
//! let handle = store.subscribe_channel(16);
//!
//! store.append("Build API", "Design and implement", 3);
//!
//! match handle.try_recv() {
//!     Ok(StoreEvent::Snapshot { records }) => assert_eq!(records.len(), 1),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{DropReason, Listener, StoreEvent, SubscriptionHandle, SubscriptionId};
