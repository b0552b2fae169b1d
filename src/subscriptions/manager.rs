//! Subscription manager for broadcasting store snapshots.

use crate::types::Record;
use crossbeam_channel::{bounded, Sender};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::types::{DropReason, Listener, StoreEvent, SubscriptionHandle, SubscriptionId};

/// Where a subscription's snapshots go.
#[derive(Clone)]
enum Sink {
    Callback(Listener),
    Channel(Sender<StoreEvent>),
}

/// Internal subscription state.
#[derive(Clone)]
struct Subscription {
    id: SubscriptionId,
    sink: Sink,
}

impl Subscription {
    /// Deliver a snapshot. Returns the reason if the subscriber must be dropped.
    fn deliver(&self, snapshot: &[Record]) -> Option<DropReason> {
        match &self.sink {
            Sink::Callback(listener) => {
                listener(snapshot.to_vec());
                None
            }
            Sink::Channel(sender) => {
                let event = StoreEvent::Snapshot {
                    records: snapshot.to_vec(),
                };
                match sender.try_send(event) {
                    Ok(()) => None,
                    Err(crossbeam_channel::TrySendError::Full(_)) => {
                        Some(DropReason::BufferOverflow)
                    }
                    Err(crossbeam_channel::TrySendError::Disconnected(_)) => {
                        Some(DropReason::Disconnected)
                    }
                }
            }
        }
    }

    /// Best-effort notice that the subscription is gone.
    fn notify_dropped(&self, reason: DropReason) {
        if let Sink::Channel(sender) = &self.sink {
            let _ = sender.try_send(StoreEvent::Dropped { reason });
        }
    }
}

/// Manages subscriptions and broadcasts snapshots.
///
/// Subscriptions are kept in registration order, which is also the
/// delivery order.
pub struct SubscriptionManager {
    subscriptions: RwLock<Vec<Subscription>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
    /// Newest generation any broadcast has started delivering.
    latest_generation: AtomicU64,
}

impl SubscriptionManager {
    /// Create a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            latest_generation: AtomicU64::new(0),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a callback. It is not invoked until the next broadcast.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Vec<Record>) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.subscriptions.write().push(Subscription {
            id,
            sink: Sink::Callback(Arc::new(listener)),
        });
        tracing::debug!(subscription = id.0, "callback subscribed");
        id
    }

    /// Register a bounded channel subscriber.
    ///
    /// A zero `buffer_size` is raised to 1; a rendezvous channel would
    /// overflow on the first snapshot.
    pub fn subscribe_channel(&self, buffer_size: usize) -> SubscriptionHandle {
        let id = self.next_id();
        let buffer_size = buffer_size.max(1);
        let (sender, receiver) = bounded(buffer_size);
        self.subscriptions.write().push(Subscription {
            id,
            sink: Sink::Channel(sender),
        });
        tracing::debug!(subscription = id.0, buffer_size, "channel subscribed");
        SubscriptionHandle { id, receiver }
    }

    /// Unsubscribe and clean up. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let removed = {
            let mut subs = self.subscriptions.write();
            subs.iter()
                .position(|s| s.id == id)
                .map(|pos| subs.remove(pos))
        };
        if let Some(sub) = removed {
            sub.notify_dropped(DropReason::Unsubscribed);
            tracing::debug!(subscription = id.0, "unsubscribed");
        }
    }

    /// Get subscription count.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Deliver `snapshot` to every subscriber, in registration order.
    ///
    /// `generation` must grow with every mutation of the snapshot's source.
    /// The registry lock is released before any subscriber runs, so a
    /// callback may subscribe, unsubscribe or mutate the store. Subscribers
    /// added during a broadcast first hear from the next one.
    ///
    /// If a callback triggers a newer broadcast, that one reaches every
    /// subscriber and this one stops, so nobody ends on a stale snapshot.
    pub fn broadcast(&self, snapshot: &[Record], generation: u64) {
        self.latest_generation.fetch_max(generation, Ordering::SeqCst);
        let subs: Vec<Subscription> = self.subscriptions.read().clone();
        tracing::debug!(
            subscribers = subs.len(),
            records = snapshot.len(),
            generation,
            "broadcasting snapshot"
        );

        let mut to_remove = Vec::new();
        for sub in &subs {
            if self.latest_generation.load(Ordering::SeqCst) > generation {
                tracing::debug!(generation, "superseded by a newer snapshot");
                break;
            }
            if let Some(reason) = sub.deliver(snapshot) {
                to_remove.push((sub.id, reason));
            }
        }

        // Remove dropped subscriptions
        if !to_remove.is_empty() {
            let mut subs = self.subscriptions.write();
            for (id, reason) in to_remove {
                if let Some(pos) = subs.iter().position(|s| s.id == id) {
                    let sub = subs.remove(pos);
                    tracing::warn!(subscription = id.0, ?reason, "dropping subscriber");
                    sub.notify_dropped(reason);
                }
            }
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecordId, RecordStatus, Timestamp};
    use parking_lot::Mutex;

    fn make_test_record(id: u64) -> Record {
        Record {
            id: RecordId(id),
            title: format!("record {}", id),
            description: "a test record".to_string(),
            capacity: 1,
            status: RecordStatus::Active,
            created: Timestamp::now(),
        }
    }

    #[test]
    fn test_subscribe_unsubscribe() {
        let manager = SubscriptionManager::new();

        let id = manager.subscribe(|_| {});
        let handle = manager.subscribe_channel(4);
        assert_eq!(manager.subscription_count(), 2);

        manager.unsubscribe(id);
        manager.unsubscribe(handle.id);
        assert_eq!(manager.subscription_count(), 0);

        assert!(matches!(
            handle.try_recv(),
            Ok(StoreEvent::Dropped {
                reason: DropReason::Unsubscribed
            })
        ));
    }

    #[test]
    fn test_broadcast_in_registration_order() {
        let manager = SubscriptionManager::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let calls = Arc::clone(&calls);
            manager.subscribe(move |records| calls.lock().push((n, records.len())));
        }

        manager.broadcast(&[make_test_record(1)], 1);
        assert_eq!(*calls.lock(), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_drop_slow_subscriber() {
        let manager = SubscriptionManager::new();
        let _handle = manager.subscribe_channel(2);

        // Flood with snapshots
        for i in 0..10 {
            manager.broadcast(&[make_test_record(i)], i + 1);
        }

        // Subscriber should be dropped
        assert_eq!(manager.subscription_count(), 0);
    }

    #[test]
    fn test_drop_disconnected_subscriber() {
        let manager = SubscriptionManager::new();
        let handle = manager.subscribe_channel(2);
        drop(handle);

        manager.broadcast(&[], 1);
        assert_eq!(manager.subscription_count(), 0);
    }

    #[test]
    fn test_callback_may_unsubscribe_itself() {
        let manager = Arc::new(SubscriptionManager::new());
        let own_id = Arc::new(Mutex::new(None));

        let id = {
            let inner = Arc::clone(&manager);
            let own_id = Arc::clone(&own_id);
            manager.subscribe(move |_| {
                if let Some(id) = *own_id.lock() {
                    inner.unsubscribe(id);
                }
            })
        };
        *own_id.lock() = Some(id);

        manager.broadcast(&[], 1);
        assert_eq!(manager.subscription_count(), 0);
    }

    #[test]
    fn test_zero_buffer_is_raised() {
        let manager = SubscriptionManager::new();
        let handle = manager.subscribe_channel(0);

        manager.broadcast(&[make_test_record(1)], 1);

        assert_eq!(manager.subscription_count(), 1);
        assert!(matches!(
            handle.try_recv(),
            Ok(StoreEvent::Snapshot { records }) if records.len() == 1
        ));
    }

    #[test]
    fn test_nested_broadcast_supersedes_outer() {
        let manager = Arc::new(SubscriptionManager::new());
        let last_seen = Arc::new(Mutex::new(Vec::new()));

        {
            let inner = Arc::clone(&manager);
            manager.subscribe(move |records| {
                if records.len() == 1 {
                    let newer = vec![make_test_record(1), make_test_record(2)];
                    inner.broadcast(&newer, 2);
                }
            });
        }
        for n in 0..2 {
            let last_seen = Arc::clone(&last_seen);
            manager.subscribe(move |records| {
                let mut seen = last_seen.lock();
                seen.retain(|(who, _)| *who != n);
                seen.push((n, records.len()));
            });
        }

        manager.broadcast(&[make_test_record(1)], 1);

        let seen = last_seen.lock();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|(_, len)| *len == 2));
    }

    #[test]
    fn test_older_generation_is_not_delivered() {
        let manager = SubscriptionManager::new();
        let calls = Arc::new(Mutex::new(0));
        {
            let calls = Arc::clone(&calls);
            manager.subscribe(move |_| *calls.lock() += 1);
        }

        manager.broadcast(&[], 5);
        manager.broadcast(&[], 3);
        assert_eq!(*calls.lock(), 1);
    }
}
