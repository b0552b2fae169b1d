//! The observable record store.

use crate::error::{BoardError, Result};
use crate::subscriptions::{SubscriptionHandle, SubscriptionId, SubscriptionManager};
use crate::types::{Record, RecordId, RecordStatus, Timestamp};
use parking_lot::{ReentrantMutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Arc<RecordStore>> = OnceLock::new();

/// The single source of truth for submitted records.
///
/// Provides:
/// - Appending records in insertion order
/// - In-place status updates
/// - Snapshot fan-out to subscribers after every mutation
///
/// Readers only ever get copies; the owned sequence is mutated solely by
/// [`append`](Self::append) and [`set_status`](Self::set_status).
pub struct RecordStore {
    /// Records in insertion order.
    records: RwLock<Vec<Record>>,

    /// Counter for generating record IDs.
    next_id: AtomicU64,

    /// Bumped on every mutation, alongside the records it describes.
    generation: AtomicU64,

    subscriptions: SubscriptionManager,

    /// Serializes mutation plus fan-out. Reentrant so a subscriber may
    /// mutate the store from inside its callback; the nested fan-out then
    /// supersedes the outer one.
    write_lock: ReentrantMutex<()>,
}

impl RecordStore {
    /// Create an empty store.
    ///
    /// Applications create one store at startup and hand it to every
    /// component (see [`Board`](crate::Board)); tests create as many as they
    /// like.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            generation: AtomicU64::new(0),
            subscriptions: SubscriptionManager::new(),
            write_lock: ReentrantMutex::new(()),
        }
    }

    /// The process-wide store, created on first access.
    ///
    /// Every call returns the same instance and there is no way to replace
    /// or reset it.
    pub fn global() -> Arc<RecordStore> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(RecordStore::new())))
    }

    // --- Subscriptions ---

    /// Register a callback invoked with a fresh snapshot after every
    /// mutation. Subscribing does not itself trigger a call.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Vec<Record>) + Send + Sync + 'static,
    {
        self.subscriptions.subscribe(listener)
    }

    /// Receive snapshots over a bounded channel instead of a callback.
    pub fn subscribe_channel(&self, buffer_size: usize) -> SubscriptionHandle {
        self.subscriptions.subscribe_channel(buffer_size)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }

    // --- Mutations ---

    /// Append a new `Active` record and notify every subscriber.
    ///
    /// Arguments are not validated here; callers validate first. All
    /// subscribers have processed the new snapshot when this returns. If a
    /// subscriber mutates the store in turn, every subscriber ends on the
    /// newer snapshot instead.
    pub fn append(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        capacity: u32,
    ) -> Record {
        let _lock = self.write_lock.lock();

        let record = Record {
            id: RecordId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: title.into(),
            description: description.into(),
            capacity,
            status: RecordStatus::Active,
            created: Timestamp::now(),
        };

        let (snapshot, generation) = {
            let mut records = self.records.write();
            records.push(record.clone());
            (records.clone(), self.bump_generation())
        };
        tracing::debug!(id = %record.id, total = snapshot.len(), "record appended");

        self.subscriptions.broadcast(&snapshot, generation);
        record
    }

    /// Change a record's status in place and notify every subscriber.
    ///
    /// Setting the status a record already has changes nothing and sends
    /// no notification.
    pub fn set_status(&self, id: RecordId, status: RecordStatus) -> Result<Record> {
        let _lock = self.write_lock.lock();

        let (record, snapshot, generation) = {
            let mut records = self.records.write();
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(BoardError::RecordNotFound(id))?;

            if record.status == status {
                return Ok(record.clone());
            }
            record.status = status;
            let record = record.clone();
            (record, records.clone(), self.bump_generation())
        };
        tracing::debug!(%id, %status, "record status changed");

        self.subscriptions.broadcast(&snapshot, generation);
        Ok(record)
    }

    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    // --- Reads ---

    /// Copy of every record, in insertion order.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    pub fn get(&self, id: RecordId) -> Option<Record> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Current snapshot as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
