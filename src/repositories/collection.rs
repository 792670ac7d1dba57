//! Insertion-ordered in-memory collection.
//!
//! Records are kept in the order they were inserted so that paging through a
//! collection is stable. A concurrent id index gives constant-time lookups
//! without taking the records lock for the search.

use dashmap::DashMap;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A record that can live in a [`MockCollection`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Thread-safe collection shared by all request handlers.
pub struct MockCollection<T: Record> {
    records: RwLock<Vec<T>>,
    /// Record id -> position in `records`
    index: DashMap<Uuid, usize>,
}

impl<T: Record> MockCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            index: DashMap::new(),
        }
    }

    /// Append a record and return its id.
    pub async fn insert(&self, record: T) -> Uuid {
        let id = record.id();
        let mut records = self.records.write().await;
        self.index.insert(id, records.len());
        records.push(record);
        id
    }

    /// Append `record` unless an existing record matches `conflicts`.
    ///
    /// The scan and the push happen under one write guard, so two callers
    /// racing on the same key cannot both insert. Returns `None` when refused.
    pub async fn insert_unless<P>(&self, conflicts: P, record: T) -> Option<Uuid>
    where
        P: Fn(&T) -> bool,
    {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| conflicts(existing)) {
            return None;
        }
        let id = record.id();
        self.index.insert(id, records.len());
        records.push(record);
        Some(id)
    }

    /// Append many records at once, keeping their order.
    pub async fn insert_many(&self, batch: Vec<T>) -> usize {
        let mut records = self.records.write().await;
        let inserted = batch.len();
        for record in batch {
            self.index.insert(record.id(), records.len());
            records.push(record);
        }
        debug!("Collection: inserted {} records", inserted);
        inserted
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<T> {
        let position = self.index.get(&id).map(|entry| *entry.value())?;
        let records = self.records.read().await;
        records.get(position).cloned()
    }

    /// First record matching `predicate`, in insertion order.
    pub async fn find_first<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let records = self.records.read().await;
        records.iter().find(|record| predicate(record)).cloned()
    }

    pub async fn count(&self) -> u64 {
        self.records.read().await.len() as u64
    }

    /// Up to `limit` records starting at offset `skip`. Empty past the end.
    pub async fn page(&self, skip: u64, limit: u64) -> Vec<T> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let records = self.records.read().await;
        records.iter().skip(skip).take(limit).cloned().collect()
    }
}

impl<T: Record> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
