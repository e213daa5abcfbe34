//! Record store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::history::History;
use crate::record::Record;

/// Predicate used by [`Store::first`] to select a matching record.
///
/// Filters run while the store's read lock is held, so they must be fast
/// and side-effect-free with respect to the store.
pub type Filter<T> = dyn Fn(&T) -> bool + Send + Sync;

/// Side-effecting function applied to every record by [`Store::apply_all`].
///
/// Invocations for different records may run concurrently, with no ordering
/// guarantee between them. A reducer must not call [`Store::add`] or
/// [`Store::delete`] on the store it was dispatched from: the read lock is
/// held for the whole fan-out and a reentrant write deadlocks.
pub type Reducer<T> = dyn Fn(Arc<T>) + Send + Sync;

/// Store of live records, keyed by identifier.
#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    /// Insert a record under `id`, replacing any record already stored
    /// under the same identifier.
    async fn add(&self, id: &str, record: Arc<T>);

    /// Look up a record by identifier.
    async fn get(&self, id: &str) -> Option<Arc<T>>;

    /// Remove the record stored under `id`, if any.
    async fn delete(&self, id: &str);

    /// All current records, ordered by ascending creation time.
    ///
    /// The result is a snapshot: records added or removed after the copy
    /// is taken are not reflected.
    async fn list(&self) -> Vec<Arc<T>>;

    /// Number of records currently present.
    async fn size(&self) -> usize;

    /// Whether the store currently holds no records.
    async fn is_empty(&self) -> bool {
        self.size().await == 0
    }

    /// The first record matching `filter`.
    ///
    /// Iteration order is unspecified; when several records match, which
    /// one is returned is non-deterministic. Callers may only rely on
    /// getting some matching record, or `None` when nothing matches.
    async fn first(&self, filter: &Filter<T>) -> Option<Arc<T>>;

    /// Apply `reducer` to every record currently in the store, potentially
    /// in parallel, returning only once every invocation has completed.
    ///
    /// Concurrent `add`/`delete` calls block until the fan-out finishes;
    /// read operations proceed in parallel with it.
    async fn apply_all(&self, reducer: Arc<Reducer<T>>);
}

/// In-memory [`Store`] backed by a hash map behind a reader/writer lock.
///
/// Records are held as `Arc` handles, not copies, so interior mutability
/// on a record stays visible to readers that fetch it later.
pub struct MemoryStore<T> {
    records: RwLock<HashMap<String, Arc<T>>>,
}

impl<T> MemoryStore<T> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Store<T> for MemoryStore<T> {
    async fn add(&self, id: &str, record: Arc<T>) {
        let mut records = self.records.write().await;
        records.insert(id.to_string(), record);
        debug!("Added record '{}'", id);
    }

    async fn get(&self, id: &str) -> Option<Arc<T>> {
        let records = self.records.read().await;
        records.get(id).cloned()
    }

    async fn delete(&self, id: &str) {
        let mut records = self.records.write().await;
        if records.remove(id).is_some() {
            debug!("Deleted record '{}'", id);
        }
    }

    async fn list(&self) -> Vec<Arc<T>> {
        let snapshot = {
            let records = self.records.read().await;
            let mut history = History::with_capacity(records.len());
            for record in records.values() {
                history.push(Arc::clone(record));
            }
            history
        };
        // Lock released above; sorting never blocks writers.
        snapshot.into_sorted()
    }

    async fn size(&self) -> usize {
        let records = self.records.read().await;
        records.len()
    }

    async fn first(&self, filter: &Filter<T>) -> Option<Arc<T>> {
        let records = self.records.read().await;
        records
            .values()
            .find(|record| filter(record.as_ref()))
            .cloned()
    }

    async fn apply_all(&self, reducer: Arc<Reducer<T>>) {
        let records = self.records.read().await;
        debug!("Applying reducer to {} records", records.len());

        let mut tasks = Vec::with_capacity(records.len());
        for record in records.values() {
            let record = Arc::clone(record);
            let reducer = Arc::clone(&reducer);
            tasks.push(tokio::spawn(async move { reducer(record) }));
        }

        for result in futures::future::join_all(tasks).await {
            if let Err(e) = result {
                warn!("Reducer task failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
