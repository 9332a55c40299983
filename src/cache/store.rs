//! Shared query cache with per-key single-flight fetching.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{watch, Mutex, RwLock};
use tracing::debug;

use crate::models::{ContextView, Page, WorkItem};
use crate::{AppError, Result};

use super::key::{KeyFamily, QueryKey};

/// A cached value; the variant is determined by the key family.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    /// A listing page (basket or global search).
    Page(Page<WorkItem>),
    /// A work item detail entry.
    Detail(WorkItem),
    /// A context view aggregate.
    Context(ContextView),
}

impl CacheValue {
    /// Unwrap a listing page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Cache` if the value is not a page.
    pub fn into_page(self) -> Result<Page<WorkItem>> {
        match self {
            Self::Page(page) => Ok(page),
            other => Err(AppError::Cache(format!(
                "expected page entry, found {other:?}"
            ))),
        }
    }

    /// Unwrap a detail entry.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Cache` if the value is not a detail entry.
    pub fn into_detail(self) -> Result<WorkItem> {
        match self {
            Self::Detail(item) => Ok(item),
            other => Err(AppError::Cache(format!(
                "expected detail entry, found {other:?}"
            ))),
        }
    }

    /// Unwrap a context view.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Cache` if the value is not a context view.
    pub fn into_context(self) -> Result<ContextView> {
        match self {
            Self::Context(view) => Ok(view),
            other => Err(AppError::Cache(format!(
                "expected context entry, found {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CacheValue,
    stale: bool,
}

type FetchOutcome = Result<CacheValue>;

struct CacheInner {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
    in_flight: Mutex<HashMap<QueryKey, watch::Receiver<Option<FetchOutcome>>>>,
}

/// Key-addressed store for normalized query results.
///
/// Per key, at most one fetch is in flight at a time; concurrent callers
/// for the same key await the shared outcome instead of issuing a second
/// request. Fetches run on spawned tasks, so a caller that navigates away
/// does not abort the request — the late result is still written under
/// its key, because the key owns the data, not the caller.
///
/// Clones share the same underlying store.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<CacheInner>,
}

impl QueryCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CacheInner {
                entries: RwLock::new(HashMap::new()),
                in_flight: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Return the fresh entry under `key`, or run `fetch` to produce it.
    ///
    /// A stale entry counts as a miss. A failed fetch leaves the entries
    /// map untouched — any stale value stays readable via [`Self::peek`]
    /// and the next call fetches again; there is no automatic retry.
    ///
    /// # Errors
    ///
    /// Propagates the error produced by `fetch`, shared between all
    /// callers of the same in-flight request.
    pub async fn get_or_fetch<F, Fut>(&self, key: QueryKey, fetch: F) -> Result<CacheValue>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchOutcome> + Send + 'static,
    {
        if let Some(value) = self.lookup_fresh(&key).await {
            return Ok(value);
        }

        let mut rx = {
            let mut in_flight = self.inner.in_flight.lock().await;
            // The fetch we missed may have completed between the
            // freshness check and acquiring the flight table.
            if let Some(value) = self.lookup_fresh(&key).await {
                return Ok(value);
            }
            if let Some(rx) = in_flight.get(&key) {
                rx.clone()
            } else {
                let (tx, rx) = watch::channel(None);
                in_flight.insert(key.clone(), rx.clone());
                let inner = Arc::clone(&self.inner);
                let flight_key = key.clone();
                let future = fetch();
                tokio::spawn(async move {
                    let outcome = future.await;
                    if let Ok(ref value) = outcome {
                        inner.entries.write().await.insert(
                            flight_key.clone(),
                            CacheEntry {
                                value: value.clone(),
                                stale: false,
                            },
                        );
                    }
                    inner.in_flight.lock().await.remove(&flight_key);
                    // All receivers may be gone when every caller
                    // navigated away; the entry write above already
                    // happened either way.
                    let _ = tx.send(Some(outcome));
                });
                rx
            }
        };

        loop {
            let settled = rx.borrow_and_update().clone();
            if let Some(outcome) = settled {
                return outcome;
            }
            if rx.changed().await.is_err() {
                return Err(AppError::Transport("in-flight fetch vanished".into()));
            }
        }
    }

    /// Write a server-confirmed value under `key`, marking it fresh.
    pub async fn insert(&self, key: QueryKey, value: CacheValue) {
        self.inner
            .entries
            .write()
            .await
            .insert(key, CacheEntry { value, stale: false });
    }

    /// Mark one entry stale; the next read re-fetches it. Unknown keys
    /// are ignored.
    pub async fn mark_stale(&self, key: &QueryKey) {
        if let Some(entry) = self.inner.entries.write().await.get_mut(key) {
            entry.stale = true;
            debug!(?key, "cache entry marked stale");
        }
    }

    /// Mark every entry of a family stale.
    pub async fn mark_family_stale(&self, family: KeyFamily) {
        let mut entries = self.inner.entries.write().await;
        for (key, entry) in entries.iter_mut() {
            if key.family() == family {
                entry.stale = true;
            }
        }
    }

    /// Replace every list row whose id matches `id` with `item`, across
    /// both list families. Totals, ordering, and other rows are left
    /// untouched, and no entry changes freshness.
    pub async fn patch_work_item(&self, id: &str, item: &WorkItem) {
        let mut entries = self.inner.entries.write().await;
        let mut patched = 0usize;
        for (key, entry) in entries.iter_mut() {
            if !key.is_list() {
                continue;
            }
            if let CacheValue::Page(ref mut page) = entry.value {
                for row in &mut page.items {
                    if row.id == id {
                        *row = item.clone();
                        patched += 1;
                    }
                }
            }
        }
        if patched > 0 {
            debug!(%id, rows = patched, "patched cached list rows");
        }
    }

    /// Current entry under `key` together with its staleness, fresh or
    /// not. Lets a view keep showing stale data with an error flag after
    /// a failed re-fetch.
    pub async fn peek(&self, key: &QueryKey) -> Option<(CacheValue, bool)> {
        self.inner
            .entries
            .read()
            .await
            .get(key)
            .map(|entry| (entry.value.clone(), entry.stale))
    }

    async fn lookup_fresh(&self, key: &QueryKey) -> Option<CacheValue> {
        let entries = self.inner.entries.read().await;
        let entry = entries.get(key)?;
        if entry.stale {
            None
        } else {
            Some(entry.value.clone())
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
