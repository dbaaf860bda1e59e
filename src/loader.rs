//! Resilient collection loading.
//!
//! Dashboards ask the document store for a collection once per load cycle.
//! A live, non-empty result is passed through untouched; an empty result or
//! a failed fetch substitutes the fixture fallback so the view never renders
//! blank. Fetch failures are absorbed here and logged, never surfaced to the
//! caller; user-initiated mutations are the only errors that propagate.

use std::future::Future;

use tracing::{debug, warn};

use crate::models::Origin;
use crate::store;

/// Per-collection load cycle: `Unloaded -> Loading -> Ready(origin)`.
/// A refresh restarts at `Loading`; there is no partial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Ready(Origin),
}

pub struct Loaded<T> {
    pub records: Vec<T>,
    pub origin: Origin,
}

/// Await the fetch and resolve to either the live records or the fallback.
/// Empty live results are treated the same as failures: fallback wins, so a
/// first-run or demo account still sees data.
pub async fn load_collection<T, Fut>(name: &str, fetch: Fut, fallback: Vec<T>) -> Loaded<T>
where
    Fut: Future<Output = store::Result<Vec<T>>>,
{
    match fetch.await {
        Ok(records) if !records.is_empty() => {
            debug!(collection = name, count = records.len(), "loaded live records");
            Loaded {
                records,
                origin: Origin::Live,
            }
        }
        Ok(_) => {
            debug!(collection = name, "live result empty, using fallback records");
            Loaded {
                records: fallback,
                origin: Origin::Demo,
            }
        }
        Err(err) => {
            warn!(collection = name, error = %err, "fetch failed, using fallback records");
            Loaded {
                records: fallback,
                origin: Origin::Demo,
            }
        }
    }
}

/// Route a mutation by record origin. Demo records have no backing row in
/// the store, so their mutation runs against local view state only and the
/// store is never contacted. Live mutations go to the store and their result
/// is returned unchanged.
pub async fn apply_mutation<T, D, L, Fut>(origin: Origin, on_demo: D, on_live: L) -> store::Result<T>
where
    D: FnOnce() -> T,
    L: FnOnce() -> Fut,
    Fut: Future<Output = store::Result<T>>,
{
    match origin {
        Origin::Demo => Ok(on_demo()),
        Origin::Live => on_live().await,
    }
}

/// View-local collection state. Owned exclusively by one view instance;
/// mutated only by that view's own handlers.
pub struct CollectionView<T> {
    records: Vec<T>,
    state: LoadState,
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionView<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Unloaded,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn origin(&self) -> Option<Origin> {
        match self.state {
            LoadState::Ready(origin) => Some(origin),
            _ => None,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Local mutation point for demo records (accept/reject without a store
    /// round-trip).
    pub fn records_mut(&mut self) -> &mut Vec<T> {
        &mut self.records
    }

    /// Run one load cycle. Always resolves to `Ready`; the view never
    /// observes a partial collection.
    pub async fn refresh<Fut>(&mut self, name: &str, fetch: Fut, fallback: Vec<T>)
    where
        Fut: Future<Output = store::Result<Vec<T>>>,
    {
        self.state = LoadState::Loading;
        self.records.clear();

        let loaded = load_collection(name, fetch, fallback).await;
        self.records = loaded.records;
        self.state = LoadState::Ready(loaded.origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn fallback() -> Vec<&'static str> {
        vec!["demo-a", "demo-b"]
    }

    #[tokio::test]
    async fn test_live_result_passes_through() {
        let loaded = load_collection("jobs", async { Ok(vec!["live-1"]) }, fallback()).await;
        assert_eq!(loaded.records, vec!["live-1"]);
        assert_eq!(loaded.origin, Origin::Live);
    }

    #[tokio::test]
    async fn test_empty_result_uses_fallback() {
        let loaded = load_collection("jobs", async { Ok(Vec::new()) }, fallback()).await;
        assert_eq!(loaded.records, fallback());
        assert_eq!(loaded.origin, Origin::Demo);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_absorbed() {
        let loaded = load_collection(
            "jobs",
            async { Err(StoreError::Request("connection reset".to_string())) },
            fallback(),
        )
        .await;
        assert_eq!(loaded.records, fallback());
        assert_eq!(loaded.origin, Origin::Demo);
    }

    #[tokio::test]
    async fn test_demo_mutation_never_contacts_store() {
        let live_called = AtomicBool::new(false);
        let result = apply_mutation(
            Origin::Demo,
            || "locally updated",
            || async {
                live_called.store(true, Ordering::SeqCst);
                Ok("store updated")
            },
        )
        .await;
        assert_eq!(result.unwrap(), "locally updated");
        assert!(!live_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_live_mutation_propagates_result() {
        let ok = apply_mutation(Origin::Live, || "unused", || async { Ok("store updated") }).await;
        assert_eq!(ok.unwrap(), "store updated");

        let err = apply_mutation(
            Origin::Live,
            || "unused",
            || async { Err::<&str, _>(StoreError::Permission("no access".to_string())) },
        )
        .await;
        assert!(matches!(err.unwrap_err(), StoreError::Permission(_)));
    }

    #[tokio::test]
    async fn test_view_state_machine() {
        let mut view: CollectionView<&str> = CollectionView::new();
        assert_eq!(view.state(), LoadState::Unloaded);
        assert!(view.origin().is_none());

        view.refresh("jobs", async { Ok(vec!["live-1"]) }, fallback()).await;
        assert_eq!(view.state(), LoadState::Ready(Origin::Live));
        assert_eq!(view.records(), ["live-1"]);

        // Refresh restarts the cycle and can land in the other terminal state.
        view.refresh(
            "jobs",
            async { Err(StoreError::MissingIndex("createdAt".to_string())) },
            fallback(),
        )
        .await;
        assert_eq!(view.state(), LoadState::Ready(Origin::Demo));
        assert_eq!(view.records(), fallback());
        assert_eq!(view.origin(), Some(Origin::Demo));
    }

    #[tokio::test]
    async fn test_local_mutation_of_demo_records() {
        let mut view: CollectionView<String> = CollectionView::new();
        view.refresh(
            "requests",
            async { Ok(Vec::new()) },
            vec!["pending".to_string()],
        )
        .await;

        view.records_mut()[0] = "accepted".to_string();
        assert_eq!(view.records(), ["accepted".to_string()]);
        assert_eq!(view.origin(), Some(Origin::Demo));
    }
}
