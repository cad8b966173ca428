//! # Query Cache
//!
//! An explicit request cache for read queries, keyed by
//! `(resource, operation, cluster, account)`.
//!
//! Each slot records the last-fetched value, a status, and the fetch time.
//! Concurrent callers of the same key are deduplicated: exactly one runs the
//! underlying fetch while the rest await and read the freshly cached value.
//! Invalidation is an explicit operation; mutations never touch the cache
//! directly, they invalidate and let the next read refetch.

use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::config::Cluster;
use crate::error::ClientError;
use solana_sdk::pubkey::Pubkey;

/// Identifies one cached query.
///
/// `cluster` scopes every key to the network it was fetched from, so
/// switching clusters can never serve stale cross-cluster data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// The logical resource, e.g. `"journal"`.
    pub resource: &'static str,
    /// The operation on the resource, e.g. `"all"` or `"fetch"`.
    pub op: &'static str,
    /// The name of the cluster the query targets.
    pub cluster: String,
    /// The specific account, for per-account queries.
    pub account: Option<Pubkey>,
}

impl QueryKey {
    /// A key for a program-level query (no specific account).
    pub fn program(resource: &'static str, op: &'static str, cluster: &Cluster) -> Self {
        Self {
            resource,
            op,
            cluster: cluster.to_string(),
            account: None,
        }
    }

    /// A key for a query scoped to one account.
    pub fn account(
        resource: &'static str,
        op: &'static str,
        cluster: &Cluster,
        account: Pubkey,
    ) -> Self {
        Self {
            resource,
            op,
            cluster: cluster.to_string(),
            account: Some(account),
        }
    }
}

/// The lifecycle state of a cache slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    /// A fetch is in flight and no previous value exists.
    Fetching,
    /// The slot holds the last successfully fetched value.
    Ready,
    /// The last fetch failed; the message is kept for UI display. The next
    /// read retries the fetch.
    Error(String),
}

/// One cached query result.
#[derive(Debug, Clone)]
pub struct CacheSlot<V> {
    /// The last successfully fetched value, kept through later errors so UIs
    /// can keep rendering stale-but-valid data.
    pub value: Option<V>,
    pub status: QueryStatus,
    pub updated_at: Instant,
}

impl<V> CacheSlot<V> {
    fn new(value: Option<V>, status: QueryStatus) -> Self {
        Self {
            value,
            status,
            updated_at: Instant::now(),
        }
    }
}

/// A concurrent cache of query results of one value type.
pub struct QueryCache<V> {
    slots: DashMap<QueryKey, CacheSlot<V>>,
    /// Per-key gates serializing concurrent fetches of the same key.
    in_flight: DashMap<QueryKey, Arc<Mutex<()>>>,
}

impl<V: Clone + Send + Sync> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> QueryCache<V> {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            in_flight: DashMap::new(),
        }
    }

    /// Returns the cached value for `key`, running `fetch` if the slot is
    /// vacant, invalidated, or in an error state.
    ///
    /// Concurrent identical-key callers are deduplicated: one runs the fetch,
    /// the others await its completion and read the cached result. A failed
    /// fetch records the error in the slot (preserving any stale value) and
    /// propagates it; waiting callers then retry their own fetch.
    pub async fn get_or_fetch<F, Fut>(&self, key: &QueryKey, fetch: F) -> Result<V, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ClientError>>,
    {
        if let Some(value) = self.peek_ready(key) {
            return Ok(value);
        }

        let gate = self.gate(key);
        let _guard = gate.lock().await;

        // A concurrent caller may have completed the fetch while we waited
        // on the gate.
        if let Some(value) = self.peek_ready(key) {
            return Ok(value);
        }

        self.run_fetch(key, fetch).await
    }

    /// Refetches `key` unconditionally, bypassing the cached value.
    ///
    /// The previous value stays visible (as stale data) while the fetch runs,
    /// and survives a failed fetch alongside the recorded error. This is the
    /// "refetch" half of a mutation's success path.
    pub async fn refresh<F, Fut>(&self, key: &QueryKey, fetch: F) -> Result<V, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ClientError>>,
    {
        let gate = self.gate(key);
        let _guard = gate.lock().await;
        self.run_fetch(key, fetch).await
    }

    fn gate(&self, key: &QueryKey) -> Arc<Mutex<()>> {
        self.in_flight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn run_fetch<F, Fut>(&self, key: &QueryKey, fetch: F) -> Result<V, ClientError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ClientError>>,
    {
        let stale = self.slots.get(key).and_then(|slot| slot.value.clone());
        self.slots.insert(
            key.clone(),
            CacheSlot::new(stale.clone(), QueryStatus::Fetching),
        );

        match fetch().await {
            Ok(value) => {
                self.slots.insert(
                    key.clone(),
                    CacheSlot::new(Some(value.clone()), QueryStatus::Ready),
                );
                Ok(value)
            }
            Err(err) => {
                self.slots.insert(
                    key.clone(),
                    CacheSlot::new(stale, QueryStatus::Error(err.to_string())),
                );
                Err(err)
            }
        }
    }

    /// Non-blocking snapshot of a slot, for UIs that render loading/error
    /// states without triggering a fetch.
    pub fn peek(&self, key: &QueryKey) -> Option<CacheSlot<V>> {
        self.slots.get(key).map(|slot| slot.value().clone())
    }

    fn peek_ready(&self, key: &QueryKey) -> Option<V> {
        let slot = self.slots.get(key)?;
        if slot.value().status == QueryStatus::Ready {
            slot.value().value.clone()
        } else {
            None
        }
    }

    /// Drops the slot for `key`; the next read refetches.
    pub fn invalidate(&self, key: &QueryKey) {
        self.slots.remove(key);
    }

    /// Drops every slot scoped to `cluster`. Called when the application
    /// switches networks.
    pub fn invalidate_cluster(&self, cluster: &Cluster) {
        let cluster = cluster.to_string();
        self.slots.retain(|key, _| key.cluster != cluster);
    }

    /// The number of populated slots, across all states.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key(cluster: &Cluster) -> QueryKey {
        QueryKey::program("journal", "all", cluster)
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let cache = QueryCache::<u64>::new();
        let calls = AtomicUsize::new(0);
        let k = key(&Cluster::Localnet);

        for _ in 0..3 {
            let got = cache
                .get_or_fetch(&k, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await
                .unwrap();
            assert_eq!(got, 7);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let cache = QueryCache::<u64>::new();
        let calls = AtomicUsize::new(0);
        let k = key(&Cluster::Localnet);

        let fetch = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(7)
        };
        cache.get_or_fetch(&k, fetch).await.unwrap();
        cache.invalidate(&k);
        cache.get_or_fetch(&k, fetch).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn error_is_recorded_and_retried_on_next_read() {
        let cache = QueryCache::<u64>::new();
        let k = key(&Cluster::Localnet);

        let err = cache
            .get_or_fetch(&k, || async { Err::<u64, _>(ClientError::NoSigner) })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NoSigner));

        let slot = cache.peek(&k).unwrap();
        assert!(matches!(slot.status, QueryStatus::Error(_)));
        assert!(slot.value.is_none());

        // The error state does not poison the slot: the next read refetches.
        let got = cache.get_or_fetch(&k, || async { Ok(9) }).await.unwrap();
        assert_eq!(got, 9);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_stale_value() {
        let cache = QueryCache::<u64>::new();
        let k = key(&Cluster::Localnet);

        cache.get_or_fetch(&k, || async { Ok(7) }).await.unwrap();

        cache
            .refresh(&k, || async { Err::<u64, _>(ClientError::NoSigner) })
            .await
            .unwrap_err();
        let slot = cache.peek(&k).unwrap();
        assert!(matches!(slot.status, QueryStatus::Error(_)));
        assert_eq!(slot.value, Some(7), "stale value must survive a failed refresh");
    }

    #[tokio::test]
    async fn refresh_replaces_a_ready_value() {
        let cache = QueryCache::<u64>::new();
        let k = key(&Cluster::Localnet);

        cache.get_or_fetch(&k, || async { Ok(7) }).await.unwrap();
        let got = cache.refresh(&k, || async { Ok(8) }).await.unwrap();
        assert_eq!(got, 8);
        assert_eq!(cache.peek(&k).unwrap().value, Some(8));
    }

    #[tokio::test]
    async fn cluster_invalidation_only_touches_its_own_keys() {
        let cache = QueryCache::<u64>::new();
        let devnet = key(&Cluster::Devnet);
        let mainnet = key(&Cluster::MainnetBeta);

        cache.get_or_fetch(&devnet, || async { Ok(1) }).await.unwrap();
        cache.get_or_fetch(&mainnet, || async { Ok(2) }).await.unwrap();
        assert_eq!(cache.len(), 2);

        cache.invalidate_cluster(&Cluster::Devnet);
        assert!(cache.peek(&devnet).is_none());
        assert_eq!(cache.peek(&mainnet).unwrap().value, Some(2));
    }

    #[tokio::test]
    async fn concurrent_identical_reads_run_one_fetch() {
        let cache = Arc::new(QueryCache::<u64>::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let k = key(&Cluster::Localnet);

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                let k = k.clone();
                tokio::spawn(async move {
                    cache
                        .get_or_fetch(&k, || async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            // Hold the slot long enough for the other tasks to pile up.
                            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                            Ok(42)
                        })
                        .await
                        .unwrap()
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
