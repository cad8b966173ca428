//! # Data-Access Handles
//!
//! The query/mutation surface the UI consumes, composing the
//! [`JournalClient`] with the [`QueryCache`] and the notification sink.
//!
//! Two levels mirror the shape of the application:
//!
//! - [`JournalProgram`]: program-level operations — list every entry, check
//!   the program account, create a new entry.
//! - [`JournalEntryHandle`]: operations on one specific entry address —
//!   fetch, update, delete.
//!
//! Reads go through the cache; mutations are confirm-then-refetch. A
//! successful mutation notifies with the transaction signature, invalidates
//! the affected keys, and refetches the entry list. A failed mutation only
//! notifies; cached data stays untouched (stale-but-valid). All mutations
//! share one invalidation contract: the list key plus the entry's fetch key.

use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::sync::Arc;

use journal_program::state::JournalEntry;

use crate::cache::{QueryCache, QueryKey};
use crate::client::JournalClient;
use crate::config::Cluster;
use crate::error::ClientError;
use crate::notify::NotifierHandle;
use crate::rpc::AsyncRpcClient;

/// The logical resource name all journal query keys share.
const RESOURCE: &str = "journal";

/// A journal entry paired with the address it lives at.
#[derive(Debug, Clone)]
pub struct EntryAccount {
    pub address: Pubkey,
    pub entry: JournalEntry,
}

/// The query caches backing the data-access layer, one per value type.
///
/// Owned by the application's composition root and shared across every
/// [`JournalProgram`] built from it, so a cluster switch can invalidate the
/// old cluster's slots in one place.
#[derive(Default)]
pub struct JournalCaches {
    pub entries: QueryCache<Vec<EntryAccount>>,
    pub entry: QueryCache<JournalEntry>,
    pub program_meta: QueryCache<Option<Account>>,
}

impl JournalCaches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every cached result scoped to `cluster`.
    pub fn invalidate_cluster(&self, cluster: &Cluster) {
        self.entries.invalidate_cluster(cluster);
        self.entry.invalidate_cluster(cluster);
        self.program_meta.invalidate_cluster(cluster);
    }
}

/// Program-level data access: list, program metadata, create.
pub struct JournalProgram<C: AsyncRpcClient + ?Sized> {
    client: Arc<JournalClient<C>>,
    cluster: Cluster,
    caches: Arc<JournalCaches>,
    notifier: NotifierHandle,
}

// Manual impl: `derive(Clone)` would demand `C: Clone`, which a trait object
// cannot satisfy.
impl<C: AsyncRpcClient + ?Sized> Clone for JournalProgram<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            cluster: self.cluster.clone(),
            caches: self.caches.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<C: AsyncRpcClient + ?Sized> JournalProgram<C> {
    pub fn new(
        client: Arc<JournalClient<C>>,
        cluster: Cluster,
        caches: Arc<JournalCaches>,
        notifier: NotifierHandle,
    ) -> Self {
        Self {
            client,
            cluster,
            caches,
            notifier,
        }
    }

    /// The underlying typed program client.
    pub fn client(&self) -> &JournalClient<C> {
        &self.client
    }

    /// The cluster this handle is scoped to.
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    fn list_key(&self) -> QueryKey {
        QueryKey::program(RESOURCE, "all", &self.cluster)
    }

    fn program_account_key(&self) -> QueryKey {
        QueryKey::program(RESOURCE, "get-program-account", &self.cluster)
    }

    /// Lists every journal entry, served from the cache when warm.
    ///
    /// The result is unbounded; there is no pagination.
    pub async fn list_all(&self) -> Result<Vec<EntryAccount>, ClientError> {
        let client = self.client.clone();
        self.caches
            .entries
            .get_or_fetch(&self.list_key(), || async move {
                let accounts = client.all().await?;
                Ok(accounts
                    .into_iter()
                    .map(|(address, entry)| EntryAccount { address, entry })
                    .collect())
            })
            .await
    }

    /// Returns the raw program account, or `None` when the program is not
    /// deployed on this cluster. Cached like any other read.
    pub async fn program_account(&self) -> Result<Option<Account>, ClientError> {
        let client = self.client.clone();
        self.caches
            .program_meta
            .get_or_fetch(&self.program_account_key(), || async move {
                client.program_account().await
            })
            .await
    }

    /// Creates a new entry owned by the connected wallet.
    ///
    /// Success notifies with the signature and refetches the list so the new
    /// entry appears. Failure notifies with the error message and leaves the
    /// cache untouched.
    pub async fn create_entry(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Signature, ClientError> {
        match self.client.create_entry(title, message).await {
            Ok(signature) => {
                self.notifier.notify_confirmed(signature).await;
                self.refetch_list().await;
                Ok(signature)
            }
            Err(err) => {
                self.notifier
                    .notify_error(format!("Error creating journal entry: {err}"))
                    .await;
                Err(err)
            }
        }
    }

    /// Builds a handle for the entry at `address`.
    pub fn entry(&self, address: Pubkey) -> JournalEntryHandle<C> {
        JournalEntryHandle {
            program: self.clone(),
            address,
        }
    }

    /// Refetches the entry list in place. A failed refetch parks the error in
    /// the cache slot (keeping stale data visible) for the next reader.
    async fn refetch_list(&self) {
        let client = self.client.clone();
        let refreshed = self
            .caches
            .entries
            .refresh(&self.list_key(), || async move {
                let accounts = client.all().await?;
                Ok(accounts
                    .into_iter()
                    .map(|(address, entry)| EntryAccount { address, entry })
                    .collect())
            })
            .await;
        if let Err(err) = refreshed {
            tracing::warn!(%err, "Failed to refetch entry list after mutation");
        }
    }
}

/// Entry-level data access, parameterized by one entry's address.
pub struct JournalEntryHandle<C: AsyncRpcClient + ?Sized> {
    program: JournalProgram<C>,
    address: Pubkey,
}

impl<C: AsyncRpcClient + ?Sized> JournalEntryHandle<C> {
    /// The address this handle operates on.
    pub fn address(&self) -> Pubkey {
        self.address
    }

    fn fetch_key(&self) -> QueryKey {
        QueryKey::account(RESOURCE, "fetch", &self.program.cluster, self.address)
    }

    /// Fetches this entry, served from the cache when warm.
    ///
    /// A vacant address yields [`ClientError::EntryNotFound`], recorded in
    /// the slot's error state, not a panic.
    pub async fn fetch_one(&self) -> Result<JournalEntry, ClientError> {
        let client = self.program.client.clone();
        let address = self.address;
        self.program
            .caches
            .entry
            .get_or_fetch(&self.fetch_key(), || async move {
                client.fetch(&address).await
            })
            .await
    }

    /// Replaces this entry's message.
    ///
    /// `title` must be the one the entry was created with; a different title
    /// derives a different address and will not rename this entry.
    pub async fn update_entry(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Signature, ClientError> {
        match self.program.client.update_entry(title, message).await {
            Ok(signature) => {
                self.program.notifier.notify_confirmed(signature).await;
                self.invalidate_and_refetch().await;
                Ok(signature)
            }
            Err(err) => {
                self.program
                    .notifier
                    .notify_error(format!("Failed to update journal entry: {err}"))
                    .await;
                Err(err)
            }
        }
    }

    /// Deletes the entry with this title owned by the connected wallet.
    pub async fn delete_entry(&self, title: &str) -> Result<Signature, ClientError> {
        match self.program.client.delete_entry(title).await {
            Ok(signature) => {
                self.program.notifier.notify_confirmed(signature).await;
                self.invalidate_and_refetch().await;
                Ok(signature)
            }
            Err(err) => {
                self.program
                    .notifier
                    .notify_error(format!("Failed to delete journal entry: {err}"))
                    .await;
                Err(err)
            }
        }
    }

    /// The single invalidation contract every entry mutation follows: drop
    /// this entry's cached fetch, then refetch the program-level list.
    async fn invalidate_and_refetch(&self) {
        self.program.caches.entry.invalidate(&self.fetch_key());
        self.program.refetch_list().await;
    }
}
