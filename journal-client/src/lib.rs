//! A client library for interacting with the on-chain journal program.
//!
//! This crate provides the data-access layer a journal UI is built on. It
//! abstracts away the mechanics of blockchain interaction — instruction
//! building, signing, account decoding, request caching — behind a
//! high-level, asynchronous API.
//!
//! # Key Components
//!
//! *   [`client::JournalClient`]: A typed client constructed from a
//!     [`client::Provider`] (RPC handle + wallet + commitment), exposing
//!     account readers and transaction-submitting mutations.
//! *   [`data_access`]: The cached query/mutation surface
//!     ([`data_access::JournalProgram`], [`data_access::JournalEntryHandle`])
//!     that composes the client with the cache and the notification sink.
//! *   [`cache::QueryCache`]: An explicit, cluster-scoped request cache with
//!     read deduplication and explicit invalidation.
//! *   [`notify`]: The channel mutations report their outcomes through.

/// The explicit query cache keyed by (resource, op, cluster, account).
pub mod cache;
/// The typed program client and its provider bundle.
pub mod client;
/// Configuration structures for cluster, connection, wallet, and channels.
pub mod config;
/// The cached query/mutation handles consumed by UIs.
pub mod data_access;
/// Error types for the data-access layer.
pub mod error;
/// The notification sink mutations report to.
pub mod notify;
/// The RPC client abstraction.
pub mod rpc;
