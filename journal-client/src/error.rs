//! Error types for the client-side data-access layer.

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Errors surfaced by [`JournalClient`](crate::client::JournalClient) and the
/// data-access handles built on top of it.
///
/// Every failure is converted to this type at the query/mutation boundary:
/// reads park the message in the cache slot's error state, mutations forward
/// it to the notification sink. Nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A mutation was attempted without a connected wallet. Raised before any
    /// network traffic happens.
    #[error("no wallet is connected; a signer is required for this operation")]
    NoSigner,

    /// The requested address holds no journal entry. This is the "not found"
    /// outcome of a fetch, distinct from a transport failure.
    #[error("no journal entry exists at address {0}")]
    EntryNotFound(Pubkey),

    /// The account exists but its data did not decode as a `JournalEntry`.
    #[error("failed to decode account data at {address}: {reason}")]
    AccountDecode { address: Pubkey, reason: String },

    /// Any failure reported by the underlying RPC transport, including
    /// on-chain program rejections of a submitted transaction.
    #[error(transparent)]
    Rpc(#[from] solana_client::client_error::ClientError),
}
