//! A trait abstracting over the asynchronous RPC client functionality.
//!
//! The [`JournalClient`](crate::client::JournalClient) is generic over this
//! trait, so the same code path serves the live nonblocking `RpcClient` and an
//! in-memory ledger in tests.

use async_trait::async_trait;
use solana_client::{client_error::ClientError as RpcClientError, nonblocking::rpc_client::RpcClient};
use solana_sdk::{
    account::Account, hash::Hash, pubkey::Pubkey, signature::Signature, transaction::Transaction,
};

/// The subset of RPC operations the journal client needs.
#[async_trait]
pub trait AsyncRpcClient: Send + Sync {
    /// Fetches the latest blockhash from the RPC endpoint.
    async fn get_latest_blockhash(&self) -> Result<Hash, RpcClientError>;

    /// Sends and confirms a transaction, waiting for it to reach the
    /// client's commitment level.
    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcClientError>;

    /// Fetches a single account, or `None` when the address holds no account.
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RpcClientError>;

    /// Fetches every account owned by `program_id`.
    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<(Pubkey, Account)>, RpcClientError>;
}

#[async_trait]
impl AsyncRpcClient for RpcClient {
    async fn get_latest_blockhash(&self) -> Result<Hash, RpcClientError> {
        self.get_latest_blockhash().await
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, RpcClientError> {
        self.send_and_confirm_transaction(transaction).await
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RpcClientError> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await?;
        Ok(response.value)
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<(Pubkey, Account)>, RpcClientError> {
        self.get_program_accounts(program_id).await
    }
}
