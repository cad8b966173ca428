//! # Journal Program Client
//!
//! This module provides the [`JournalClient`], the typed gateway to the
//! on-chain journal program.
//!
//! A client is built from a [`Provider`] (RPC handle + optional wallet +
//! commitment level). Construction is free of side effects and cannot fail;
//! network traffic only happens when a read or mutation method is invoked.
//!
//! ## Features
//!
//! - **Async API**: All methods are `async`.
//! - **RPC Abstraction**: Generic over [`AsyncRpcClient`], so the same code
//!   runs against the live `RpcClient` and an in-memory ledger in tests.
//! - **Reads**: `all` lists every entry the program owns, `fetch` resolves a
//!   single entry by address, `program_account` returns the raw program
//!   account for diagnostic/existence checks.
//! - **Mutations**: `create_entry`, `update_entry` and `delete_entry` build
//!   the Anchor instruction, sign with the provider's wallet, and submit.
//!   Without a wallet they fail with [`ClientError::NoSigner`] before any I/O.

use anchor_lang::{AccountDeserialize, Discriminator, InstructionData, ToAccountMetas};
use journal_program::state::JournalEntry;
use journal_program::{accounts, instruction};
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;

use crate::error::ClientError;
use crate::rpc::AsyncRpcClient;

/// The capability bundle a [`JournalClient`] is constructed from.
///
/// Mirrors what a browser dApp would assemble from its connection and wallet
/// providers, as an explicit struct owned by the composition root.
#[derive(Clone)]
pub struct Provider<C: AsyncRpcClient + ?Sized> {
    /// A shared, thread-safe reference to a Solana JSON RPC client.
    pub rpc_client: Arc<C>,
    /// The signing wallet, if one is connected.
    pub wallet: Option<Arc<Keypair>>,
    /// The consistency level reads and confirmations are performed at.
    pub commitment: CommitmentLevel,
}

impl<C: AsyncRpcClient + ?Sized> Provider<C> {
    /// Creates a provider with the default `Confirmed` commitment.
    pub fn new(rpc_client: Arc<C>, wallet: Option<Arc<Keypair>>) -> Self {
        Self {
            rpc_client,
            wallet,
            commitment: CommitmentLevel::Confirmed,
        }
    }
}

/// Derives the PDA of the entry identified by `(title, owner)`.
pub fn entry_address(title: &str, owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[title.as_bytes(), owner.as_ref()], &journal_program::ID).0
}

/// A typed client for the on-chain journal program.
#[derive(Clone)]
pub struct JournalClient<C: AsyncRpcClient + ?Sized> {
    provider: Provider<C>,
}

impl<C: AsyncRpcClient + ?Sized> JournalClient<C> {
    /// Creates a new `JournalClient`. Performs no I/O and cannot fail.
    pub fn new(provider: Provider<C>) -> Self {
        Self { provider }
    }

    /// The public key of the connected wallet, if any.
    pub fn wallet_pubkey(&self) -> Option<Pubkey> {
        self.provider.wallet.as_ref().map(|w| w.pubkey())
    }

    /// The commitment level this client was configured with.
    pub fn commitment(&self) -> CommitmentLevel {
        self.provider.commitment
    }

    fn signer(&self) -> Result<Arc<Keypair>, ClientError> {
        self.provider.wallet.clone().ok_or(ClientError::NoSigner)
    }

    // --- Reads ---

    /// Fetches every journal entry the program owns, together with its address.
    ///
    /// Accounts whose data does not carry the `JournalEntry` discriminator are
    /// skipped; a discriminator match with a malformed body is an error.
    /// The result is unbounded; there is no pagination.
    pub async fn all(&self) -> Result<Vec<(Pubkey, JournalEntry)>, ClientError> {
        let accounts = self
            .provider
            .rpc_client
            .get_program_accounts(&journal_program::ID)
            .await?;

        let mut entries = Vec::with_capacity(accounts.len());
        for (address, account) in accounts {
            if !account.data.starts_with(JournalEntry::DISCRIMINATOR) {
                continue;
            }
            let entry = JournalEntry::try_deserialize(&mut account.data.as_slice()).map_err(
                |err| ClientError::AccountDecode {
                    address,
                    reason: err.to_string(),
                },
            )?;
            entries.push((address, entry));
        }
        Ok(entries)
    }

    /// Fetches the single entry at `address`.
    ///
    /// A vacant address is reported as [`ClientError::EntryNotFound`] rather
    /// than a transport error, so callers can distinguish "deleted" from
    /// "unreachable".
    pub async fn fetch(&self, address: &Pubkey) -> Result<JournalEntry, ClientError> {
        let account = self
            .provider
            .rpc_client
            .get_account(address)
            .await?
            .ok_or(ClientError::EntryNotFound(*address))?;

        JournalEntry::try_deserialize(&mut account.data.as_slice()).map_err(|err| {
            ClientError::AccountDecode {
                address: *address,
                reason: err.to_string(),
            }
        })
    }

    /// Fetches the raw account metadata of the program itself.
    ///
    /// Used by UIs as an existence check: `None` means the program is not
    /// deployed on the connected cluster.
    pub async fn program_account(&self) -> Result<Option<Account>, ClientError> {
        Ok(self
            .provider
            .rpc_client
            .get_account(&journal_program::ID)
            .await?)
    }

    // --- Mutations ---

    /// Submits a `create_entry` transaction for the connected wallet.
    pub async fn create_entry(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Signature, ClientError> {
        let wallet = self.signer()?;
        let owner = wallet.pubkey();
        let entry_pda = entry_address(title, &owner);

        let ix = Instruction {
            program_id: journal_program::ID,
            accounts: accounts::CreateEntry {
                owner,
                journal_entry: entry_pda,
                system_program: solana_sdk::system_program::id(),
            }
            .to_account_metas(None),
            data: instruction::CreateEntry {
                title: title.to_string(),
                message: message.to_string(),
            }
            .data(),
        };

        self.sign_and_submit(&wallet, ix).await
    }

    /// Submits an `update_entry` transaction.
    ///
    /// The `(title, owner)` pair must match the one the target entry was
    /// created with; a different title targets a different address rather
    /// than renaming the entry.
    pub async fn update_entry(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Signature, ClientError> {
        let wallet = self.signer()?;
        let owner = wallet.pubkey();
        let entry_pda = entry_address(title, &owner);

        let ix = Instruction {
            program_id: journal_program::ID,
            accounts: accounts::UpdateEntry {
                owner,
                journal_entry: entry_pda,
                system_program: solana_sdk::system_program::id(),
            }
            .to_account_metas(None),
            data: instruction::UpdateEntry {
                title: title.to_string(),
                message: message.to_string(),
            }
            .data(),
        };

        self.sign_and_submit(&wallet, ix).await
    }

    /// Submits a `delete_entry` transaction, closing the entry account.
    pub async fn delete_entry(&self, title: &str) -> Result<Signature, ClientError> {
        let wallet = self.signer()?;
        let owner = wallet.pubkey();
        let entry_pda = entry_address(title, &owner);

        let ix = Instruction {
            program_id: journal_program::ID,
            accounts: accounts::DeleteEntry {
                owner,
                journal_entry: entry_pda,
                system_program: solana_sdk::system_program::id(),
            }
            .to_account_metas(None),
            data: instruction::DeleteEntry {
                title: title.to_string(),
            }
            .data(),
        };

        self.sign_and_submit(&wallet, ix).await
    }

    /// Fetches a blockhash, signs the instruction with the wallet, and submits.
    ///
    /// Once submitted, a transaction cannot be retracted; failures after this
    /// point are surfaced to the caller but never retried automatically.
    async fn sign_and_submit(
        &self,
        wallet: &Keypair,
        ix: Instruction,
    ) -> Result<Signature, ClientError> {
        let payer = wallet.pubkey();
        let blockhash = self.provider.rpc_client.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer), &[wallet], blockhash);
        Ok(self
            .provider
            .rpc_client
            .send_and_confirm_transaction(&tx)
            .await?)
    }
}
