use anchor_lang::prelude::*;

/// Emitted when a new `JournalEntry` PDA is created.
#[event]
#[derive(Debug, Clone)]
pub struct EntryCreated {
    /// The public key of the wallet that created and owns the entry.
    pub owner: Pubkey,
    /// The public key of the `JournalEntry` PDA that was created.
    pub entry_pda: Pubkey,
    /// The entry's title. Together with `owner` it identifies the entry.
    pub title: String,
    /// The Unix timestamp (in seconds) when the entry was created.
    pub ts: i64,
}

/// Emitted when an entry's message is replaced.
#[event]
#[derive(Debug, Clone)]
pub struct EntryUpdated {
    /// The public key of the entry's owner, who authorized the update.
    pub owner: Pubkey,
    /// The public key of the `JournalEntry` PDA that was updated.
    pub entry_pda: Pubkey,
    /// The entry's title, unchanged by the update.
    pub title: String,
    /// The Unix timestamp of the update.
    pub ts: i64,
}

/// Emitted when a `JournalEntry` PDA is closed and its rent refunded.
#[event]
#[derive(Debug, Clone)]
pub struct EntryDeleted {
    /// The public key of the entry's owner, who authorized the deletion.
    pub owner: Pubkey,
    /// The public key of the `JournalEntry` PDA that was closed.
    pub entry_pda: Pubkey,
    /// The title of the deleted entry.
    pub title: String,
    /// The Unix timestamp of the deletion.
    pub ts: i64,
}
