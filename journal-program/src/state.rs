use crate::errors::JournalError;
use anchor_lang::prelude::*;

// --- Account Data Structs ---

/// A single journal entry, stored as a PDA derived from `[title, owner]`.
///
/// The seed derivation makes `(title, owner)` the unique identity of an entry:
/// re-creating the same pair targets the same address and fails, and a
/// different wallet using the same title lands on a different address.
#[account]
#[derive(InitSpace, Debug)]
pub struct JournalEntry {
    /// The wallet that created this entry and is the only signer allowed
    /// to update or delete it.
    pub owner: Pubkey,

    /// The entry's title. Part of the PDA seeds, so it cannot be changed
    /// after creation; "renaming" an entry means creating a new one.
    #[max_len(50)]
    pub title: String,

    /// The entry's body text. Replaced wholesale by `update_entry`.
    #[max_len(1000)]
    pub message: String,
}

// --- Instruction Accounts Structs ---

/// Defines the accounts required for the `create_entry` instruction.
#[derive(Accounts)]
#[instruction(title: String)]
pub struct CreateEntry<'info> {
    /// The `Signer` (the entry's owner) who pays for the new account.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The new `JournalEntry` account to be initialized. Its address is a PDA
    /// derived from the title and the `owner`'s key. Space is allocated for
    /// the maximum title and message lengths up front.
    #[account(
        init,
        payer = owner,
        space = 8 + JournalEntry::INIT_SPACE,
        seeds = [title.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub journal_entry: Account<'info, JournalEntry>,

    /// The Solana System Program, required by Anchor for account creation (`init`).
    pub system_program: Program<'info, System>,
}

/// Defines the accounts for the `update_entry` instruction.
#[derive(Accounts)]
#[instruction(title: String)]
pub struct UpdateEntry<'info> {
    /// The `Signer` who must be the `owner` recorded in the entry.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The `JournalEntry` to be updated. The seeds bind the address to the
    /// `(title, owner)` pair; the account is reallocated to the maximum entry
    /// size so a longer replacement message always fits.
    #[account(
        mut,
        seeds = [title.as_bytes(), owner.key().as_ref()],
        bump,
        realloc = 8 + JournalEntry::INIT_SPACE,
        realloc::payer = owner,
        realloc::zero = true,
        constraint = journal_entry.owner == owner.key() @ JournalError::SignerUnauthorized
    )]
    pub journal_entry: Account<'info, JournalEntry>,

    /// The System Program, required by Anchor for `realloc`.
    pub system_program: Program<'info, System>,
}

/// Defines the accounts for the `delete_entry` instruction.
#[derive(Accounts)]
#[instruction(title: String)]
pub struct DeleteEntry<'info> {
    /// The `Signer` who must be the `owner` recorded in the entry. Receives
    /// the rent lamports back from the closed account.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The `JournalEntry` account to be closed. The `close` directive tells
    /// Anchor to return all lamports from this account to the `owner`.
    #[account(
        mut,
        close = owner,
        seeds = [title.as_bytes(), owner.key().as_ref()],
        bump,
        constraint = journal_entry.owner == owner.key() @ JournalError::SignerUnauthorized
    )]
    pub journal_entry: Account<'info, JournalEntry>,

    pub system_program: Program<'info, System>,
}
