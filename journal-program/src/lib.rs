//! # Journal Program
//!
//! The on-chain smart contract backing the journal application.
//!
//! This Anchor program stores short text entries on Solana. Each entry is a PDA
//! owned by the wallet that created it, holding a `title` and a `message`. The
//! address of an entry is derived from its title and its owner's wallet key, so
//! the pair `(title, owner)` uniquely identifies an entry: two wallets can use
//! the same title without colliding, and one wallet cannot create the same
//! title twice.
//!
//! ## Key Concepts
//!
//! - **Entry PDA:** A [`JournalEntry`] account lives at the address derived from
//!   `[title, owner]`. Creating an entry initializes the PDA, updating it
//!   replaces the message in place, and deleting it closes the account and
//!   refunds the rent lamports to the owner.
//! - **Owner-Gated Mutations:** Only the wallet that created an entry can
//!   update or delete it. The seed derivation already binds the address to the
//!   owner's key; explicit constraints reject a mismatched signer.
//! - **Event-Driven Clients:** Every instruction emits an event
//!   ([`EntryCreated`], [`EntryUpdated`], [`EntryDeleted`]) so off-chain
//!   clients can observe state changes without polling account data.
//!
//! ## Modules
//!
//! - [`instructions`]: Contains the business logic for each on-chain instruction.
//! - [`state`]: Defines the entry account and the instruction account contexts.
//! - [`events`]: Declares all on-chain events emitted by the program.
//! - [`errors`]: Defines custom errors for clear and specific failure modes.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
#![allow(elided_lifetimes_in_paths)]

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use errors::*;
use events::*;
use state::*;

declare_id!("DY52aoULZMuua7QNA2ezDrrusCGhHrEq1H6tLn2by4G6");

/// # Journal Program Instruction Interface
///
/// Each public function in this module corresponds to a callable on-chain
/// instruction. The detailed logic lives in the [`instructions`] module.
#[program]
pub mod journal_program {
    use super::*;

    /// Initializes a new `JournalEntry` PDA for the signing wallet.
    /// See [`instructions::create_entry`] for details.
    pub fn create_entry(ctx: Context<CreateEntry>, title: String, message: String) -> Result<()> {
        instructions::create_entry(ctx, title, message)
    }

    /// Replaces the message of an existing `JournalEntry`.
    /// See [`instructions::update_entry`] for details.
    pub fn update_entry(ctx: Context<UpdateEntry>, title: String, message: String) -> Result<()> {
        instructions::update_entry(ctx, title, message)
    }

    /// Closes a `JournalEntry` account and refunds its rent to the owner.
    /// See [`instructions::delete_entry`] for details.
    pub fn delete_entry(ctx: Context<DeleteEntry>, title: String) -> Result<()> {
        instructions::delete_entry(ctx, title)
    }
}
