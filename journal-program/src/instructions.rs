use super::*;

/// The maximum length in bytes for an entry title.
///
/// Matches the space allocated by `JournalEntry`'s `#[max_len(50)]`. Note that
/// the title is also a PDA seed, and seeds are capped at 32 bytes by the
/// runtime, so titles longer than that fail address derivation before this
/// check runs.
pub const MAX_TITLE_LEN: usize = 50;
/// The maximum length in bytes for an entry message.
/// Matches the space allocated by `JournalEntry`'s `#[max_len(1000)]`.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Initializes a new `JournalEntry` PDA for the signing wallet.
///
/// The entry's address is derived from `[title, owner]`, so creating the same
/// title twice from the same wallet fails at the runtime level with an
/// "account already in use" error before this logic runs.
pub fn create_entry(ctx: Context<CreateEntry>, title: String, message: String) -> Result<()> {
    require!(title.len() <= MAX_TITLE_LEN, JournalError::TitleTooLong);
    require!(
        message.len() <= MAX_MESSAGE_LEN,
        JournalError::MessageTooLong
    );

    let journal_entry = &mut ctx.accounts.journal_entry;
    journal_entry.owner = ctx.accounts.owner.key();
    journal_entry.title = title.clone();
    journal_entry.message = message;

    emit!(EntryCreated {
        owner: journal_entry.owner,
        entry_pda: journal_entry.key(),
        title,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

/// Replaces the message of an existing `JournalEntry`.
///
/// The `title` argument is not written anywhere; it is consumed by the account
/// context to derive and verify the entry's PDA. Passing a different title
/// targets a different address rather than renaming the entry.
pub fn update_entry(ctx: Context<UpdateEntry>, title: String, message: String) -> Result<()> {
    require!(
        message.len() <= MAX_MESSAGE_LEN,
        JournalError::MessageTooLong
    );

    let journal_entry = &mut ctx.accounts.journal_entry;
    journal_entry.message = message;

    emit!(EntryUpdated {
        owner: journal_entry.owner,
        entry_pda: journal_entry.key(),
        title,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

/// Closes a `JournalEntry` account, refunding its rent lamports to the owner.
///
/// Like `update_entry`, the `title` argument only serves PDA derivation in the
/// account context; the `close = owner` directive does the actual work.
pub fn delete_entry(ctx: Context<DeleteEntry>, title: String) -> Result<()> {
    emit!(EntryDeleted {
        owner: ctx.accounts.owner.key(),
        entry_pda: ctx.accounts.journal_entry.key(),
        title,
        ts: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
