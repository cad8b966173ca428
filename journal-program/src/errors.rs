use anchor_lang::prelude::*;

#[error_code]
pub enum JournalError {
    /// Used when the transaction signer does not match the `owner` field of an entry.
    #[msg("Signer is not the owner of this journal entry.")]
    SignerUnauthorized,

    /// Used when a title exceeds the maximum length the account allocates space for.
    #[msg("Title Too Long: The title exceeds the maximum allowed length.")]
    TitleTooLong,

    /// Used when a message exceeds the maximum length the account allocates space for.
    #[msg("Message Too Long: The message exceeds the maximum allowed length.")]
    MessageTooLong,
}
