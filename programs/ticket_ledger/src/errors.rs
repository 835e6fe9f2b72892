use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Ticket name must not be empty")]
    NameEmpty,
    #[msg("Ticket name is too long. Max length is 32 characters")]
    NameTooLong,
    #[msg("Ticket symbol is too long. Max length is 10 characters")]
    SymbolTooLong,

    #[msg("Guest already owns a ticket in this ledger")]
    DuplicateOwner,
    #[msg("Guest does not own a ticket in this ledger")]
    NoTicket,
    #[msg("Ticket has already been checked in")]
    AlreadyCheckedIn,

    #[msg("Signer is not the ledger authority")]
    AuthorityMismatch,
    #[msg("Numeric overflow")]
    NumericOverflow,
}
