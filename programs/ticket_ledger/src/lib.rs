pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use instructions::*;

declare_id!("3w5uNJCYRxZGD4uzr3VJtF1UKj4RJEGuVV8mVzqfj9HW");

#[program]
pub mod ticket_ledger {
    use super::*;

    /// Provisions a new, empty ledger owned by the signing `authority`.
    ///
    /// This instruction initializes the `Ledger` account and a Token-2022 mint
    /// carrying the ticket name and symbol as metadata.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `name` - The ticket collection name.
    /// * `symbol` - The ticket symbol.
    pub fn provision(ctx: Context<Provision>, name: String, symbol: String) -> Result<Pubkey> {
        provision_handler(ctx, name, symbol)
    }

    /// Issues the guest's single ticket in this ledger.
    ///
    /// Creates the guest's `Ticket` record and mints one token to the guest's
    /// associated token account. Fails if the guest already owns a ticket.
    pub fn mint_ticket(ctx: Context<MintTicket>) -> Result<u64> {
        mint_ticket_handler(ctx)
    }

    /// Marks the guest's ticket as checked in. A ticket can be checked in once.
    pub fn mark_checked_in(ctx: Context<MarkCheckedIn>) -> Result<()> {
        mark_checked_in_handler(ctx)
    }
}
