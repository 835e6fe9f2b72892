use anchor_lang::prelude::*;

use crate::{
    constants::{LEDGER_SEED, TICKET_SEED},
    errors::LedgerError,
    events::TicketCheckedIn,
    state::{Ledger, Ticket},
};

/// Contextual accounts required to redeem a guest's ticket.
#[derive(Accounts)]
pub struct MarkCheckedIn<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, authority.key().as_ref()],
        bump = ledger.bump,
        has_one = authority @ LedgerError::AuthorityMismatch,
    )]
    pub ledger: Account<'info, Ledger>,

    /// The ledger authority. Must sign.
    pub authority: Signer<'info>,

    /// The ticket holder. Must sign.
    pub guest: Signer<'info>,

    /// CHECK: The guest's ticket PDA. Empty when the guest never registered,
    /// which is reported as `NoTicket`.
    #[account(
        mut,
        seeds = [TICKET_SEED, ledger.key().as_ref(), guest.key().as_ref()],
        bump,
    )]
    pub ticket: UncheckedAccount<'info>,
}

/// Marks the guest's ticket as checked in.
pub fn mark_checked_in_handler(ctx: Context<MarkCheckedIn>) -> Result<()> {
    let guest = ctx.accounts.guest.key();
    let ticket_info = ctx.accounts.ticket.to_account_info();
    let mut ticket = Ticket::load(&ticket_info)?
        .filter(|ticket| ticket.is_owned_by(&guest))
        .ok_or(LedgerError::NoTicket)?;

    let ticket_id = ctx.accounts.ledger.check_in(&mut ticket)?;
    ticket.store(&ticket_info)?;

    emit!(TicketCheckedIn {
        ledger: ctx.accounts.ledger.key(),
        guest,
        ticket_id,
    });
    msg!("Ticket {} checked in", ticket_id);

    Ok(())
}
