use anchor_lang::prelude::*;
use ticket_ledger::{constants::TICKET_SEED, program::TicketLedger, state::Ledger};

use crate::{
    constants::{EVENT_SEED, REGISTRY_SEED},
    events::GuestCheckedIn,
    ledger::LedgerClient,
    state::{Event, Registry},
};

/// Contextual accounts required for a guest to check in.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct CheckIn<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    #[account(mut, address = event.ticket_ledger)]
    pub ticket_ledger: Account<'info, Ledger>,

    /// CHECK: The guest's ticket PDA in the event ledger. May be empty, in
    /// which case check-in fails with `NoValidTicket`.
    #[account(
        mut,
        seeds = [TICKET_SEED, ticket_ledger.key().as_ref(), guest.key().as_ref()],
        bump,
        seeds::program = ticket_program.key(),
    )]
    pub ticket: UncheckedAccount<'info>,

    /// The ticket holder. Must be a signer.
    pub guest: Signer<'info>,

    #[account(address = registry.ticket_program)]
    pub ticket_program: Program<'info, TicketLedger>,
}

impl<'info> CheckIn<'info> {
    fn ticket_book(&self) -> LedgerClient<'info> {
        LedgerClient {
            ticket_program: self.ticket_program.to_account_info(),
            ledger: self.ticket_ledger.to_account_info(),
            authority: self.event.to_account_info(),
            guest: self.guest.to_account_info(),
            ticket: self.ticket.to_account_info(),
            event_id: self.event.id,
            event_bump: self.event.bump,
        }
    }
}

/// Handles the logic for checking the signing guest in.
///
/// Fails before the event start time, when the guest holds no ticket, and
/// when the ticket was already checked in, in that order.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `event_id` - The ID of the event, used for PDA validation.
pub fn check_in_handler(ctx: Context<CheckIn>, event_id: u64) -> Result<()> {
    let clock = Clock::get()?;

    let mut book = ctx.accounts.ticket_book();
    let guest = ctx.accounts.guest.key();
    let ticket_id = ctx
        .accounts
        .event
        .check_in(&mut book, &guest, clock.unix_timestamp)?;

    let attended_guest_count = ctx.accounts.event.attended_guest_count;
    emit!(GuestCheckedIn {
        event_id,
        guest,
        ticket_id,
        attended_guest_count,
    });
    msg!("Guest {} checked in to event {}", guest, event_id);

    Ok(())
}
