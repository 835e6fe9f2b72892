use anchor_lang::prelude::*;
use anchor_spl::{associated_token::AssociatedToken, token_interface::TokenInterface};
use ticket_ledger::{constants::TICKET_SEED, program::TicketLedger, state::Ledger};

use crate::{
    constants::{EVENT_SEED, REGISTRY_SEED},
    events::GuestRegistered,
    ledger::{IssuingLedgerClient, LedgerClient},
    state::{Event, Registry},
};

/// Contextual accounts required for a guest to register for an event.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct RegisterForEvent<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// The event being registered for.
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The event's own ticket ledger.
    #[account(mut, address = event.ticket_ledger)]
    pub ticket_ledger: Account<'info, Ledger>,

    /// CHECK: The guest's ticket PDA in the event ledger. Empty unless the
    /// guest already registered; created by the ticket ledger program.
    #[account(
        mut,
        seeds = [TICKET_SEED, ticket_ledger.key().as_ref(), guest.key().as_ref()],
        bump,
        seeds::program = ticket_program.key(),
    )]
    pub ticket: UncheckedAccount<'info>,

    /// CHECK: The ledger's ticket mint, matched against the ledger.
    #[account(mut, address = ticket_ledger.mint)]
    pub ticket_mint: UncheckedAccount<'info>,

    /// CHECK: The guest's associated token account for the ticket mint.
    /// Created and validated by the ticket ledger program.
    #[account(mut)]
    pub guest_token_account: UncheckedAccount<'info>,

    /// The guest registering. Must be a signer.
    #[account(mut)]
    pub guest: Signer<'info>,

    #[account(address = registry.ticket_program)]
    pub ticket_program: Program<'info, TicketLedger>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterForEvent<'info> {
    fn ticket_book(&self) -> IssuingLedgerClient<'info> {
        IssuingLedgerClient {
            client: LedgerClient {
                ticket_program: self.ticket_program.to_account_info(),
                ledger: self.ticket_ledger.to_account_info(),
                authority: self.event.to_account_info(),
                guest: self.guest.to_account_info(),
                ticket: self.ticket.to_account_info(),
                event_id: self.event.id,
                event_bump: self.event.bump,
            },
            mint: self.ticket_mint.to_account_info(),
            guest_token_account: self.guest_token_account.to_account_info(),
            token_program: self.token_program.to_account_info(),
            associated_token_program: self.associated_token_program.to_account_info(),
            system_program: self.system_program.to_account_info(),
        }
    }
}

/// Handles the logic for registering the signing guest for an event.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `event_id` - The ID of the event, used for PDA validation.
pub fn register_for_event_handler(ctx: Context<RegisterForEvent>, event_id: u64) -> Result<()> {
    let mut book = ctx.accounts.ticket_book();
    let guest = ctx.accounts.guest.key();
    let ticket_id = ctx.accounts.event.register(&mut book, &guest)?;

    let registered_guest_count = ctx.accounts.event.registered_guest_count;
    emit!(GuestRegistered {
        event_id,
        guest,
        ticket_id,
        registered_guest_count,
    });
    msg!(
        "Guest {} registered for event {} with ticket {}",
        guest,
        event_id,
        ticket_id
    );

    Ok(())
}
