use crate::{
    constants::{DISCRIMINATOR_LENGTH, EVENT_SEED, REGISTRY_SEED},
    events::EventCreated,
    ledger::LedgerFactory,
    state::{Event, EventParams, Registry},
};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenInterface;
use ticket_ledger::program::TicketLedger;

/// Contextual accounts required to create a new event.
#[derive(Accounts)]
pub struct CreateEvent<'info> {
    /// The registry, which assigns the event its id.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The new event account, initialized by this instruction.
    /// The PDA is derived from the next event ID.
    #[account(
        init,
        payer = organizer,
        space = DISCRIMINATOR_LENGTH + Event::INIT_SPACE,
        seeds = [EVENT_SEED, registry.next_event_id.to_be_bytes().as_ref()],
        bump,
    )]
    pub event: Account<'info, Event>,

    /// CHECK: The event's ticket ledger. Initialized and seed-checked by the
    /// ticket ledger program during provisioning.
    #[account(mut)]
    pub ticket_ledger: UncheckedAccount<'info>,

    /// CHECK: The ledger's ticket mint. Initialized and seed-checked by the
    /// ticket ledger program during provisioning.
    #[account(mut)]
    pub ticket_mint: UncheckedAccount<'info>,

    /// The organizer creating the event. Must be a signer.
    #[account(mut)]
    pub organizer: Signer<'info>,

    #[account(address = registry.ticket_program)]
    pub ticket_program: Program<'info, TicketLedger>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateEvent<'info> {
    fn ledger_factory(&self, event_bump: u8) -> LedgerFactory<'info> {
        LedgerFactory {
            ticket_program: self.ticket_program.to_account_info(),
            authority: self.event.to_account_info(),
            payer: self.organizer.to_account_info(),
            ledger: self.ticket_ledger.to_account_info(),
            mint: self.ticket_mint.to_account_info(),
            token_program: self.token_program.to_account_info(),
            system_program: self.system_program.to_account_info(),
            event_id: self.registry.next_event_id,
            event_bump,
        }
    }
}

/// Handles the logic for creating a new event.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `params` - The event details and the labels of its ticket ledger.
///
/// # Returns
///
/// The id assigned to the new event.
pub fn create_event_handler(ctx: Context<CreateEvent>, params: EventParams) -> Result<u64> {
    let event_bump = ctx.bumps.event;
    let factory = ctx.accounts.ledger_factory(event_bump);
    let organizer = ctx.accounts.organizer.key();

    let event_id = ctx.accounts.registry.create_event(
        &mut ctx.accounts.event,
        &factory,
        organizer,
        params,
        event_bump,
    )?;

    let event = &ctx.accounts.event;
    emit!(EventCreated {
        event_id,
        organizer,
        ticket_ledger: event.ticket_ledger,
        title: event.title.clone(),
        start_time: event.start_time,
        end_time: event.end_time,
    });
    msg!("Event {} created: {}", event_id, event.title);

    Ok(event_id)
}
