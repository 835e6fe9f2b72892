use anchor_lang::prelude::*;
use ticket_ledger::program::TicketLedger;

use crate::{
    constants::{DISCRIMINATOR_LENGTH, REGISTRY_SEED},
    state::Registry,
};

/// Contextual accounts required to set up the registry.
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// The registry singleton. Initialization fails if it already exists.
    #[account(
        init,
        payer = authority,
        space = DISCRIMINATOR_LENGTH + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// The ticket ledger program events provision their ledgers through.
    pub ticket_program: Program<'info, TicketLedger>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_registry_handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let ticket_program = ctx.accounts.ticket_program.key();
    ctx.accounts.registry.initialize(
        ctx.accounts.authority.key(),
        ticket_program,
        ctx.bumps.registry,
    );

    msg!("Registry initialized with ticket program {}", ticket_program);

    Ok(())
}
