use anchor_lang::prelude::*;
use anchor_spl::token_2022::{mint_to, MintTo};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{DISCRIMINATOR_LENGTH, LEDGER_SEED, TICKET_SEED},
    errors::LedgerError,
    events::TicketIssued,
    state::{Ledger, Ticket},
};

/// Contextual accounts required to issue a ticket to a guest.
#[derive(Accounts)]
pub struct MintTicket<'info> {
    /// The ledger issuing the ticket.
    #[account(
        mut,
        seeds = [LEDGER_SEED, authority.key().as_ref()],
        bump = ledger.bump,
        has_one = authority @ LedgerError::AuthorityMismatch,
        has_one = mint,
    )]
    pub ledger: Account<'info, Ledger>,

    /// The ledger authority. Must sign.
    pub authority: Signer<'info>,

    /// The guest receiving the ticket. Pays for the ticket and token accounts.
    #[account(mut)]
    pub guest: Signer<'info>,

    /// The guest's ticket record. An existing record means the guest already
    /// holds a ticket, which `Ledger::issue` rejects.
    #[account(
        init_if_needed,
        payer = guest,
        space = DISCRIMINATOR_LENGTH + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, ledger.key().as_ref(), guest.key().as_ref()],
        bump,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(mut, mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The guest's Associated Token Account (ATA) to receive the ticket token.
    #[account(
        init_if_needed,
        payer = guest,
        associated_token::token_program = token_program,
        associated_token::mint = mint,
        associated_token::authority = guest,
    )]
    pub guest_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Issues one ticket to the guest and mints its token.
///
/// # Returns
///
/// The id of the new ticket.
pub fn mint_ticket_handler(ctx: Context<MintTicket>) -> Result<u64> {
    let ledger_key = ctx.accounts.ledger.key();
    let guest_key = ctx.accounts.guest.key();

    let ticket_id = ctx.accounts.ledger.issue(
        ledger_key,
        &mut ctx.accounts.ticket,
        guest_key,
        ctx.bumps.ticket,
    )?;

    let authority_key = ctx.accounts.authority.key();
    let ledger_signer_seeds = &[
        LEDGER_SEED,
        authority_key.as_ref(),
        &[ctx.accounts.ledger.bump],
    ];
    let signer = &[&ledger_signer_seeds[..]];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.guest_token_account.to_account_info(),
                authority: ctx.accounts.ledger.to_account_info(),
            },
            signer,
        ),
        1,
    )?;

    emit!(TicketIssued {
        ledger: ledger_key,
        guest: guest_key,
        ticket_id,
    });
    msg!("Ticket {} issued to {}", ticket_id, guest_key);

    Ok(ticket_id)
}
