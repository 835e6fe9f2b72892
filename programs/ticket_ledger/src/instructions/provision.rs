use anchor_lang::prelude::*;
use anchor_lang::solana_program::rent::{
    DEFAULT_EXEMPTION_THRESHOLD, DEFAULT_LAMPORTS_PER_BYTE_YEAR,
};
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token_interface::{
    token_metadata_initialize, Mint, TokenInterface, TokenMetadataInitialize,
};

use spl_token_metadata_interface::state::TokenMetadata;
use spl_type_length_value::variable_len_pack::VariableLenPack;

use crate::{
    constants::{DISCRIMINATOR_LENGTH, LEDGER_MINT_SEED, LEDGER_SEED},
    events::LedgerProvisioned,
    state::Ledger,
};

/// Contextual accounts required to provision a new, empty ledger.
#[derive(Accounts)]
pub struct Provision<'info> {
    /// The account that will own the ledger. In practice this is an event PDA
    /// signing through a cross-program invocation.
    pub authority: Signer<'info>,

    /// Pays for the ledger and mint accounts.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The ledger account, one per authority.
    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_LENGTH + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED, authority.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, Ledger>,

    /// The Token-2022 mint tickets of this ledger are issued from.
    /// It carries the ledger name and symbol as on-mint metadata.
    #[account(
        init,
        payer = payer,
        mint::decimals = 0,
        mint::authority = ledger,
        mint::freeze_authority = ledger,
        mint::token_program = token_program,
        extensions::metadata_pointer::authority = ledger,
        extensions::metadata_pointer::metadata_address = mint,
        seeds = [LEDGER_MINT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Creates an empty ledger and its ticket mint.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `name` - The ticket collection name.
/// * `symbol` - The ticket symbol.
///
/// # Returns
///
/// The address of the new ledger.
pub fn provision_handler(ctx: Context<Provision>, name: String, symbol: String) -> Result<Pubkey> {
    Ledger::validate_labels(&name, &symbol)?;

    let authority_key = ctx.accounts.authority.key();
    let ledger_signer_seeds = &[
        LEDGER_SEED,
        authority_key.as_ref(),
        &[ctx.bumps.ledger],
    ];
    let signer = &[&ledger_signer_seeds[..]];

    // Fund the metadata extension before writing it
    let token_metadata = TokenMetadata {
        name: name.clone(),
        symbol: symbol.clone(),
        ..Default::default()
    };
    let data_len = 4 + token_metadata.get_packed_len()?;
    let lamports =
        data_len as u64 * DEFAULT_LAMPORTS_PER_BYTE_YEAR * DEFAULT_EXEMPTION_THRESHOLD as u64;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.mint.to_account_info(),
            },
        ),
        lamports,
    )?;

    token_metadata_initialize(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TokenMetadataInitialize {
                program_id: ctx.accounts.token_program.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                metadata: ctx.accounts.mint.to_account_info(),
                mint_authority: ctx.accounts.ledger.to_account_info(),
                update_authority: ctx.accounts.ledger.to_account_info(),
            },
            signer,
        ),
        name.clone(),
        symbol.clone(),
        String::new(),
    )?;

    let ledger_key = ctx.accounts.ledger.key();
    let mint_key = ctx.accounts.mint.key();

    let ledger = &mut ctx.accounts.ledger;
    ledger.authority = authority_key;
    ledger.mint = mint_key;
    ledger.name = name.clone();
    ledger.symbol = symbol.clone();
    ledger.tickets_issued = 0;
    ledger.tickets_checked_in = 0;
    ledger.bump = ctx.bumps.ledger;
    ledger.mint_bump = ctx.bumps.mint;

    emit!(LedgerProvisioned {
        ledger: ledger_key,
        authority: authority_key,
        mint: mint_key,
        name,
        symbol,
    });
    msg!("Ledger provisioned: {}", ledger_key);

    Ok(ledger_key)
}
