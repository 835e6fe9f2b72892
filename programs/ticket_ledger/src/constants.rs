use anchor_lang::prelude::*;

/// The length of the discriminator for an Anchor account.
pub const DISCRIMINATOR_LENGTH: usize = 8;

/// Longest ticket collection name stored in the ledger and its mint metadata.
pub const MAX_NAME_LENGTH: usize = 32;

/// Longest ticket symbol stored in the ledger and its mint metadata.
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Seed for a ledger PDA, followed by the owning authority's key.
#[constant]
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed for the ledger's ticket mint PDA.
#[constant]
pub const LEDGER_MINT_SEED: &[u8] = b"ledger_mint";

/// Seed for a ticket PDA, followed by the ledger and guest keys.
#[constant]
pub const TICKET_SEED: &[u8] = b"ticket";
