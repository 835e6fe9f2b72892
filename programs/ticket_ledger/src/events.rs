use anchor_lang::prelude::*;

#[event]
pub struct LedgerProvisioned {
    pub ledger: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
}

#[event]
pub struct TicketIssued {
    pub ledger: Pubkey,
    pub guest: Pubkey,
    pub ticket_id: u64,
}

#[event]
pub struct TicketCheckedIn {
    pub ledger: Pubkey,
    pub guest: Pubkey,
    pub ticket_id: u64,
}
