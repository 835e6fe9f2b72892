use anchor_lang::prelude::*;

#[event]
pub struct EventCreated {
    pub event_id: u64,
    pub organizer: Pubkey,
    pub ticket_ledger: Pubkey,
    pub title: String,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct GuestRegistered {
    pub event_id: u64,
    pub guest: Pubkey,
    pub ticket_id: u64,
    pub registered_guest_count: u64,
}

#[event]
pub struct GuestCheckedIn {
    pub event_id: u64,
    pub guest: Pubkey,
    pub ticket_id: u64,
    pub attended_guest_count: u64,
}
