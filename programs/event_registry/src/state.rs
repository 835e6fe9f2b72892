use anchor_lang::prelude::*;
use ticket_ledger::state::Ticket;

use crate::{
    constants::{EVENT_SEED, FIRST_EVENT_ID, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH, REGISTRY_SEED},
    errors::EventError,
    ledger::{LedgerParams, TicketBook, TicketFactory, TicketIssuer, TicketRedeemer},
};

/// The registry singleton. Owns the event id counter and remembers which
/// program ticket ledgers are provisioned through.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Registry {
    pub authority: Pubkey,
    pub ticket_program: Pubkey,
    pub next_event_id: u64,
    pub bump: u8,
}

impl Registry {
    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[REGISTRY_SEED], &crate::ID)
    }

    /// Derives the address of the event with `event_id`.
    pub fn event_address(event_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[EVENT_SEED, event_id.to_be_bytes().as_ref()], &crate::ID)
    }

    pub fn initialize(&mut self, authority: Pubkey, ticket_program: Pubkey, bump: u8) {
        self.authority = authority;
        self.ticket_program = ticket_program;
        self.next_event_id = FIRST_EVENT_ID;
        self.bump = bump;
    }

    pub fn ensure_exists(&self, event_id: u64) -> Result<()> {
        require!(
            event_id >= FIRST_EVENT_ID && event_id < self.next_event_id,
            EventError::EventNotFound
        );
        Ok(())
    }

    /// Validates `params`, provisions the event's ticket ledger through
    /// `factory` and writes the new event into `event`.
    ///
    /// Returns the id assigned to the event. Ids start at 1 and are never
    /// reused. The counter only advances once every step has succeeded.
    pub fn create_event<F: TicketFactory>(
        &mut self,
        event: &mut Event,
        factory: &F,
        organizer: Pubkey,
        params: EventParams,
        bump: u8,
    ) -> Result<u64> {
        params.validate()?;

        let event_id = self.next_event_id;
        let next_event_id = event_id
            .checked_add(1)
            .ok_or(EventError::NumericOverflow)?;

        let ticket_ledger = factory.provision(&LedgerParams {
            name: params.ticket_name,
            symbol: params.ticket_symbol,
        })?;

        *event = Event {
            id: event_id,
            organizer,
            ticket_ledger,
            title: params.title,
            description: params.description,
            start_time: params.start_time,
            end_time: params.end_time,
            ticket_price: params.ticket_price,
            expected_guest_count: params.expected_guest_count,
            registered_guest_count: 0,
            attended_guest_count: 0,
            bump,
        };
        self.next_event_id = next_event_id;

        Ok(event_id)
    }
}

/// Everything an organizer supplies when creating an event.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventParams {
    pub title: String,
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    /// Price of one ticket in lamports. Zero for free events.
    pub ticket_price: u64,
    pub expected_guest_count: u64,
    pub ticket_name: String,
    pub ticket_symbol: String,
}

impl EventParams {
    pub fn validate(&self) -> Result<()> {
        require!(!self.title.is_empty(), EventError::TitleEmpty);
        require!(self.title.len() <= MAX_TITLE_LENGTH, EventError::TitleTooLong);
        require!(
            self.description.len() <= MAX_DESCRIPTION_LENGTH,
            EventError::DescriptionTooLong
        );
        require!(self.end_time > self.start_time, EventError::InvalidEventTime);
        require!(self.expected_guest_count > 0, EventError::InvalidGuestCount);
        Ok(())
    }
}

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Event {
    pub id: u64,
    pub organizer: Pubkey,
    /// The ledger provisioned for this event. Never rebound.
    pub ticket_ledger: Pubkey,
    #[max_len(100)]
    pub title: String,
    #[max_len(500)]
    pub description: String,
    pub start_time: i64,
    pub end_time: i64,
    pub ticket_price: u64,
    /// Capacity hint. Registration is not capped by it.
    pub expected_guest_count: u64,
    pub registered_guest_count: u64,
    pub attended_guest_count: u64,
    pub bump: u8,
}

/// Where a guest stands with respect to one event. Only ever moves forward.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attendance {
    Unregistered,
    Registered,
    CheckedIn,
}

impl Attendance {
    pub fn of(ticket: Option<&Ticket>) -> Self {
        match ticket {
            Some(ticket) if ticket.is_issued() && ticket.checked_in => Self::CheckedIn,
            Some(ticket) if ticket.is_issued() => Self::Registered,
            _ => Self::Unregistered,
        }
    }
}

impl Event {
    pub fn has_started(&self, now: i64) -> bool {
        now >= self.start_time
    }

    pub fn attendance<B: TicketBook>(&self, book: &B, guest: &Pubkey) -> Result<Attendance> {
        Ok(Attendance::of(book.ticket_of(guest)?.as_ref()))
    }

    /// Issues `guest` a ticket from the event's ledger. Returns the ticket id.
    pub fn register<B: TicketIssuer>(&mut self, book: &mut B, guest: &Pubkey) -> Result<u64> {
        require!(
            book.ticket_of(guest)?.is_none(),
            EventError::AlreadyRegistered
        );
        let registered_guest_count = self
            .registered_guest_count
            .checked_add(1)
            .ok_or(EventError::NumericOverflow)?;

        let ticket_id = book.mint(guest)?;
        self.registered_guest_count = registered_guest_count;

        Ok(ticket_id)
    }

    /// Redeems the ticket of `guest` at time `now`. Returns the ticket id.
    ///
    /// Checks run in a fixed order: the event must have started, the guest
    /// must hold a ticket, and the ticket must not be checked in yet.
    pub fn check_in<B: TicketRedeemer>(
        &mut self,
        book: &mut B,
        guest: &Pubkey,
        now: i64,
    ) -> Result<u64> {
        require!(self.has_started(now), EventError::EventNotStarted);
        let ticket = book
            .ticket_of(guest)?
            .filter(|ticket| ticket.is_owned_by(guest))
            .ok_or(EventError::NoValidTicket)?;
        require!(!ticket.checked_in, EventError::AlreadyCheckedIn);
        let attended_guest_count = self
            .attended_guest_count
            .checked_add(1)
            .ok_or(EventError::NumericOverflow)?;

        book.mark_checked_in(guest)?;
        self.attended_guest_count = attended_guest_count;

        Ok(ticket.id)
    }
}
