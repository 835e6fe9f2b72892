//! The seam between the registry and the per-event ticket ledgers.
//!
//! The registry state machine only talks to ledgers through the traits below.
//! On chain they are implemented by cross-program invocations into the
//! `ticket_ledger` program, signed by the event PDA that owns the ledger.

use anchor_lang::prelude::*;
use ticket_ledger::state::{balance_of, owner_has_ticket, Ticket};

use crate::{constants::EVENT_SEED, errors::EventError};

/// Labels a new ledger is provisioned with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerParams {
    pub name: String,
    pub symbol: String,
}

/// Creates a fresh, empty ticket ledger and returns its address.
pub trait TicketFactory {
    fn provision(&self, params: &LedgerParams) -> Result<Pubkey>;
}

/// Read access to one event's ticket ledger.
pub trait TicketBook {
    /// The ticket held by `guest`, if any.
    fn ticket_of(&self, guest: &Pubkey) -> Result<Option<Ticket>>;

    fn owner_has_ticket(&self, guest: &Pubkey) -> Result<bool> {
        Ok(owner_has_ticket(self.ticket_of(guest)?.as_ref(), guest))
    }

    fn balance_of(&self, guest: &Pubkey) -> Result<u64> {
        Ok(balance_of(self.ticket_of(guest)?.as_ref(), guest))
    }
}

/// A ledger that can issue tickets.
pub trait TicketIssuer: TicketBook {
    /// Mints the single ticket of `guest` and returns its id.
    fn mint(&mut self, guest: &Pubkey) -> Result<u64>;
}

/// A ledger that can redeem tickets.
pub trait TicketRedeemer: TicketBook {
    fn mark_checked_in(&mut self, guest: &Pubkey) -> Result<()>;
}

/// Signer seeds of an event PDA.
struct EventSigner {
    id: [u8; 8],
    bump: [u8; 1],
}

impl EventSigner {
    fn new(event_id: u64, bump: u8) -> Self {
        Self {
            id: event_id.to_be_bytes(),
            bump: [bump],
        }
    }

    fn seeds(&self) -> [&[u8]; 3] {
        [EVENT_SEED, &self.id, &self.bump]
    }
}

/// Provisions ledgers through the `ticket_ledger` program.
pub struct LedgerFactory<'info> {
    pub ticket_program: AccountInfo<'info>,
    /// The event PDA that will own the ledger.
    pub authority: AccountInfo<'info>,
    pub payer: AccountInfo<'info>,
    pub ledger: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    pub event_id: u64,
    pub event_bump: u8,
}

impl<'info> TicketFactory for LedgerFactory<'info> {
    fn provision(&self, params: &LedgerParams) -> Result<Pubkey> {
        let event_signer = EventSigner::new(self.event_id, self.event_bump);
        let seeds = event_signer.seeds();
        let signer = &[&seeds[..]];

        let ledger = ticket_ledger::cpi::provision(
            CpiContext::new_with_signer(
                self.ticket_program.clone(),
                ticket_ledger::cpi::accounts::Provision {
                    authority: self.authority.clone(),
                    payer: self.payer.clone(),
                    ledger: self.ledger.clone(),
                    mint: self.mint.clone(),
                    token_program: self.token_program.clone(),
                    system_program: self.system_program.clone(),
                },
                signer,
            ),
            params.name.clone(),
            params.symbol.clone(),
        )?;

        Ok(ledger.get())
    }
}

/// One guest's view of an event ledger, backed by the `ticket_ledger` program.
pub struct LedgerClient<'info> {
    pub ticket_program: AccountInfo<'info>,
    pub ledger: AccountInfo<'info>,
    /// The event PDA owning the ledger.
    pub authority: AccountInfo<'info>,
    pub guest: AccountInfo<'info>,
    /// The guest's ticket PDA. Empty until the guest registers.
    pub ticket: AccountInfo<'info>,
    pub event_id: u64,
    pub event_bump: u8,
}

impl<'info> TicketBook for LedgerClient<'info> {
    fn ticket_of(&self, guest: &Pubkey) -> Result<Option<Ticket>> {
        require_keys_eq!(*guest, self.guest.key(), EventError::GuestMismatch);
        Ticket::load(&self.ticket)
    }
}

impl<'info> TicketRedeemer for LedgerClient<'info> {
    fn mark_checked_in(&mut self, guest: &Pubkey) -> Result<()> {
        require_keys_eq!(*guest, self.guest.key(), EventError::GuestMismatch);
        let event_signer = EventSigner::new(self.event_id, self.event_bump);
        let seeds = event_signer.seeds();
        let signer = &[&seeds[..]];

        ticket_ledger::cpi::mark_checked_in(CpiContext::new_with_signer(
            self.ticket_program.clone(),
            ticket_ledger::cpi::accounts::MarkCheckedIn {
                ledger: self.ledger.clone(),
                authority: self.authority.clone(),
                guest: self.guest.clone(),
                ticket: self.ticket.clone(),
            },
            signer,
        ))
    }
}

/// A [`LedgerClient`] carrying the extra accounts needed to mint.
pub struct IssuingLedgerClient<'info> {
    pub client: LedgerClient<'info>,
    pub mint: AccountInfo<'info>,
    pub guest_token_account: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub associated_token_program: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
}

impl<'info> TicketBook for IssuingLedgerClient<'info> {
    fn ticket_of(&self, guest: &Pubkey) -> Result<Option<Ticket>> {
        self.client.ticket_of(guest)
    }
}

impl<'info> TicketIssuer for IssuingLedgerClient<'info> {
    fn mint(&mut self, guest: &Pubkey) -> Result<u64> {
        let client = &self.client;
        require_keys_eq!(*guest, client.guest.key(), EventError::GuestMismatch);
        let event_signer = EventSigner::new(client.event_id, client.event_bump);
        let seeds = event_signer.seeds();
        let signer = &[&seeds[..]];

        let ticket_id = ticket_ledger::cpi::mint_ticket(CpiContext::new_with_signer(
            client.ticket_program.clone(),
            ticket_ledger::cpi::accounts::MintTicket {
                ledger: client.ledger.clone(),
                authority: client.authority.clone(),
                guest: client.guest.clone(),
                ticket: client.ticket.clone(),
                mint: self.mint.clone(),
                guest_token_account: self.guest_token_account.clone(),
                token_program: self.token_program.clone(),
                associated_token_program: self.associated_token_program.clone(),
                system_program: self.system_program.clone(),
            },
            signer,
        ))?;

        Ok(ticket_id.get())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-process ledgers running the same `ticket_ledger` state logic.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use anchor_lang::prelude::*;
    use ticket_ledger::{
        errors::LedgerError,
        state::{Ledger, Ticket},
    };

    use super::{LedgerParams, TicketBook, TicketFactory, TicketIssuer, TicketRedeemer};

    pub struct MemoryLedger {
        pub key: Pubkey,
        pub ledger: Ledger,
        pub tickets: HashMap<Pubkey, Ticket>,
    }

    impl MemoryLedger {
        pub fn new(key: Pubkey, params: &LedgerParams) -> Self {
            Self {
                key,
                ledger: Ledger {
                    authority: Pubkey::default(),
                    mint: Pubkey::new_unique(),
                    name: params.name.clone(),
                    symbol: params.symbol.clone(),
                    tickets_issued: 0,
                    tickets_checked_in: 0,
                    bump: 0,
                    mint_bump: 0,
                },
                tickets: HashMap::new(),
            }
        }
    }

    impl TicketBook for MemoryLedger {
        fn ticket_of(&self, guest: &Pubkey) -> Result<Option<Ticket>> {
            Ok(self.tickets.get(guest).cloned())
        }
    }

    impl TicketIssuer for MemoryLedger {
        fn mint(&mut self, guest: &Pubkey) -> Result<u64> {
            let mut ticket = self.tickets.get(guest).cloned().unwrap_or_default();
            let id = self.ledger.issue(self.key, &mut ticket, *guest, 0)?;
            self.tickets.insert(*guest, ticket);
            Ok(id)
        }
    }

    impl TicketRedeemer for MemoryLedger {
        fn mark_checked_in(&mut self, guest: &Pubkey) -> Result<()> {
            let ticket = self.tickets.get_mut(guest).ok_or(LedgerError::NoTicket)?;
            self.ledger.check_in(ticket)?;
            Ok(())
        }
    }

    /// Provisions [`MemoryLedger`]s and keeps them by address.
    #[derive(Default)]
    pub struct MemoryFactory {
        pub ledgers: RefCell<HashMap<Pubkey, MemoryLedger>>,
    }

    impl TicketFactory for MemoryFactory {
        fn provision(&self, params: &LedgerParams) -> Result<Pubkey> {
            Ledger::validate_labels(&params.name, &params.symbol)?;
            let key = Pubkey::new_unique();
            self.ledgers
                .borrow_mut()
                .insert(key, MemoryLedger::new(key, params));
            Ok(key)
        }
    }
}
