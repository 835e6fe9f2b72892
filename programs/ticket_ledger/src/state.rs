use anchor_lang::prelude::*;

use crate::{
    constants::{LEDGER_MINT_SEED, LEDGER_SEED, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, TICKET_SEED},
    errors::LedgerError,
};

/// A ticket ledger dedicated to a single event.
///
/// The `authority` is the event that owns the ledger. Only it may issue tickets
/// or mark them as checked in, so the ledger can never be shared between events.
#[account]
#[derive(InitSpace)]
pub struct Ledger {
    pub authority: Pubkey,
    pub mint: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(10)]
    pub symbol: String,
    pub tickets_issued: u64,
    pub tickets_checked_in: u64,
    pub bump: u8,
    pub mint_bump: u8,
}

impl Ledger {
    /// Derives the ledger address owned by `authority`.
    pub fn address(authority: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[LEDGER_SEED, authority.as_ref()], &crate::ID)
    }

    /// Derives the ticket mint address of `ledger`.
    pub fn mint_address(ledger: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[LEDGER_MINT_SEED, ledger.as_ref()], &crate::ID)
    }

    pub fn validate_labels(name: &str, symbol: &str) -> Result<()> {
        require!(!name.is_empty(), LedgerError::NameEmpty);
        require!(name.len() <= MAX_NAME_LENGTH, LedgerError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LENGTH, LedgerError::SymbolTooLong);
        Ok(())
    }

    /// Binds an empty ticket record to `guest` and returns the new ticket id.
    ///
    /// Ticket ids are sequential within the ledger and start at 1. Nothing is
    /// written when the record already belongs to someone.
    pub fn issue(
        &mut self,
        ledger: Pubkey,
        ticket: &mut Ticket,
        guest: Pubkey,
        bump: u8,
    ) -> Result<u64> {
        require!(!ticket.is_issued(), LedgerError::DuplicateOwner);
        let id = self
            .tickets_issued
            .checked_add(1)
            .ok_or(LedgerError::NumericOverflow)?;

        ticket.ledger = ledger;
        ticket.owner = guest;
        ticket.id = id;
        ticket.checked_in = false;
        ticket.bump = bump;
        self.tickets_issued = id;

        Ok(id)
    }

    /// Redeems `ticket` and returns its id.
    pub fn check_in(&mut self, ticket: &mut Ticket) -> Result<u64> {
        let checked_in = self
            .tickets_checked_in
            .checked_add(1)
            .ok_or(LedgerError::NumericOverflow)?;
        ticket.mark_checked_in()?;
        self.tickets_checked_in = checked_in;
        Ok(ticket.id)
    }
}

/// One guest's ticket within a ledger. The PDA is derived from the ledger and
/// the guest, so a guest can hold at most one ticket per ledger.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub id: u64,
    pub checked_in: bool,
    pub bump: u8,
}

impl Ticket {
    /// Derives the ticket address of `guest` within `ledger`.
    pub fn address(ledger: &Pubkey, guest: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[TICKET_SEED, ledger.as_ref(), guest.as_ref()],
            &crate::ID,
        )
    }

    /// Reads the ticket stored in `info`, or `None` while the PDA is still empty.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.data_is_empty() || *info.owner != crate::ID {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        Ok(Some(Self::try_deserialize(&mut &data[..])?))
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    pub fn is_issued(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn is_owned_by(&self, guest: &Pubkey) -> bool {
        self.is_issued() && self.owner == *guest
    }

    /// Flips `checked_in` from false to true. The flag is never reset.
    pub fn mark_checked_in(&mut self) -> Result<()> {
        require!(self.is_issued(), LedgerError::NoTicket);
        require!(!self.checked_in, LedgerError::AlreadyCheckedIn);
        self.checked_in = true;
        Ok(())
    }
}

pub fn owner_has_ticket(ticket: Option<&Ticket>, guest: &Pubkey) -> bool {
    ticket.is_some_and(|ticket| ticket.is_owned_by(guest))
}

/// Number of tickets `guest` holds in a ledger: 1 or 0.
pub fn balance_of(ticket: Option<&Ticket>, guest: &Pubkey) -> u64 {
    u64::from(owner_has_ticket(ticket, guest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DISCRIMINATOR_LENGTH;
    use proptest::prelude::*;

    fn ledger() -> Ledger {
        Ledger {
            authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            name: "SummitTicket".to_string(),
            symbol: "STK".to_string(),
            tickets_issued: 0,
            tickets_checked_in: 0,
            bump: 254,
            mint_bump: 253,
        }
    }

    #[test]
    fn issue_binds_ticket_to_guest() {
        let mut ledger = ledger();
        let ledger_key = Pubkey::new_unique();
        let guest = Pubkey::new_unique();
        let mut ticket = Ticket::default();

        let id = ledger.issue(ledger_key, &mut ticket, guest, 7).unwrap();

        assert_eq!(id, 1);
        assert_eq!(ledger.tickets_issued, 1);
        assert_eq!(ticket.ledger, ledger_key);
        assert_eq!(ticket.owner, guest);
        assert_eq!(ticket.bump, 7);
        assert!(!ticket.checked_in);
        assert!(owner_has_ticket(Some(&ticket), &guest));
        assert_eq!(balance_of(Some(&ticket), &guest), 1);
    }

    #[test]
    fn issue_rejects_duplicate_owner_without_mutation() {
        let mut ledger = ledger();
        let ledger_key = Pubkey::new_unique();
        let guest = Pubkey::new_unique();
        let mut ticket = Ticket::default();
        ledger.issue(ledger_key, &mut ticket, guest, 1).unwrap();
        let before = ticket.clone();

        let err = ledger.issue(ledger_key, &mut ticket, guest, 1).unwrap_err();

        assert_eq!(err, LedgerError::DuplicateOwner.into());
        assert_eq!(ticket, before);
        assert_eq!(ledger.tickets_issued, 1);
    }

    #[test]
    fn ticket_ids_are_sequential() {
        let mut ledger = ledger();
        let ledger_key = Pubkey::new_unique();

        let ids: Vec<u64> = (0..3)
            .map(|_| {
                let mut ticket = Ticket::default();
                ledger
                    .issue(ledger_key, &mut ticket, Pubkey::new_unique(), 0)
                    .unwrap()
            })
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn balance_is_zero_without_ticket() {
        let guest = Pubkey::new_unique();
        let someone_else = Ticket {
            owner: Pubkey::new_unique(),
            id: 1,
            ..Ticket::default()
        };

        assert_eq!(balance_of(None, &guest), 0);
        assert_eq!(balance_of(Some(&Ticket::default()), &guest), 0);
        assert_eq!(balance_of(Some(&someone_else), &guest), 0);
        assert!(!owner_has_ticket(None, &guest));
    }

    #[test]
    fn check_in_requires_a_ticket() {
        let mut ledger = ledger();
        let mut ticket = Ticket::default();

        let err = ledger.check_in(&mut ticket).unwrap_err();

        assert_eq!(err, LedgerError::NoTicket.into());
        assert!(!ticket.checked_in);
        assert_eq!(ledger.tickets_checked_in, 0);
    }

    #[test]
    fn check_in_happens_once() {
        let mut ledger = ledger();
        let mut ticket = Ticket::default();
        ledger
            .issue(Pubkey::new_unique(), &mut ticket, Pubkey::new_unique(), 0)
            .unwrap();

        assert_eq!(ledger.check_in(&mut ticket).unwrap(), 1);
        assert!(ticket.checked_in);

        let err = ledger.check_in(&mut ticket).unwrap_err();
        assert_eq!(err, LedgerError::AlreadyCheckedIn.into());
        assert!(ticket.checked_in);
        assert_eq!(ledger.tickets_checked_in, 1);
    }

    #[test]
    fn labels_are_bounded() {
        assert!(Ledger::validate_labels("ExpoTicket", "ETK").is_ok());
        assert!(Ledger::validate_labels(&"n".repeat(MAX_NAME_LENGTH), "").is_ok());
        assert_eq!(
            Ledger::validate_labels("", "ETK").unwrap_err(),
            LedgerError::NameEmpty.into()
        );
        assert_eq!(
            Ledger::validate_labels(&"n".repeat(MAX_NAME_LENGTH + 1), "ETK").unwrap_err(),
            LedgerError::NameTooLong.into()
        );
        assert_eq!(
            Ledger::validate_labels("ExpoTicket", &"S".repeat(MAX_SYMBOL_LENGTH + 1)).unwrap_err(),
            LedgerError::SymbolTooLong.into()
        );
    }

    #[test]
    fn addresses_are_per_guest_and_per_ledger() {
        let ledger_a = Pubkey::new_unique();
        let ledger_b = Pubkey::new_unique();
        let guest = Pubkey::new_unique();

        assert_ne!(
            Ticket::address(&ledger_a, &guest).0,
            Ticket::address(&ledger_a, &Pubkey::new_unique()).0
        );
        assert_ne!(
            Ticket::address(&ledger_a, &guest).0,
            Ticket::address(&ledger_b, &guest).0
        );
        assert_ne!(Ledger::address(&guest).0, Ledger::mint_address(&guest).0);
    }

    #[test]
    fn load_treats_empty_or_foreign_accounts_as_missing() {
        let key = Pubkey::new_unique();
        let foreign = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = vec![0u8; DISCRIMINATOR_LENGTH + Ticket::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &foreign, false, 0);
        assert_eq!(Ticket::load(&info).unwrap(), None);

        let mut lamports = 0;
        let mut empty = Vec::new();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut empty, &crate::ID, false, 0);
        assert_eq!(Ticket::load(&info).unwrap(), None);
    }

    #[test]
    fn store_then_load_keeps_the_check_in_flag() {
        let key = Pubkey::new_unique();
        let guest = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = vec![0u8; DISCRIMINATOR_LENGTH + Ticket::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);
        let mut ticket = Ticket::default();
        ledger().issue(Pubkey::new_unique(), &mut ticket, guest, 3).unwrap();
        ticket.mark_checked_in().unwrap();

        ticket.store(&info).unwrap();

        assert_eq!(Ticket::load(&info).unwrap(), Some(ticket));
    }

    proptest! {
        #[test]
        fn issued_count_matches_distinct_guests(guests in prop::collection::vec(0u8..8, 1..40)) {
            let mut ledger = ledger();
            let ledger_key = Pubkey::new_unique();
            let keys: Vec<Pubkey> = (0..8).map(|_| Pubkey::new_unique()).collect();
            let mut tickets: Vec<Ticket> = vec![Ticket::default(); 8];

            for guest in &guests {
                let index = usize::from(*guest);
                let _ = ledger.issue(ledger_key, &mut tickets[index], keys[index], 0);
            }

            let mut distinct = guests.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(ledger.tickets_issued, distinct.len() as u64);
            for (ticket, key) in tickets.iter().zip(&keys) {
                prop_assert!(balance_of(Some(ticket), key) <= 1);
            }
        }
    }
}
