pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

use anchor_lang::prelude::*;

pub use instructions::*;
use state::EventParams;

declare_id!("9iTfUKAVuJjV2Hb94LFjb1uHUcHYLvr2nXrZxiARwDdZ");

#[program]
pub mod event_registry {
    use super::*;

    /// Creates the registry singleton.
    ///
    /// Records the deploying authority and the ticket ledger program that
    /// events provision their ledgers through. The first event gets id 1.
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        initialize_registry_handler(ctx)
    }

    /// Creates a new event.
    ///
    /// This instruction initializes a new `Event` account under the next event
    /// id and provisions a dedicated ticket ledger for it through the ticket
    /// ledger program.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `title` - The title of the event.
    /// * `description` - A description of the event.
    /// * `start_time` - The Unix timestamp for when the event starts.
    /// * `end_time` - The Unix timestamp for when the event ends.
    /// * `ticket_price` - The price of one ticket in lamports. Zero for a free event.
    /// * `expected_guest_count` - How many guests the organizer expects.
    /// * `ticket_name` - The name of the event's ticket collection.
    /// * `ticket_symbol` - The symbol of the event's tickets.
    ///
    /// # Returns
    ///
    /// The id assigned to the new event.
    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        ctx: Context<CreateEvent>,
        title: String,
        description: String,
        start_time: i64,
        end_time: i64,
        ticket_price: u64,
        expected_guest_count: u64,
        ticket_name: String,
        ticket_symbol: String,
    ) -> Result<u64> {
        create_event_handler(
            ctx,
            EventParams {
                title,
                description,
                start_time,
                end_time,
                ticket_price,
                expected_guest_count,
                ticket_name,
                ticket_symbol,
            },
        )
    }

    /// Registers the signing guest for an event.
    ///
    /// Mints the guest's single ticket from the event's ledger.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The ID of the event to register for.
    pub fn register_for_event(ctx: Context<RegisterForEvent>, event_id: u64) -> Result<()> {
        register_for_event_handler(ctx, event_id)
    }

    /// Checks the signing guest in to an event that has started.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The ID of the event to check in to.
    pub fn check_in(ctx: Context<CheckIn>, event_id: u64) -> Result<()> {
        check_in_handler(ctx, event_id)
    }
}
