use anchor_lang::prelude::*;
#[error_code]
pub enum EventError {
    #[msg("Event title must not be empty")]
    TitleEmpty,
    #[msg("Event title is too long. Max length is 100 characters")]
    TitleTooLong,
    #[msg("Event description is too long. Max length is 500 characters")]
    DescriptionTooLong,

    #[msg("Event end time must be after start time")]
    InvalidEventTime,
    #[msg("Expected guest count must be greater than zero")]
    InvalidGuestCount,

    #[msg("EVENT NOT FOUND")]
    EventNotFound,
    #[msg("ALREADY REGISTERED")]
    AlreadyRegistered,
    #[msg("EVENT HAS NOT STARTED")]
    EventNotStarted,
    #[msg("NO VALID TICKET")]
    NoValidTicket,
    #[msg("ALREADY CHECKED IN")]
    AlreadyCheckedIn,

    #[msg("Ticket account does not belong to the signing guest")]
    GuestMismatch,
    #[msg("Numeric overflow")]
    NumericOverflow,
}
