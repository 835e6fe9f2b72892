pub mod mark_checked_in;
pub mod mint_ticket;
pub mod provision;

pub use mark_checked_in::*;
pub use mint_ticket::*;
pub use provision::*;
