pub mod check_in;
pub mod create_event;
pub mod initialize_registry;
pub mod register_for_event;

pub use check_in::*;
pub use create_event::*;
pub use initialize_registry::*;
pub use register_for_event::*;
