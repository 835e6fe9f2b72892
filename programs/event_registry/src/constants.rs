use anchor_lang::constant;

pub const DISCRIMINATOR_LENGTH: usize = 8;

pub const MAX_TITLE_LENGTH: usize = 100;

pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Id assigned to the first event of a registry.
pub const FIRST_EVENT_ID: u64 = 1;

#[constant]
pub const REGISTRY_SEED: &[u8] = "registry".as_bytes();

#[constant]
pub const EVENT_SEED: &[u8] = "event".as_bytes();
