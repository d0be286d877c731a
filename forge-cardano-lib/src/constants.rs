use cml_chain::Coin;

pub const LOVELACE_PER_ADA: Coin = 1_000_000;

/// Slots added to the current tip when stamping a validity horizon on a plan.
pub const DEFAULT_TTL_BUFFER: u64 = 1_000;

pub const MAX_ASSET_NAME_LEN: usize = 32;
