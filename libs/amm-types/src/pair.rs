use soroban_sdk::{contracttype, Address};

/// Pair configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug)]
pub struct PairConfig {
    /// Factory contract address
    pub factory: Address,
    /// Token A address (lower address in canonical order)
    pub token_a: Address,
    /// Token B address (higher address in canonical order)
    pub token_b: Address,
}

/// Current pair state - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug)]
pub struct PairState {
    /// Last-synchronized balance of token A
    pub reserve_a: i128,
    /// Last-synchronized balance of token B
    pub reserve_b: i128,
    /// Total outstanding pool shares, including the locked minimum
    pub total_shares: i128,
    /// Cumulative price of A in B, UQ64.64 * seconds, wrapping
    pub price_a_cumulative: u128,
    /// Cumulative price of B in A, UQ64.64 * seconds, wrapping
    pub price_b_cumulative: u128,
    /// Ledger timestamp of the last reserve synchronization
    pub last_update_timestamp: u64,
}

impl PairState {
    pub fn new(timestamp: u64) -> Self {
        Self {
            reserve_a: 0,
            reserve_b: 0,
            total_shares: 0,
            price_a_cumulative: 0,
            price_b_cumulative: 0,
            last_update_timestamp: timestamp,
        }
    }
}
