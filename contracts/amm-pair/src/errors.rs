use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    /// A mutating operation was invoked while another was in progress
    Reentrancy = 102,
    InvalidAmount = 103,
    /// Neither token balance grew since the last synchronization
    InsufficientDeposit = 104,
    /// First deposit too small to cover the locked minimum
    InsufficientInitialLiquidity = 105,
    ZeroSharesMinted = 106,
    /// Burn would pay out zero of at least one token
    InsufficientBurnAmount = 107,
    InsufficientOutputAmount = 108,
    /// Requested output would drain a reserve
    InsufficientLiquidity = 109,
    /// No input tokens were supplied for a swap
    InsufficientInputAmount = 110,
    /// Fee-adjusted product fell below the pre-trade product
    ConstantProductViolation = 111,
    /// Swap output may not be sent to one of the pool's tokens
    InvalidRecipient = 112,
    InsufficientShares = 113,
    Overflow = 114,
    /// Tokens equal or not in canonical order at initialization
    InvalidTokenPair = 115,
}
