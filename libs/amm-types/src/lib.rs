#![no_std]

mod pair;

pub use pair::*;

use soroban_sdk::Address;

/// Share amount permanently locked on the first deposit into a pair.
///
/// Minting these to no holder keeps the share price per unit from being
/// driven to an exploitable near-zero value after a full drain.
pub const MINIMUM_LIQUIDITY: i128 = 1000;

/// Swap fee, expressed as FEE_NUMERATOR / FEE_DENOMINATOR of the input
/// amount. 3/1000 = 0.3%.
pub const FEE_NUMERATOR: i128 = 3;
pub const FEE_DENOMINATOR: i128 = 1000;

/// Canonicalize an unordered token pair into sorted order.
///
/// Both argument orders yield the same result, so one pair of addresses
/// maps to exactly one pool key. Callers must reject identical tokens
/// before canonicalizing.
pub fn token_order(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::Env;

    #[test]
    fn test_token_order_is_order_independent() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        assert_eq!(
            token_order(a.clone(), b.clone()),
            token_order(b.clone(), a.clone())
        );
    }

    #[test]
    fn test_token_order_sorts_ascending() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        let (t0, t1) = token_order(a, b);
        assert!(t0 < t1);
    }
}
