use amm_types::FEE_DENOMINATOR;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns floor((a * b) / denominator)
///
/// Inputs must be non-negative; the pair engine only deals in non-negative
/// amounts and reserves.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> i128 {
    if denominator <= 0 {
        panic!("Division by zero");
    }
    if a < 0 || b < 0 {
        panic!("Negative input");
    }

    let a_256 = U256::from_u128(env, a as u128);
    let b_256 = U256::from_u128(env, b as u128);
    let denom_256 = U256::from_u128(env, denominator as u128);

    let result = a_256.mul(&b_256).div(&denom_256);

    i128_from_u256(env, &result)
}

/// Fee-adjusted constant-product check.
///
/// Holds when balance_a_adj * balance_b_adj >= reserve_a * reserve_b * FEE_DENOMINATOR^2,
/// where the adjusted balances are post-trade balances scaled by FEE_DENOMINATOR
/// with the fee already deducted from the inputs. Computed entirely in U256 so
/// large reserves cannot overflow the comparison.
pub fn k_holds(
    env: &Env,
    balance_a_adj: i128,
    balance_b_adj: i128,
    reserve_a: i128,
    reserve_b: i128,
) -> bool {
    let adj_a = U256::from_u128(env, balance_a_adj as u128);
    let adj_b = U256::from_u128(env, balance_b_adj as u128);
    let lhs = adj_a.mul(&adj_b);

    let scale = U256::from_u128(env, (FEE_DENOMINATOR * FEE_DENOMINATOR) as u128);
    let rhs = U256::from_u128(env, reserve_a as u128)
        .mul(&U256::from_u128(env, reserve_b as u128))
        .mul(&scale);

    lhs >= rhs
}

/// Convert U256 to i128, panics if the value does not fit
fn i128_from_u256(env: &Env, value: &U256) -> i128 {
    let max_i128 = U256::from_u128(env, i128::MAX as u128);
    if value.gt(&max_i128) {
        panic!("U256 overflow when converting to i128");
    }
    value.to_u128().unwrap() as i128
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        // (10 * 20) / 5 = 40
        assert_eq!(mul_div(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_large_numbers() {
        let env = Env::default();
        // Intermediate product overflows i128 but the result fits
        let large = 1i128 << 100;
        assert_eq!(mul_div(&env, large, large, large), large);
    }

    #[test]
    fn test_mul_div_max_values() {
        let env = Env::default();
        let max = i128::MAX;
        assert_eq!(mul_div(&env, max, max, max), max);
    }

    #[test]
    fn test_mul_div_zero_numerator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 0, 100, 50), 0);
        assert_eq!(mul_div(&env, 100, 0, 50), 0);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        // 1 * 1 / 2 = 0 (rounds down)
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        // 3 * 1 / 2 = 1 (rounds down from 1.5)
        assert_eq!(mul_div(&env, 3, 1, 2), 1);
        // 5 * 1 / 3 = 1 (rounds down from 1.67)
        assert_eq!(mul_div(&env, 5, 1, 3), 1);
    }

    #[test]
    fn test_mul_div_share_issuance_shape() {
        let env = Env::default();
        // amount * total_shares / reserve, the mint-side ratio
        let amount = 500_000i128;
        let total_shares = 1_000_000_000i128;
        let reserve = 2_000_000i128;
        assert_eq!(mul_div(&env, amount, total_shares, reserve), 250_000_000);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 10, 20, 0);
    }

    #[test]
    #[should_panic(expected = "Negative input")]
    fn test_mul_div_negative_input() {
        let env = Env::default();
        mul_div(&env, -1, 20, 5);
    }

    // === k_holds tests ===

    #[test]
    fn test_k_holds_no_trade() {
        let env = Env::default();
        // Balances equal reserves, no inputs deducted: scaled equality holds
        let r_a = 1_000_000i128;
        let r_b = 4_000_000i128;
        assert!(k_holds(&env, r_a * 1000, r_b * 1000, r_a, r_b));
    }

    #[test]
    fn test_k_holds_fee_surplus() {
        let env = Env::default();
        // A paid-for trade leaves the adjusted product above the old product
        let r_a = 1_000_000i128;
        let r_b = 1_000_000i128;
        // 10_000 in (fee 30 deducted), 9_871 out: k grows
        let bal_a = r_a + 10_000;
        let bal_b = r_b - 9_871;
        let adj_a = bal_a * 1000 - 10_000 * 3;
        let adj_b = bal_b * 1000;
        assert!(k_holds(&env, adj_a, adj_b, r_a, r_b));
    }

    #[test]
    fn test_k_holds_rejects_underpaid_trade() {
        let env = Env::default();
        let r_a = 1_000_000i128;
        let r_b = 1_000_000i128;
        // Output taken with no input supplied
        let bal_a = r_a;
        let bal_b = r_b - 10_000;
        assert!(!k_holds(&env, bal_a * 1000, bal_b * 1000, r_a, r_b));
    }

    #[test]
    fn test_k_holds_large_reserves() {
        let env = Env::default();
        // Products far beyond i128 range must still compare exactly
        let r = 1i128 << 110;
        assert!(k_holds(&env, r * 1000, r * 1000, r, r));
        assert!(!k_holds(&env, r * 1000 - 1, r * 1000, r, r));
    }
}
