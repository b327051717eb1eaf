use soroban_sdk::{Env, U256};

/// One in UQ64.64 fixed point (2^64)
pub const Q64: u128 = 1 << 64;

/// Encode the ratio numerator/denominator as UQ64.64 fixed point,
/// truncated modulo 2^128.
///
/// This is the marginal price fed into the cumulative oracle. The
/// accumulators are wrapping by design: consumers subtract two readings,
/// so a wrapped intermediate value cancels out.
pub fn fraction(env: &Env, numerator: i128, denominator: i128) -> u128 {
    if denominator <= 0 {
        panic!("Division by zero");
    }
    if numerator < 0 {
        panic!("Negative input");
    }

    let scaled = U256::from_u128(env, numerator as u128)
        .mul(&U256::from_u128(env, Q64))
        .div(&U256::from_u128(env, denominator as u128));

    // Keep the low 128 bits; anything above wraps
    let modulus = U256::from_u128(env, u128::MAX).add(&U256::from_u32(env, 1));
    scaled.rem_euclid(&modulus).to_u128().unwrap()
}

/// Advance a cumulative price integral by `price * elapsed`, wrapping.
pub fn accumulate(cumulative: u128, price: u128, elapsed: u64) -> u128 {
    cumulative.wrapping_add(price.wrapping_mul(elapsed as u128))
}
