use amm_math::uq64x64;
use amm_types::PairState;
use soroban_sdk::Env;

/// Synchronize cached reserves with observed ledger balances, folding the
/// elapsed interval into the cumulative price integrals first.
///
/// The accumulators always integrate the price implied by the reserves as
/// they stood *before* the current operation, so a trade cannot retroactively
/// tilt the interval it executes in. Skipped while either reserve is zero
/// (no price exists) or no time has passed.
pub fn update_reserves(env: &Env, state: &mut PairState, balance_a: i128, balance_b: i128) {
    let now = env.ledger().timestamp();
    let elapsed = now.saturating_sub(state.last_update_timestamp);

    if elapsed > 0 && state.reserve_a > 0 && state.reserve_b > 0 {
        let price_a = uq64x64::fraction(env, state.reserve_b, state.reserve_a);
        let price_b = uq64x64::fraction(env, state.reserve_a, state.reserve_b);
        state.price_a_cumulative = uq64x64::accumulate(state.price_a_cumulative, price_a, elapsed);
        state.price_b_cumulative = uq64x64::accumulate(state.price_b_cumulative, price_b, elapsed);
    }

    state.reserve_a = balance_a;
    state.reserve_b = balance_b;
    state.last_update_timestamp = now;
}
