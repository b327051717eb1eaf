use crate::errors::PairError;
use crate::events::PairEvents;
use crate::oracle::update_reserves;
use crate::storage::{get_config, get_state, set_state};
use amm_math::k_holds;
use amm_types::{FEE_DENOMINATOR, FEE_NUMERATOR};
use soroban_sdk::{token, Address, Env};

/// Constant-product swap.
///
/// Callers transfer their input tokens to the pair before invoking. Outputs
/// are sent optimistically *before* the invariant check, so a recipient may
/// use the funds and repay within the same invocation (flash-swap ordering);
/// the fee-adjusted product check at the end is what actually settles the
/// trade.
pub fn execute_swap(
    env: &Env,
    sender: &Address,
    amount_a_out: i128,
    amount_b_out: i128,
    to: &Address,
) -> Result<(), PairError> {
    if amount_a_out < 0 || amount_b_out < 0 {
        return Err(PairError::InvalidAmount);
    }
    if amount_a_out == 0 && amount_b_out == 0 {
        return Err(PairError::InsufficientOutputAmount);
    }

    let config = get_config(env).ok_or(PairError::NotInitialized)?;
    let mut state = get_state(env).ok_or(PairError::NotInitialized)?;

    // A reserve may never be drained to zero
    if amount_a_out >= state.reserve_a || amount_b_out >= state.reserve_b {
        return Err(PairError::InsufficientLiquidity);
    }
    if *to == config.token_a || *to == config.token_b {
        return Err(PairError::InvalidRecipient);
    }

    let contract = env.current_contract_address();
    let token_a = token::Client::new(env, &config.token_a);
    let token_b = token::Client::new(env, &config.token_b);

    // Optimistic transfer of the requested outputs
    if amount_a_out > 0 {
        token_a.transfer(&contract, to, &amount_a_out);
    }
    if amount_b_out > 0 {
        token_b.transfer(&contract, to, &amount_b_out);
    }

    // Back-compute what was actually paid in from the observed balances
    let balance_a = token_a.balance(&contract);
    let balance_b = token_b.balance(&contract);
    let amount_a_in = (balance_a - (state.reserve_a - amount_a_out)).max(0);
    let amount_b_in = (balance_b - (state.reserve_b - amount_b_out)).max(0);

    if amount_a_in == 0 && amount_b_in == 0 {
        return Err(PairError::InsufficientInputAmount);
    }

    // balance_adjusted = balance * FEE_DENOMINATOR - amount_in * FEE_NUMERATOR,
    // the fee deducted from the inputs at full precision
    let balance_a_adj = balance_a
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(PairError::Overflow)?
        .checked_sub(amount_a_in * FEE_NUMERATOR)
        .ok_or(PairError::Overflow)?;
    let balance_b_adj = balance_b
        .checked_mul(FEE_DENOMINATOR)
        .ok_or(PairError::Overflow)?
        .checked_sub(amount_b_in * FEE_NUMERATOR)
        .ok_or(PairError::Overflow)?;

    if !k_holds(env, balance_a_adj, balance_b_adj, state.reserve_a, state.reserve_b) {
        return Err(PairError::ConstantProductViolation);
    }

    update_reserves(env, &mut state, balance_a, balance_b);
    set_state(env, &state);

    PairEvents::swap(
        env,
        sender,
        amount_a_in,
        amount_b_in,
        amount_a_out,
        amount_b_out,
        to,
    );

    Ok(())
}
