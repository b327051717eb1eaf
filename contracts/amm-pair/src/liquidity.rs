use crate::errors::PairError;
use crate::events::PairEvents;
use crate::oracle::update_reserves;
use crate::shares;
use crate::storage::{get_config, get_state, set_state};
use amm_math::{mul_div, sqrt};
use amm_types::MINIMUM_LIQUIDITY;
use soroban_sdk::{token, Address, Env};

/// Issue shares for tokens already transferred into the pair.
///
/// Deposits are observed, not declared: the issued amount is derived from
/// the growth of the pair's actual token balances since the last
/// synchronization, which stays correct for fee-on-transfer or rebasing
/// tokens and ignores anything a caller might claim.
pub fn mint(env: &Env, sender: &Address, to: &Address) -> Result<i128, PairError> {
    let config = get_config(env).ok_or(PairError::NotInitialized)?;
    let mut state = get_state(env).ok_or(PairError::NotInitialized)?;
    let contract = env.current_contract_address();

    let balance_a = token::Client::new(env, &config.token_a).balance(&contract);
    let balance_b = token::Client::new(env, &config.token_b).balance(&contract);
    let amount_a = (balance_a - state.reserve_a).max(0);
    let amount_b = (balance_b - state.reserve_b).max(0);

    if amount_a == 0 && amount_b == 0 {
        return Err(PairError::InsufficientDeposit);
    }

    let shares_issued = if state.total_shares == 0 {
        // First deposit (or re-seed after a full drain): geometric mean of
        // the amounts, minus the permanently locked minimum.
        let product = amount_a
            .checked_mul(amount_b)
            .ok_or(PairError::Overflow)?;
        let shares_issued = sqrt(product) - MINIMUM_LIQUIDITY;
        if shares_issued <= 0 {
            return Err(PairError::InsufficientInitialLiquidity);
        }
        state.total_shares = MINIMUM_LIQUIDITY;
        shares_issued
    } else {
        // Floor of the lesser ratio: a disproportionate deposit is never
        // rewarded for its excess, which becomes a donation to holders.
        let by_a = mul_div(env, amount_a, state.total_shares, state.reserve_a);
        let by_b = mul_div(env, amount_b, state.total_shares, state.reserve_b);
        by_a.min(by_b)
    };

    if shares_issued <= 0 {
        return Err(PairError::ZeroSharesMinted);
    }

    shares::credit(env, to, shares_issued)?;
    state.total_shares = state
        .total_shares
        .checked_add(shares_issued)
        .ok_or(PairError::Overflow)?;

    update_reserves(env, &mut state, balance_a, balance_b);
    set_state(env, &state);

    PairEvents::mint(env, sender, amount_a, amount_b);

    Ok(shares_issued)
}

/// Redeem shares the pair itself holds for a proportional slice of both
/// reserves.
///
/// Callers transfer shares into the pair first; burn then consumes the
/// pair's own balance. Payouts use floor division, rounding in favor of the
/// remaining holders.
pub fn burn(env: &Env, sender: &Address, to: &Address) -> Result<(i128, i128), PairError> {
    let config = get_config(env).ok_or(PairError::NotInitialized)?;
    let mut state = get_state(env).ok_or(PairError::NotInitialized)?;
    let contract = env.current_contract_address();

    let shares_to_burn = shares::balance(env, &contract);
    if shares_to_burn == 0 {
        return Err(PairError::InsufficientBurnAmount);
    }

    let amount_a = mul_div(env, shares_to_burn, state.reserve_a, state.total_shares);
    let amount_b = mul_div(env, shares_to_burn, state.reserve_b, state.total_shares);
    if amount_a == 0 || amount_b == 0 {
        return Err(PairError::InsufficientBurnAmount);
    }

    shares::debit(env, &contract, shares_to_burn)?;
    state.total_shares -= shares_to_burn;

    let token_a = token::Client::new(env, &config.token_a);
    let token_b = token::Client::new(env, &config.token_b);
    token_a.transfer(&contract, to, &amount_a);
    token_b.transfer(&contract, to, &amount_b);

    let balance_a = token_a.balance(&contract);
    let balance_b = token_b.balance(&contract);
    update_reserves(env, &mut state, balance_a, balance_b);
    set_state(env, &state);

    PairEvents::burn(env, sender, amount_a, amount_b, to);

    Ok((amount_a, amount_b))
}
