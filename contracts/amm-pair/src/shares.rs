use crate::errors::PairError;
use crate::storage::{get_shares, set_shares};
use soroban_sdk::{Address, Env};

/// Pool-share bookkeeping.
///
/// The pair is its own share token: balances live in this contract's
/// storage, keyed by holder. The locked MINIMUM_LIQUIDITY is carried in
/// `total_shares` without a holder entry, so it can never be burned.

pub fn balance(env: &Env, holder: &Address) -> i128 {
    get_shares(env, holder)
}

pub fn credit(env: &Env, holder: &Address, amount: i128) -> Result<(), PairError> {
    let balance = get_shares(env, holder)
        .checked_add(amount)
        .ok_or(PairError::Overflow)?;
    set_shares(env, holder, balance);
    Ok(())
}

pub fn debit(env: &Env, holder: &Address, amount: i128) -> Result<(), PairError> {
    let balance = get_shares(env, holder);
    if balance < amount {
        return Err(PairError::InsufficientShares);
    }
    set_shares(env, holder, balance - amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), PairError> {
    if amount <= 0 {
        return Err(PairError::InvalidAmount);
    }
    debit(env, from, amount)?;
    credit(env, to, amount)
}
