#![no_std]

mod errors;
mod events;
mod liquidity;
mod oracle;
mod reentrancy;
mod shares;
mod storage;
mod swap;


use amm_types::{PairConfig, PairState};
use errors::PairError;
use events::PairEvents;
use soroban_sdk::{contract, contractimpl, token, Address, Env};
use storage::{get_config, get_state, set_config, set_state};

#[contract]
pub struct Pair;

#[contractimpl]
impl Pair {
    /// Initialize a freshly deployed pair. Called once by the factory.
    ///
    /// Tokens must arrive in canonical (ascending) order; the factory sorts
    /// before deploying, and direct callers get the same requirement.
    pub fn initialize(
        env: Env,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<(), PairError> {
        if get_config(&env).is_some() {
            return Err(PairError::AlreadyInitialized);
        }
        if token_a >= token_b {
            return Err(PairError::InvalidTokenPair);
        }

        set_config(
            &env,
            &PairConfig {
                factory,
                token_a,
                token_b,
            },
        );
        set_state(&env, &PairState::new(env.ledger().timestamp()));
        Ok(())
    }

    /// Issue pool shares for tokens transferred in since the last sync.
    ///
    /// Deposit-then-notify: transfer both tokens to the pair first, then
    /// call mint. `sender` authenticates and is published in the event;
    /// shares are credited to `to`.
    pub fn mint(env: Env, sender: Address, to: Address) -> Result<i128, PairError> {
        sender.require_auth();
        reentrancy::acquire(&env)?;
        let result = liquidity::mint(&env, &sender, &to);
        reentrancy::release(&env);
        result
    }

    /// Redeem the shares this pair currently holds of itself.
    ///
    /// Transfer shares to the pair with `transfer_shares` first, then call
    /// burn. Returns the token amounts paid out to `to`.
    pub fn burn(env: Env, sender: Address, to: Address) -> Result<(i128, i128), PairError> {
        sender.require_auth();
        reentrancy::acquire(&env)?;
        let result = liquidity::burn(&env, &sender, &to);
        reentrancy::release(&env);
        result
    }

    /// Swap one token for the other at the constant-product price.
    ///
    /// # Arguments
    /// * `sender`       - authenticated invoker, published in the event
    /// * `amount_a_out` - amount of token A to send out (0 if swapping A in)
    /// * `amount_b_out` - amount of token B to send out (0 if swapping B in)
    /// * `to`           - recipient of the output tokens
    pub fn swap(
        env: Env,
        sender: Address,
        amount_a_out: i128,
        amount_b_out: i128,
        to: Address,
    ) -> Result<(), PairError> {
        sender.require_auth();
        reentrancy::acquire(&env)?;
        let result = swap::execute_swap(&env, &sender, amount_a_out, amount_b_out, &to);
        reentrancy::release(&env);
        result
    }

    /// Transfer any token balance in excess of the reserves to `to`.
    pub fn skim(env: Env, to: Address) -> Result<(), PairError> {
        reentrancy::acquire(&env)?;
        let result = Self::skim_inner(&env, &to);
        reentrancy::release(&env);
        result
    }

    /// Force the reserves to match the actual token balances.
    pub fn sync(env: Env) -> Result<(), PairError> {
        reentrancy::acquire(&env)?;
        let result = Self::sync_inner(&env);
        reentrancy::release(&env);
        result
    }

    // === Share token surface ===

    /// Share balance of a holder
    pub fn balance_of(env: Env, holder: Address) -> i128 {
        shares::balance(&env, &holder)
    }

    /// Total outstanding shares, including the permanently locked minimum
    pub fn total_shares(env: Env) -> Result<i128, PairError> {
        let state = get_state(&env).ok_or(PairError::NotInitialized)?;
        Ok(state.total_shares)
    }

    /// Move shares between holders. Used to place shares into the pair
    /// ahead of a burn.
    pub fn transfer_shares(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PairError> {
        from.require_auth();
        shares::transfer(&env, &from, &to, amount)
    }

    // === View Functions ===

    /// Get reserves and the timestamp of the last synchronization
    pub fn get_reserves(env: Env) -> Result<(i128, i128, u64), PairError> {
        let state = get_state(&env).ok_or(PairError::NotInitialized)?;
        Ok((
            state.reserve_a,
            state.reserve_b,
            state.last_update_timestamp,
        ))
    }

    /// Get pair configuration
    pub fn get_config(env: Env) -> Result<PairConfig, PairError> {
        get_config(&env).ok_or(PairError::NotInitialized)
    }

    /// Cumulative price integrals (A in B, B in A), UQ64.64 * seconds
    pub fn price_cumulatives(env: Env) -> Result<(u128, u128), PairError> {
        let state = get_state(&env).ok_or(PairError::NotInitialized)?;
        Ok((state.price_a_cumulative, state.price_b_cumulative))
    }

    // === Internals ===

    fn skim_inner(env: &Env, to: &Address) -> Result<(), PairError> {
        let config = get_config(env).ok_or(PairError::NotInitialized)?;
        let state = get_state(env).ok_or(PairError::NotInitialized)?;
        let contract = env.current_contract_address();

        let token_a = token::Client::new(env, &config.token_a);
        let token_b = token::Client::new(env, &config.token_b);

        let excess_a = token_a.balance(&contract) - state.reserve_a;
        let excess_b = token_b.balance(&contract) - state.reserve_b;
        if excess_a > 0 {
            token_a.transfer(&contract, to, &excess_a);
        }
        if excess_b > 0 {
            token_b.transfer(&contract, to, &excess_b);
        }
        Ok(())
    }

    fn sync_inner(env: &Env) -> Result<(), PairError> {
        let config = get_config(env).ok_or(PairError::NotInitialized)?;
        let mut state = get_state(env).ok_or(PairError::NotInitialized)?;
        let contract = env.current_contract_address();

        let balance_a = token::Client::new(env, &config.token_a).balance(&contract);
        let balance_b = token::Client::new(env, &config.token_b).balance(&contract);
        oracle::update_reserves(env, &mut state, balance_a, balance_b);
        set_state(env, &state);

        PairEvents::sync(env, balance_a, balance_b);
        Ok(())
    }
}
