use crate::errors::PairError;
use crate::storage::{is_locked, set_locked};
use soroban_sdk::Env;

/// Take the lock, or fail immediately if a mutating operation is already in
/// progress on this pair. A hard abort, never a wait: the danger is a token
/// callback re-entering mid-state-transition.
pub fn acquire(env: &Env) -> Result<(), PairError> {
    if is_locked(env) {
        return Err(PairError::Reentrancy);
    }
    set_locked(env, true);
    Ok(())
}

/// Release the lock. Callers run this on every exit path.
pub fn release(env: &Env) {
    set_locked(env, false);
}
