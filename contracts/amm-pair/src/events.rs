use soroban_sdk::{Address, Env, Symbol};

/// Event publication for the pair contract.
///
/// One event per successful mutating operation, never on a failed one.
/// Failed invocations roll back, so publishing after all checks is enough.
pub struct PairEvents;

impl PairEvents {
    pub fn mint(env: &Env, sender: &Address, amount_a: i128, amount_b: i128) {
        env.events().publish(
            (Symbol::new(env, "mint"), sender.clone()),
            (amount_a, amount_b),
        );
    }

    pub fn burn(env: &Env, sender: &Address, amount_a: i128, amount_b: i128, to: &Address) {
        env.events().publish(
            (Symbol::new(env, "burn"), sender.clone()),
            (amount_a, amount_b, to.clone()),
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        env: &Env,
        sender: &Address,
        amount_a_in: i128,
        amount_b_in: i128,
        amount_a_out: i128,
        amount_b_out: i128,
        to: &Address,
    ) {
        env.events().publish(
            (Symbol::new(env, "swap"), sender.clone()),
            (amount_a_in, amount_b_in, amount_a_out, amount_b_out, to.clone()),
        );
    }

    pub fn sync(env: &Env, reserve_a: i128, reserve_b: i128) {
        env.events()
            .publish((Symbol::new(env, "sync"),), (reserve_a, reserve_b));
    }
}
