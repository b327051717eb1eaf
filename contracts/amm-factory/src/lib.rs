#![no_std]

use amm_types::token_order;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env,
    IntoVal, Symbol,
};

#[contract]
pub struct AmmFactory;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// The two tokens of a pair must be distinct
    InvalidTokenPair = 3,
    /// At most one pair per unordered token pair
    PairAlreadyExists = 4,
    IndexOutOfRange = 5,
    /// Privileged operation attempted by a non-admin
    Unauthorized = 6,
}

/// Storage keys for the factory contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Pair WASM hash for deployment
    PairWasmHash,
    /// Protocol fee recipient
    FeeRecipient,
    /// Canonical (token_a, token_b) -> pair address
    Pair(Address, Address),
    /// Total number of pairs created (counter for indexed storage)
    PairCount,
    /// Pair address at index (indexed storage to avoid unbounded Vec)
    PairAt(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

#[contractimpl]
impl AmmFactory {
    /// Initialize factory with admin and pair WASM hash
    pub fn initialize(
        env: Env,
        admin: Address,
        pair_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(FactoryError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::PairWasmHash, &pair_wasm_hash);
        env.storage().instance().set(&DataKey::PairCount, &0u32);

        extend_instance_ttl(&env);
        Ok(())
    }

    /// Create a new pair for a token combination.
    ///
    /// The pair address is derived from the canonical token pair alone, so
    /// the same factory and tokens always yield the same address and it can
    /// be computed before the pair exists. Creation is never silently
    /// idempotent: a second call for the same combination fails, and callers
    /// probe existence with `get_pair`.
    pub fn create_pair(
        env: Env,
        token_x: Address,
        token_y: Address,
        caller: Address,
    ) -> Result<Address, FactoryError> {
        caller.require_auth();

        if token_x == token_y {
            return Err(FactoryError::InvalidTokenPair);
        }
        let (token_a, token_b) = token_order(token_x, token_y);

        let pair_key = DataKey::Pair(token_a.clone(), token_b.clone());
        if env.storage().persistent().has(&pair_key) {
            return Err(FactoryError::PairAlreadyExists);
        }

        let pair_wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::PairWasmHash)
            .ok_or(FactoryError::NotInitialized)?;

        let pair_count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0);

        // Deterministic salt from the canonical token pair
        let mut salt_data = Bytes::new(&env);
        salt_data.append(&token_a.clone().to_xdr(&env));
        salt_data.append(&token_b.clone().to_xdr(&env));
        let salt: BytesN<32> = env.crypto().sha256(&salt_data).to_bytes();

        // Deploy and initialize the pair contract
        let pair_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(pair_wasm_hash, ());
        init_pair(&env, &pair_address, &token_a, &token_b);

        // Store pair address by canonical token pair
        env.storage().persistent().set(&pair_key, &pair_address);
        extend_persistent_ttl(&env, &pair_key);

        // Store pair at index (indexed storage - O(1) append)
        let pair_at_key = DataKey::PairAt(pair_count);
        env.storage().persistent().set(&pair_at_key, &pair_address);
        extend_persistent_ttl(&env, &pair_at_key);

        let pair_count = pair_count + 1;
        env.storage().instance().set(&DataKey::PairCount, &pair_count);

        env.events().publish(
            (Symbol::new(&env, "pair_created"), token_a, token_b),
            (pair_address.clone(), pair_count),
        );

        extend_instance_ttl(&env);
        Ok(pair_address)
    }

    /// Get the pair address for a token combination, in either order
    pub fn get_pair(env: Env, token_x: Address, token_y: Address) -> Option<Address> {
        let (token_a, token_b) = token_order(token_x, token_y);
        env.storage()
            .persistent()
            .get(&DataKey::Pair(token_a, token_b))
    }

    /// Total number of pairs created
    pub fn all_pairs_length(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0)
    }

    /// Pair address at a creation-order index
    pub fn all_pairs(env: Env, index: u32) -> Result<Address, FactoryError> {
        env.storage()
            .persistent()
            .get(&DataKey::PairAt(index))
            .ok_or(FactoryError::IndexOutOfRange)
    }

    /// Set the protocol fee recipient. Admin only.
    pub fn set_fee_recipient(
        env: Env,
        caller: Address,
        recipient: Address,
    ) -> Result<(), FactoryError> {
        caller.require_auth();

        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(FactoryError::NotInitialized)?;
        if caller != admin {
            return Err(FactoryError::Unauthorized);
        }

        env.storage()
            .instance()
            .set(&DataKey::FeeRecipient, &recipient);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Get the protocol fee recipient
    pub fn get_fee_recipient(env: Env) -> Option<Address> {
        extend_instance_ttl(&env);
        env.storage().instance().get(&DataKey::FeeRecipient)
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, FactoryError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(FactoryError::NotInitialized)
    }

    /// Get pair WASM hash
    pub fn get_pair_wasm_hash(env: Env) -> Result<BytesN<32>, FactoryError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PairWasmHash)
            .ok_or(FactoryError::NotInitialized)
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// Pair initialization via invoke
fn init_pair(env: &Env, pair_address: &Address, token_a: &Address, token_b: &Address) {
    env.invoke_contract::<()>(
        pair_address,
        &Symbol::new(env, "initialize"),
        (env.current_contract_address(), token_a, token_b).into_val(env),
    );
}
