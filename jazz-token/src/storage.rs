use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, String, Symbol, TryFromVal,
    Val,
};

use crate::constants::{
    LEDGER_BUMP_SHARED, LEDGER_BUMP_USER, LEDGER_THRESHOLD_SHARED, LEDGER_THRESHOLD_USER,
};

/********** Storage Types **********/

/// Descriptive metadata, fixed at initialization
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/********** Storage Key Types **********/

const METADATA_KEY: &str = "Metadata";
const SUPPLY_KEY: &str = "Supply";

#[derive(Clone)]
#[contracttype]
pub struct AllowanceKey {
    owner: Address,
    spender: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum JazzTokenDataKey {
    // The doinks held by an account
    Balance(Address),
    // The doinks a spender may still move out of an owner's balance
    Allowance(AllowanceKey),
    // Present for every member of the admin set
    Admin(Address),
}

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    default: V,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default
    }
}

/// Write an amount to persistent storage, removing the entry when the amount is zero
fn set_persistent_amount(e: &Env, key: &JazzTokenDataKey, amount: u128) {
    if amount == 0 {
        e.storage().persistent().remove(key);
    } else {
        e.storage()
            .persistent()
            .set::<JazzTokenDataKey, u128>(key, &amount);
        e.storage()
            .persistent()
            .extend_ttl(key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
    }
}

/********** Metadata **********/

/// Fetch the token metadata
pub fn get_metadata(e: &Env) -> TokenMetadata {
    e.storage()
        .instance()
        .get::<Symbol, TokenMetadata>(&Symbol::new(e, METADATA_KEY))
        .unwrap_optimized()
}

/// Checks if the token has been initialized
pub fn has_metadata(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, METADATA_KEY))
}

/// Set the token metadata
///
/// ### Arguments
/// * `metadata` - The name, symbol, and decimals of the token
pub fn set_metadata(e: &Env, metadata: &TokenMetadata) {
    e.storage()
        .instance()
        .set::<Symbol, TokenMetadata>(&Symbol::new(e, METADATA_KEY), metadata);
}

/********** Supply **********/

/// Fetch the total supply of doinks
pub fn get_total_supply(e: &Env) -> u128 {
    e.storage()
        .instance()
        .get::<Symbol, u128>(&Symbol::new(e, SUPPLY_KEY))
        .unwrap_or(0)
}

/// Set the total supply of doinks
///
/// ### Arguments
/// * `supply` - The new total supply
pub fn set_total_supply(e: &Env, supply: &u128) {
    e.storage()
        .instance()
        .set::<Symbol, u128>(&Symbol::new(e, SUPPLY_KEY), supply);
}

/********** Balances **********/

/// Fetch the balance of a user
///
/// ### Arguments
/// * `user` - The address of the user
pub fn get_balance(e: &Env, user: &Address) -> u128 {
    let key = JazzTokenDataKey::Balance(user.clone());
    get_persistent_default(e, &key, 0u128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Set the balance of a user
///
/// ### Arguments
/// * `user` - The address of the user
/// * `amount` - The new balance
pub fn set_balance(e: &Env, user: &Address, amount: &u128) {
    let key = JazzTokenDataKey::Balance(user.clone());
    set_persistent_amount(e, &key, *amount);
}

/********** Allowances **********/

/// Fetch the allowance "spender" has for "owner"
///
/// ### Arguments
/// * `owner` - The address whose doinks can be spent
/// * `spender` - The address allowed to spend them
pub fn get_allowance(e: &Env, owner: &Address, spender: &Address) -> u128 {
    let key = JazzTokenDataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    get_persistent_default(e, &key, 0u128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Set the allowance "spender" has for "owner"
///
/// ### Arguments
/// * `owner` - The address whose doinks can be spent
/// * `spender` - The address allowed to spend them
/// * `amount` - The new allowance
pub fn set_allowance(e: &Env, owner: &Address, spender: &Address, amount: &u128) {
    let key = JazzTokenDataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    set_persistent_amount(e, &key, *amount);
}

/********** Admins **********/

/// Check if an address is a member of the admin set
///
/// ### Arguments
/// * `user` - The address to check
pub fn is_admin(e: &Env, user: &Address) -> bool {
    let key = JazzTokenDataKey::Admin(user.clone());
    get_persistent_default(e, &key, false, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Add an address to the admin set
pub fn set_admin(e: &Env, user: &Address) {
    let key = JazzTokenDataKey::Admin(user.clone());
    e.storage()
        .persistent()
        .set::<JazzTokenDataKey, bool>(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Remove an address from the admin set
pub fn del_admin(e: &Env, user: &Address) {
    let key = JazzTokenDataKey::Admin(user.clone());
    e.storage().persistent().remove(&key);
}
