use soroban_sdk::{Address, Env, Symbol};

use crate::balance::null_address;

/// Emitted when doinks move between accounts
///
/// - topics - `["transfer", from: Address, to: Address]`
/// - data - `amount: u128`
pub(crate) fn transfer(e: &Env, from: Address, to: Address, amount: u128) {
    let topics = (Symbol::new(e, "transfer"), from, to);
    e.events().publish(topics, amount);
}

/// Emitted when doinks are created. Announced as a transfer out of the null address.
pub(crate) fn mint(e: &Env, to: Address, amount: u128) {
    transfer(e, null_address(e), to, amount);
}

/// Emitted when doinks are destroyed. Announced as a transfer into the null address.
pub(crate) fn burn(e: &Env, from: Address, amount: u128) {
    transfer(e, from, null_address(e), amount);
}

/// Emitted when an owner sets the allowance of a spender
///
/// - topics - `["approve", owner: Address, spender: Address]`
/// - data - `amount: u128`
pub(crate) fn approve(e: &Env, owner: Address, spender: Address, amount: u128) {
    let topics = (Symbol::new(e, "approve"), owner, spender);
    e.events().publish(topics, amount);
}

/// Emitted when an account is added to or removed from the admin set
///
/// - topics - `["role_update", account: Address]`
/// - data - `is_admin: bool`
pub(crate) fn role_update(e: &Env, account: Address, is_admin: bool) {
    let topics = (Symbol::new(e, "role_update"), account);
    e.events().publish(topics, is_admin);
}
