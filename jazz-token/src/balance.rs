use soroban_sdk::{Address, Env, String};

use crate::{constants::NULL_ADDRESS, errors::JazzTokenError, storage};

/// The null address, the origin of minted doinks and the destination of burned doinks
pub fn null_address(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, NULL_ADDRESS))
}

/// Require that "user" is not the null address
///
/// ### Errors
/// If "user" is the null address
pub fn require_not_null(e: &Env, user: &Address) -> Result<(), JazzTokenError> {
    if *user == null_address(e) {
        return Err(JazzTokenError::NullAddress);
    }
    Ok(())
}

/// Require that "user" holds at least "amount" doinks
///
/// ### Errors
/// If the balance of "user" is less than "amount"
pub fn require_balance(e: &Env, user: &Address, amount: u128) -> Result<u128, JazzTokenError> {
    let balance = storage::get_balance(e, user);
    if balance < amount {
        return Err(JazzTokenError::InsufficientBalance);
    }
    Ok(balance)
}

/// Spend "amount" of doinks from "user"
///
/// Errors if there is not enough balance to spend
pub fn spend_balance(e: &Env, user: &Address, amount: u128) -> Result<(), JazzTokenError> {
    let balance = require_balance(e, user, amount)?;
    storage::set_balance(e, user, &(balance - amount));
    Ok(())
}

/// Receive "amount" of doinks to "user"
///
/// Errors if the resulting balance would overflow
pub fn receive_balance(e: &Env, user: &Address, amount: u128) -> Result<(), JazzTokenError> {
    let balance = storage::get_balance(e, user)
        .checked_add(amount)
        .ok_or(JazzTokenError::Overflow)?;
    storage::set_balance(e, user, &balance);
    Ok(())
}

/// Move "amount" of doinks from "from" to "to"
///
/// The receiving balance cannot overflow while every balance is bounded by the total supply
///
/// ### Errors
/// If "from" does not hold "amount" or "to" is the null address, checked in that order
pub fn transfer_balance(
    e: &Env,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), JazzTokenError> {
    require_balance(e, from, amount)?;
    require_not_null(e, to)?;
    spend_balance(e, from, amount)?;
    receive_balance(e, to, amount)
}
