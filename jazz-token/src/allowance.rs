use soroban_sdk::{Address, Env};

use crate::{errors::JazzTokenError, storage};

/// Set the allowance of "spender" for "owner" to "amount"
///
/// Overwrites any previous allowance. The allowance may exceed the owner's balance.
pub fn approve(e: &Env, owner: &Address, spender: &Address, amount: u128) {
    storage::set_allowance(e, owner, spender, &amount);
}

/// Require that "spender" may still move at least "amount" out of "owner"'s balance
///
/// ### Errors
/// If the allowance of "spender" for "owner" is less than "amount"
pub fn require_allowance(
    e: &Env,
    owner: &Address,
    spender: &Address,
    amount: u128,
) -> Result<u128, JazzTokenError> {
    let allowance = storage::get_allowance(e, owner, spender);
    if allowance < amount {
        return Err(JazzTokenError::InsufficientAllowance);
    }
    Ok(allowance)
}

/// Spend "amount" from the allowance of "spender" for "owner"
///
/// Errors if the "spender" does not have enough allowance to spend "amount"
pub fn spend_allowance(
    e: &Env,
    owner: &Address,
    spender: &Address,
    amount: u128,
) -> Result<(), JazzTokenError> {
    let allowance = require_allowance(e, owner, spender, amount)?;
    storage::set_allowance(e, owner, spender, &(allowance - amount));
    Ok(())
}

#[cfg(test)]
mod tests {
    use soroban_sdk::testutils::Address as _;

    use crate::testutils::{create_env, create_jazz_token};

    use super::*;

    #[test]
    fn test_approve_overwrites() {
        let e = create_env();
        let token = create_jazz_token(&e);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);

        e.as_contract(&token, || {
            approve(&e, &samwise, &frodo, 1000);
            approve(&e, &samwise, &frodo, 250);

            assert_eq!(storage::get_allowance(&e, &samwise, &frodo), 250);
        });
    }

    #[test]
    fn test_spend_allowance() {
        let e = create_env();
        let token = create_jazz_token(&e);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);

        e.as_contract(&token, || {
            approve(&e, &samwise, &frodo, 123456789);

            spend_allowance(&e, &samwise, &frodo, 123456788).unwrap();
            assert_eq!(storage::get_allowance(&e, &samwise, &frodo), 1);

            spend_allowance(&e, &samwise, &frodo, 1).unwrap();
            assert_eq!(storage::get_allowance(&e, &samwise, &frodo), 0);
        });
    }

    #[test]
    fn test_spend_allowance_overspend() {
        let e = create_env();
        let token = create_jazz_token(&e);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);

        e.as_contract(&token, || {
            approve(&e, &samwise, &frodo, 123456789);

            let result = spend_allowance(&e, &samwise, &frodo, 123456790);
            assert_eq!(result, Err(JazzTokenError::InsufficientAllowance));
            assert_eq!(storage::get_allowance(&e, &samwise, &frodo), 123456789);
        });
    }

    #[test]
    fn test_spend_allowance_no_approval() {
        let e = create_env();
        let token = create_jazz_token(&e);
        let samwise = Address::generate(&e);
        let frodo = Address::generate(&e);

        e.as_contract(&token, || {
            spend_allowance(&e, &samwise, &frodo, 0).unwrap();

            let result = spend_allowance(&e, &samwise, &frodo, 1);
            assert_eq!(result, Err(JazzTokenError::InsufficientAllowance));
        });
    }
}
