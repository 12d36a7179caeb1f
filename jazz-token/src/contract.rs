use crate::{
    admin::{self, AdminAction},
    allowance, balance,
    errors::JazzTokenError,
    events,
    storage::{self, TokenMetadata},
};
use soroban_sdk::{contract, contractclient, contractimpl, log, Address, Env, String};

/// ### Jazz Token
///
/// A fungible token of divisible "doinks" with delegated transfers and an admin set that
/// controls supply and its own membership
#[contract]
pub struct JazzTokenContract;

#[contractclient(name = "JazzTokenClient")]
pub trait JazzToken {
    /// Initialize the token
    ///
    /// ### Arguments
    /// * `admin` - The deployer. Receives the initial supply and becomes the only admin
    /// * `decimals` - The number of decimals used to display amounts
    /// * `name` - The display name of the token
    /// * `symbol` - The ticker of the token
    /// * `initial_supply` - The number of doinks that exist after initialization
    ///
    /// ### Errors
    /// If the token is already initialized or `admin` is the null address
    fn initialize(
        e: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
        initial_supply: u128,
    ) -> Result<(), JazzTokenError>;

    /********** Token **********/

    /// Transfer `amount` doinks from `from` to `to`
    ///
    /// ### Arguments
    /// * `from` - The address sending doinks, must authorize the call
    /// * `to` - The address receiving doinks
    /// * `amount` - The number of doinks to send
    ///
    /// ### Errors
    /// If `from` holds less than `amount` or `to` is the null address
    fn transfer(e: Env, from: Address, to: Address, amount: u128) -> Result<(), JazzTokenError>;

    /// Set the number of doinks `spender` may move out of `from`'s balance, replacing any
    /// existing allowance
    ///
    /// ### Arguments
    /// * `from` - The owner of the doinks, must authorize the call
    /// * `spender` - The address allowed to spend them
    /// * `amount` - The new allowance
    fn approve(e: Env, from: Address, spender: Address, amount: u128)
        -> Result<(), JazzTokenError>;

    /// Transfer `amount` doinks from `from` to `to` using the allowance granted to `spender`
    ///
    /// ### Arguments
    /// * `spender` - The address spending the allowance, must authorize the call
    /// * `from` - The owner of the doinks
    /// * `to` - The address receiving doinks
    /// * `amount` - The number of doinks to send
    ///
    /// ### Errors
    /// If the allowance is less than `amount`, checked first, if `from` holds less than
    /// `amount`, checked second, or if `to` is the null address
    fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), JazzTokenError>;

    /// Fetch the number of doinks held by `id`
    fn balance_of(e: Env, id: Address) -> u128;

    /// Fetch the number of doinks `spender` may still move out of `from`'s balance
    fn allowance_of(e: Env, from: Address, spender: Address) -> u128;

    /// Fetch the number of doinks in existence
    fn total_supply(e: Env) -> u128;

    /********** Admin **********/

    /// (Admin only) Create `amount` doinks and give them to `to`
    ///
    /// ### Arguments
    /// * `admin` - An admin, must authorize the call
    /// * `to` - The address receiving the doinks
    /// * `amount` - The number of doinks to create
    ///
    /// ### Errors
    /// If `admin` is not an admin, `to` is the null address, or the supply would overflow
    fn mint(e: Env, admin: Address, to: Address, amount: u128) -> Result<(), JazzTokenError>;

    /// (Admin only) Destroy `amount` doinks held by `from`
    ///
    /// ### Arguments
    /// * `admin` - An admin, must authorize the call
    /// * `from` - The address losing the doinks
    /// * `amount` - The number of doinks to destroy
    ///
    /// ### Errors
    /// If `admin` is not an admin or `from` holds less than `amount`
    fn burn(e: Env, admin: Address, from: Address, amount: u128) -> Result<(), JazzTokenError>;

    /// (Admin only) Add `id` to or remove `id` from the admin set
    ///
    /// An admin can remove itself, including when it is the last one.
    ///
    /// ### Arguments
    /// * `admin` - An admin, must authorize the call
    /// * `id` - The address whose role changes
    /// * `is_admin` - True to grant the admin role, false to revoke it
    ///
    /// ### Errors
    /// If `admin` is not an admin
    fn set_role(e: Env, admin: Address, id: Address, is_admin: bool)
        -> Result<(), JazzTokenError>;

    /// Check if `id` is an admin
    fn is_admin(e: Env, id: Address) -> bool;

    /********** Metadata **********/

    /// Fetch the number of decimals used to display amounts
    fn decimals(e: Env) -> u32;

    /// Fetch the display name of the token
    fn name(e: Env) -> String;

    /// Fetch the ticker of the token
    fn symbol(e: Env) -> String;
}

#[contractimpl]
impl JazzToken for JazzTokenContract {
    fn initialize(
        e: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
        initial_supply: u128,
    ) -> Result<(), JazzTokenError> {
        admin.require_auth();
        storage::extend_instance(&e);
        if storage::has_metadata(&e) {
            return Err(JazzTokenError::AlreadyInitialized);
        }
        balance::require_not_null(&e, &admin)?;

        storage::set_metadata(
            &e,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        storage::set_total_supply(&e, &initial_supply);
        storage::set_balance(&e, &admin, &initial_supply);
        admin::set_role(&e, &admin, true);

        events::mint(&e, admin.clone(), initial_supply);
        events::role_update(&e, admin.clone(), true);
        log!(&e, "initialized", admin, initial_supply);
        Ok(())
    }

    fn transfer(e: Env, from: Address, to: Address, amount: u128) -> Result<(), JazzTokenError> {
        from.require_auth();
        storage::extend_instance(&e);

        balance::transfer_balance(&e, &from, &to, amount)?;

        events::transfer(&e, from, to, amount);
        Ok(())
    }

    fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: u128,
    ) -> Result<(), JazzTokenError> {
        from.require_auth();
        storage::extend_instance(&e);

        allowance::approve(&e, &from, &spender, amount);

        events::approve(&e, from, spender, amount);
        Ok(())
    }

    fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), JazzTokenError> {
        spender.require_auth();
        storage::extend_instance(&e);

        allowance::require_allowance(&e, &from, &spender, amount)?;
        balance::require_balance(&e, &from, amount)?;
        balance::require_not_null(&e, &to)?;

        allowance::spend_allowance(&e, &from, &spender, amount)?;
        balance::transfer_balance(&e, &from, &to, amount)?;

        events::transfer(&e, from, to, amount);
        Ok(())
    }

    fn balance_of(e: Env, id: Address) -> u128 {
        storage::get_balance(&e, &id)
    }

    fn allowance_of(e: Env, from: Address, spender: Address) -> u128 {
        storage::get_allowance(&e, &from, &spender)
    }

    fn total_supply(e: Env) -> u128 {
        storage::get_total_supply(&e)
    }

    fn mint(e: Env, admin: Address, to: Address, amount: u128) -> Result<(), JazzTokenError> {
        admin.require_auth();
        storage::extend_instance(&e);

        admin::require_admin(&e, &admin, AdminAction::Mint)?;
        balance::require_not_null(&e, &to)?;
        let supply = storage::get_total_supply(&e)
            .checked_add(amount)
            .ok_or(JazzTokenError::Overflow)?;

        balance::receive_balance(&e, &to, amount)?;
        storage::set_total_supply(&e, &supply);

        events::mint(&e, to.clone(), amount);
        log!(&e, "mint", admin, to, amount);
        Ok(())
    }

    fn burn(e: Env, admin: Address, from: Address, amount: u128) -> Result<(), JazzTokenError> {
        admin.require_auth();
        storage::extend_instance(&e);

        admin::require_admin(&e, &admin, AdminAction::Burn)?;
        balance::spend_balance(&e, &from, amount)?;
        // the burned doinks were part of the supply, so this cannot underflow
        let supply = storage::get_total_supply(&e) - amount;
        storage::set_total_supply(&e, &supply);

        events::burn(&e, from.clone(), amount);
        log!(&e, "burn", admin, from, amount);
        Ok(())
    }

    fn set_role(
        e: Env,
        admin: Address,
        id: Address,
        is_admin: bool,
    ) -> Result<(), JazzTokenError> {
        admin.require_auth();
        storage::extend_instance(&e);

        admin::require_admin(&e, &admin, AdminAction::SetRole)?;
        admin::set_role(&e, &id, is_admin);

        events::role_update(&e, id.clone(), is_admin);
        log!(&e, "set_role", admin, id, is_admin);
        Ok(())
    }

    fn is_admin(e: Env, id: Address) -> bool {
        storage::is_admin(&e, &id)
    }

    fn decimals(e: Env) -> u32 {
        storage::get_metadata(&e).decimals
    }

    fn name(e: Env) -> String {
        storage::get_metadata(&e).name
    }

    fn symbol(e: Env) -> String {
        storage::get_metadata(&e).symbol
    }
}
