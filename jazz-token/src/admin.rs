use soroban_sdk::{Address, Env};

use crate::{errors::JazzTokenError, storage};

/// The privileged operations gated on the admin set
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdminAction {
    Mint,
    Burn,
    SetRole,
}

impl AdminAction {
    fn unauthorized(&self) -> JazzTokenError {
        match self {
            AdminAction::Mint => JazzTokenError::UnauthorizedMint,
            AdminAction::Burn => JazzTokenError::UnauthorizedBurn,
            AdminAction::SetRole => JazzTokenError::UnauthorizedSetRole,
        }
    }
}

/// Require "user" is a member of the admin set. This function should be called
/// before any admin level actions are taken.
///
/// ### Arguments
/// * `user` - The address to test
/// * `action` - The privileged operation being attempted
///
/// ### Errors
/// If the given address is not an admin, with the error matching the attempted operation
pub fn require_admin(e: &Env, user: &Address, action: AdminAction) -> Result<(), JazzTokenError> {
    if !storage::is_admin(e, user) {
        return Err(action.unauthorized());
    }
    Ok(())
}

/// Add "user" to the admin set if "is_admin" is true, otherwise remove it
///
/// Setting the state the user already has is a no-op. Nothing stops the last admin from
/// being removed.
pub fn set_role(e: &Env, user: &Address, is_admin: bool) {
    if is_admin {
        storage::set_admin(e, user);
    } else {
        storage::del_admin(e, user);
    }
}
