#![cfg(test)]

use soroban_sdk::{
    testutils::{Ledger, LedgerInfo},
    Address, Env,
};

use crate::JazzTokenContract;

pub(crate) fn create_env() -> Env {
    let e = Env::default();
    e.mock_all_auths();
    e.ledger().set(LedgerInfo {
        timestamp: 12345,
        protocol_version: 20,
        sequence_number: 50,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
    e
}

pub(crate) fn create_jazz_token(e: &Env) -> Address {
    e.register_contract(None, JazzTokenContract {})
}
