#![cfg(test)]

use jazz_token::{JazzTokenClient, JazzTokenContract, JazzTokenError};
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, IntoVal, String, Symbol,
};
use test_suites::test_fixture::{TestFixture, DECIMALS, INITIAL_SUPPLY, NAME, SYMBOL};

#[test]
fn test_deployment_sets_metadata() {
    let fixture = TestFixture::create(INITIAL_SUPPLY);
    let e = &fixture.env;

    assert_eq!(fixture.token.name(), String::from_str(e, NAME));
    assert_eq!(fixture.token.symbol(), String::from_str(e, SYMBOL));
    assert_eq!(fixture.token.decimals(), DECIMALS);
}

#[test]
fn test_deployment_issues_supply_to_minter() {
    let fixture = TestFixture::create(INITIAL_SUPPLY);

    assert_eq!(fixture.token.total_supply(), INITIAL_SUPPLY);
    assert_eq!(fixture.token.balance_of(&fixture.minter), INITIAL_SUPPLY);
    assert_eq!(fixture.token.balance_of(&fixture.alice), 0);
    assert!(fixture.token.is_admin(&fixture.minter));
    assert!(!fixture.token.is_admin(&fixture.alice));
}

#[test]
fn test_deployment_announces_genesis() {
    let fixture = TestFixture::create(INITIAL_SUPPLY);
    let e = &fixture.env;

    assert_eq!(
        e.events().all(),
        vec![
            e,
            (
                fixture.token.address.clone(),
                (
                    Symbol::new(e, "transfer"),
                    fixture.null_address(),
                    fixture.minter.clone()
                )
                    .into_val(e),
                INITIAL_SUPPLY.into_val(e)
            ),
            (
                fixture.token.address.clone(),
                (Symbol::new(e, "role_update"), fixture.minter.clone()).into_val(e),
                true.into_val(e)
            )
        ]
    );
}

#[test]
fn test_deployment_without_supply() {
    let fixture = TestFixture::create(0);
    fixture.assert_role_update_event(&fixture.minter, true);

    assert_eq!(fixture.token.total_supply(), 0);
    assert_eq!(fixture.token.balance_of(&fixture.minter), 0);
    assert!(fixture.token.is_admin(&fixture.minter));
}

#[test]
fn test_initialize_twice() {
    let fixture = TestFixture::create(INITIAL_SUPPLY);
    let e = &fixture.env;

    let result = fixture.token.try_initialize(
        &fixture.alice,
        &7,
        &String::from_str(e, "Other"),
        &String::from_str(e, "OTHR"),
        &5,
    );
    assert_eq!(result.err(), Some(Ok(JazzTokenError::AlreadyInitialized)));

    // verify nothing changed
    assert_eq!(fixture.token.name(), String::from_str(e, NAME));
    assert_eq!(fixture.token.decimals(), DECIMALS);
    assert_eq!(fixture.token.total_supply(), INITIAL_SUPPLY);
    assert_eq!(fixture.token.balance_of(&fixture.alice), 0);
    assert!(!fixture.token.is_admin(&fixture.alice));
}

#[test]
fn test_initialize_null_deployer() {
    let fixture = TestFixture::create(INITIAL_SUPPLY);
    let e = &fixture.env;

    let token_id = e.register_contract(None, JazzTokenContract {});
    let token = JazzTokenClient::new(e, &token_id);
    let result = token.try_initialize(
        &fixture.null_address(),
        &DECIMALS,
        &String::from_str(e, NAME),
        &String::from_str(e, SYMBOL),
        &INITIAL_SUPPLY,
    );
    assert_eq!(result.err(), Some(Ok(JazzTokenError::NullAddress)));

    // the failed deployment can still be initialized
    let deployer = Address::generate(e);
    token.initialize(
        &deployer,
        &DECIMALS,
        &String::from_str(e, NAME),
        &String::from_str(e, SYMBOL),
        &INITIAL_SUPPLY,
    );
    assert_eq!(token.balance_of(&deployer), INITIAL_SUPPLY);
}
