use soroban_sdk::{testutils::Events, vec, Address, IntoVal, Symbol, Val, Vec};

use crate::test_fixture::TestFixture;

impl TestFixture<'_> {
    /// Assert the most recent event published by the token
    pub fn assert_last_event(&self, topics: Vec<Val>, data: Val) {
        let event = vec![&self.env, self.env.events().all().last_unchecked()];
        assert_eq!(
            event,
            vec![&self.env, (self.token.address.clone(), topics, data)]
        );
    }

    /// Assert the most recent event is a transfer notification
    pub fn assert_transfer_event(&self, from: &Address, to: &Address, amount: u128) {
        self.assert_last_event(
            (
                Symbol::new(&self.env, "transfer"),
                from.clone(),
                to.clone(),
            )
                .into_val(&self.env),
            amount.into_val(&self.env),
        );
    }

    /// Assert the most recent event is an approval notification
    pub fn assert_approve_event(&self, owner: &Address, spender: &Address, amount: u128) {
        self.assert_last_event(
            (
                Symbol::new(&self.env, "approve"),
                owner.clone(),
                spender.clone(),
            )
                .into_val(&self.env),
            amount.into_val(&self.env),
        );
    }

    /// Assert the most recent event is a role update notification
    pub fn assert_role_update_event(&self, account: &Address, is_admin: bool) {
        self.assert_last_event(
            (Symbol::new(&self.env, "role_update"), account.clone()).into_val(&self.env),
            is_admin.into_val(&self.env),
        );
    }

    /// Assert the total supply equals the sum of every known balance
    pub fn assert_conservation(&self) {
        let sum: u128 = self.balances().iter().sum();
        assert_eq!(self.token.total_supply(), sum);
    }
}
