use jazz_token::{JazzTokenClient, JazzTokenContract, NULL_ADDRESS};
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::{Address, Env, String};

pub const NAME: &str = "Jazz";
pub const SYMBOL: &str = "JAZZ";
pub const DECIMALS: u32 = 18;
pub const INITIAL_SUPPLY: u128 = 1_000_000;

pub struct TestFixture<'a> {
    pub env: Env,
    pub minter: Address,
    pub alice: Address,
    pub bob: Address,
    pub eve: Address,
    pub token: JazzTokenClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for the Jazz token
    ///
    /// Deploys the token with `initial_supply` doinks held by the minter, who is also the
    /// only admin. Alice, Bob, and Eve start with nothing.
    pub fn create<'a>(initial_supply: u128) -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.budget().reset_unlimited();

        e.ledger().set(LedgerInfo {
            timestamp: 1441065600,
            protocol_version: 20,
            sequence_number: 100,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 3110400,
        });

        let minter = Address::generate(&e);
        let alice = Address::generate(&e);
        let bob = Address::generate(&e);
        let eve = Address::generate(&e);

        let token_id = e.register_contract(None, JazzTokenContract {});
        let token = JazzTokenClient::new(&e, &token_id);
        token.initialize(
            &minter,
            &DECIMALS,
            &String::from_str(&e, NAME),
            &String::from_str(&e, SYMBOL),
            &initial_supply,
        );

        TestFixture {
            env: e,
            minter,
            alice,
            bob,
            eve,
            token,
        }
    }

    /// The null address minted doinks come from and burned doinks go to
    pub fn null_address(&self) -> Address {
        Address::from_string(&String::from_str(&self.env, NULL_ADDRESS))
    }

    /// Every account the fixture knows about
    pub fn accounts(&self) -> [Address; 4] {
        [
            self.minter.clone(),
            self.alice.clone(),
            self.bob.clone(),
            self.eve.clone(),
        ]
    }

    /// Fetch the balance of every account, in the order of `accounts`
    pub fn balances(&self) -> [u128; 4] {
        let accounts = self.accounts();
        [
            self.token.balance_of(&accounts[0]),
            self.token.balance_of(&accounts[1]),
            self.token.balance_of(&accounts[2]),
            self.token.balance_of(&accounts[3]),
        ]
    }

    /// Move the ledger forward by `time` seconds and one ledger per 5 seconds
    pub fn jump(&self, time: u64) {
        let info = self.env.ledger().get();
        self.env.ledger().set(LedgerInfo {
            timestamp: info.timestamp.saturating_add(time),
            protocol_version: info.protocol_version,
            sequence_number: info.sequence_number.saturating_add((time / 5) as u32),
            network_id: info.network_id,
            base_reserve: info.base_reserve,
            min_temp_entry_ttl: info.min_temp_entry_ttl,
            min_persistent_entry_ttl: info.min_persistent_entry_ttl,
            max_entry_ttl: info.max_entry_ttl,
        });
    }
}
