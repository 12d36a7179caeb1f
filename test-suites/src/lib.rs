pub mod assertions;
pub mod test_fixture;

use test_fixture::TestFixture;

/// Create a test fixture with the default initial supply held by the minter, and
/// 2000 doinks sent to alice and 1000 doinks sent to bob
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let fixture = TestFixture::create(test_fixture::INITIAL_SUPPLY);
    fixture
        .token
        .transfer(&fixture.minter, &fixture.alice, &2000);
    fixture.token.transfer(&fixture.minter, &fixture.bob, &1000);
    fixture
}
