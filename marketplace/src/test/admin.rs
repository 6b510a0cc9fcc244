#![cfg(test)]

use super::{MarketplaceTest, PLATFORM_FEE_BPS};
use crate::types::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};

#[test]
fn test_initialize_twice_fails() {
    let test = MarketplaceTest::setup();
    let res = test.marketplace_client.try_initialize(
        &test.admin,
        &test.fee_recipient,
        &PLATFORM_FEE_BPS,
        &test.native_client.address,
        &test.kyc_client.address,
        &test.kyb_client.address,
    );
    assert_eq!(res, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_initialize_rejects_fee_above_denominator() {
    let test = MarketplaceTest::setup_no_init(Env::default());
    let res = test.marketplace_client.try_initialize(
        &test.admin,
        &test.fee_recipient,
        &10_001u32,
        &test.native_client.address,
        &test.kyc_client.address,
        &test.kyb_client.address,
    );
    assert_eq!(res, Err(Ok(Error::InvalidPlatformFee)));
}

#[test]
fn test_whitelister_role_is_admin_gated() {
    let test = MarketplaceTest::setup();
    let carol = Address::generate(&test.env);

    let res = test
        .marketplace_client
        .try_set_currency_whitelister(&test.bob, &carol);
    assert_eq!(res, Err(Ok(Error::Unauthorized)));

    test.marketplace_client
        .set_currency_whitelister(&test.admin, &carol);

    // The new whitelister can update the maps; a random caller cannot.
    let currency = Address::generate(&test.env);
    test.marketplace_client.update_whitelisted_currency(
        &carol,
        &vec![&test.env, currency.clone()],
        &vec![&test.env, true],
    );
    assert!(test.marketplace_client.is_currency_whitelisted(&currency));

    let res = test.marketplace_client.try_update_whitelisted_currency(
        &test.bob,
        &vec![&test.env, currency],
        &vec![&test.env, false],
    );
    assert_eq!(res, Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_whitelist_updates_reject_misaligned_arrays() {
    let test = MarketplaceTest::setup();
    let a = Address::generate(&test.env);
    let b = Address::generate(&test.env);

    let res = test.marketplace_client.try_update_whitelisted_currency(
        &test.admin,
        &vec![&test.env, a.clone(), b.clone()],
        &vec![&test.env, true],
    );
    assert_eq!(res, Err(Ok(Error::ArrayLengthMismatch)));

    let res = test.marketplace_client.try_update_whitelisted_tokens(
        &test.admin,
        &vec![&test.env, a],
        &vec![&test.env, true, false],
    );
    assert_eq!(res, Err(Ok(Error::ArrayLengthMismatch)));
}

#[test]
fn test_whitelist_entries_can_be_revoked() {
    let test = MarketplaceTest::setup();
    assert!(test
        .marketplace_client
        .is_token_whitelisted(&test.nft_client.address));

    test.marketplace_client.update_whitelisted_tokens(
        &test.admin,
        &vec![&test.env, test.nft_client.address.clone()],
        &vec![&test.env, false],
    );
    assert!(!test
        .marketplace_client
        .is_token_whitelisted(&test.nft_client.address));

    let res = test
        .marketplace_client
        .try_create_listing(&test.alice, &test.unique_listing_params(1));
    assert_eq!(res, Err(Ok(Error::AssetNotWhitelisted)));
}

#[test]
fn test_native_currency_is_always_accepted() {
    let test = MarketplaceTest::setup();
    assert!(test
        .marketplace_client
        .is_currency_whitelisted(&test.native_client.address));
    assert!(!test
        .marketplace_client
        .is_currency_whitelisted(&test.asset_token_client.address));
}

#[test]
fn test_toggle_listing_state_flips_and_is_admin_gated() {
    let test = MarketplaceTest::setup();

    let res = test.marketplace_client.try_toggle_listing_state(&test.bob);
    assert_eq!(res, Err(Ok(Error::Unauthorized)));

    assert!(test.marketplace_client.toggle_listing_state(&test.admin));
    assert!(!test.marketplace_client.toggle_listing_state(&test.admin));
}

#[test]
fn test_start_time_enforcement_is_admin_gated() {
    let test = MarketplaceTest::setup();
    let res = test
        .marketplace_client
        .try_set_start_time_enforcement(&test.bob, &true);
    assert_eq!(res, Err(Ok(Error::Unauthorized)));
}
