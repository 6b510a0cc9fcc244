#![cfg(test)]

use super::MarketplaceTest;
use crate::types::{AssetKind, Error, Listing, ListingParams};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address};

#[test]
fn test_create_listing_for_unique_asset() {
    let test = MarketplaceTest::setup();
    let params = test.unique_listing_params(1);

    let listing_id: u64 = test.marketplace_client.create_listing(&test.alice, &params);

    assert_eq!(listing_id, 0);
    assert_eq!(test.marketplace_client.total_listings(), 1);

    let listing: Listing = test.marketplace_client.get_listing(&listing_id);
    assert_eq!(listing.listing_id, 0);
    assert_eq!(listing.token_owner, test.alice);
    assert_eq!(listing.asset_contract, test.nft_client.address);
    assert_eq!(listing.token_id, 1);
    assert_eq!(listing.quantity, 1);
    assert_eq!(listing.currency, test.native_client.address);
    assert_eq!(listing.buyout_price_per_token, 100_000);
    assert_eq!(listing.asset_kind, AssetKind::Unique);
}

#[test]
fn test_create_multiple_listings_assigns_contiguous_ids() {
    let test = MarketplaceTest::setup();
    let params = vec![
        &test.env,
        test.unique_listing_params(1),
        test.semi_fungible_listing_params(1, 1_000),
        test.fungible_listing_params(500),
    ];

    let ids = test
        .marketplace_client
        .create_multiple_listings(&test.alice, &params);

    assert_eq!(ids, vec![&test.env, 0u64, 1u64, 2u64]);
    assert_eq!(test.marketplace_client.total_listings(), 3);
    assert_eq!(test.marketplace_client.get_all_listings().len(), 3);
}

#[test]
fn test_create_listing_rejects_non_whitelisted_asset() {
    let test = MarketplaceTest::setup();
    let mut params = test.unique_listing_params(1);
    params.asset_contract = Address::generate(&test.env);

    let res = test.marketplace_client.try_create_listing(&test.alice, &params);
    assert_eq!(res, Err(Ok(Error::AssetNotWhitelisted)));
    assert_eq!(test.marketplace_client.total_listings(), 0);
}

#[test]
fn test_create_listing_rejects_non_whitelisted_currency() {
    let test = MarketplaceTest::setup();
    let rogue_currency = Address::generate(&test.env);
    let mut params = test.unique_listing_params(1);
    params.currency_to_accept = rogue_currency.clone();

    let res = test.marketplace_client.try_create_listing(&test.alice, &params);
    assert_eq!(res, Err(Ok(Error::CurrencyNotWhitelisted)));

    // The identical call succeeds once the currency has been whitelisted.
    test.marketplace_client.update_whitelisted_currency(
        &test.admin,
        &vec![&test.env, rogue_currency],
        &vec![&test.env, true],
    );
    test.marketplace_client.create_listing(&test.alice, &params);
    assert_eq!(test.marketplace_client.total_listings(), 1);
}

#[test]
fn test_create_listing_requires_credential() {
    let test = MarketplaceTest::setup();
    let params = ListingParams {
        asset_contract: test.sft_client.address.clone(),
        token_id: 1,
        quantity_to_list: 100,
        currency_to_accept: test.native_client.address.clone(),
        buyout_price_per_token: 100_000,
        start_time: 0,
        asset_kind: AssetKind::SemiFungible,
    };

    // bob holds neither the KYC nor the KYB credential.
    let res = test.marketplace_client.try_create_listing(&test.bob, &params);
    assert_eq!(res, Err(Ok(Error::NotASoulBoundOwner)));

    // Either credential satisfies the gate.
    test.kyb_client.mint(&test.bob);
    test.marketplace_client.create_listing(&test.bob, &params);
    assert_eq!(test.marketplace_client.total_listings(), 1);
}

#[test]
fn test_public_listing_skips_credential_check() {
    let test = MarketplaceTest::setup();
    let carol = Address::generate(&test.env);
    let params = test.unique_listing_params(1);

    let res = test.marketplace_client.try_create_listing(&carol, &params);
    assert_eq!(res, Err(Ok(Error::NotASoulBoundOwner)));

    assert!(test.marketplace_client.toggle_listing_state(&test.admin));
    test.marketplace_client.create_listing(&carol, &params);
    assert_eq!(test.marketplace_client.total_listings(), 1);
}

#[test]
fn test_create_listing_rejects_zero_quantity() {
    let test = MarketplaceTest::setup();
    let mut params = test.semi_fungible_listing_params(1, 1_000);
    params.quantity_to_list = 0;

    let res = test.marketplace_client.try_create_listing(&test.alice, &params);
    assert_eq!(res, Err(Ok(Error::InvalidListingQuantity)));
}

#[test]
fn test_create_listing_rejects_non_positive_price() {
    let test = MarketplaceTest::setup();
    let mut params = test.unique_listing_params(1);
    params.buyout_price_per_token = -100_000;

    // A negative unit price never reaches storage; it would otherwise only
    // surface later as a transfer failure inside the currency contract.
    let res = test.marketplace_client.try_create_listing(&test.alice, &params);
    assert_eq!(res, Err(Ok(Error::InvalidListingPrice)));

    params.buyout_price_per_token = 0;
    let res = test.marketplace_client.try_create_listing(&test.alice, &params);
    assert_eq!(res, Err(Ok(Error::InvalidListingPrice)));
    assert_eq!(test.marketplace_client.total_listings(), 0);
}

#[test]
fn test_create_multiple_listings_is_all_or_nothing() {
    let test = MarketplaceTest::setup();
    let mut bad = test.unique_listing_params(2);
    bad.asset_contract = Address::generate(&test.env);
    let params = vec![&test.env, test.unique_listing_params(1), bad];

    let res = test
        .marketplace_client
        .try_create_multiple_listings(&test.alice, &params);
    assert_eq!(res, Err(Ok(Error::AssetNotWhitelisted)));

    // The failing second element rolled the first one back as well.
    assert_eq!(test.marketplace_client.total_listings(), 0);
    assert_eq!(
        test.marketplace_client.try_get_listing(&0u64),
        Err(Ok(Error::ListingNotFound))
    );
}
