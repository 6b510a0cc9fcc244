#![no_std]
#![allow(clippy::unused_unit)]

mod events;
mod storage;
mod types;
mod utils;

use events::MarketplaceEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Vec};
use storage::{get_data, has_data, remove_persistent, store_data, store_persistent};
use types::{
    DataKey, Error, Listing, ListingParams, ADMIN, BPS_DENOMINATOR, ENFORCE_START, FEE_BPS,
    FEE_RECIPIENT, KYB_TOKEN, KYC_TOKEN, NATIVE_TOKEN, PUBLIC_LISTING, WHITELISTER,
};
use utils::helpers::{
    check_admin, check_credential, check_whitelister, get_listing_by_id, is_asset_approved,
    is_currency_approved, settle_payment, transfer_listed_asset,
};

#[contract]
pub struct MarketplaceContract;

#[allow(dead_code)]
#[contractimpl]
impl MarketplaceContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        platform_fee_recipient: Address,
        platform_fee_bps: u32,
        native_token: Address,
        kyc_token: Address,
        kyb_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        if i128::from(platform_fee_bps) > BPS_DENOMINATOR {
            return Err(Error::InvalidPlatformFee);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &WHITELISTER, &admin);
        store_data(&env, &FEE_RECIPIENT, &platform_fee_recipient);
        store_data(&env, &FEE_BPS, &platform_fee_bps);
        store_data(&env, &NATIVE_TOKEN, &native_token);
        store_data(&env, &KYC_TOKEN, &kyc_token);
        store_data(&env, &KYB_TOKEN, &kyb_token);
        store_data(&env, &PUBLIC_LISTING, &false);
        store_data(&env, &ENFORCE_START, &false);
        store_data(&env, &DataKey::TotalListings, &0u64);

        MarketplaceEvent::Initialized(admin, platform_fee_recipient, platform_fee_bps)
            .publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        MarketplaceEvent::Upgraded(Self::version()).publish(&env);
    }

    pub fn set_currency_whitelister(
        env: Env,
        caller: Address,
        whitelister: Address,
    ) -> Result<(), Error> {
        check_admin(&env, &caller)?;
        store_data(&env, &WHITELISTER, &whitelister);
        MarketplaceEvent::WhitelisterChanged(whitelister).publish(&env);
        Ok(())
    }

    /// Flips the process-wide public-listing flag. While enabled, the
    /// KYC/KYB credential check in `create_listing` is skipped for all
    /// callers. Returns the new value.
    pub fn toggle_listing_state(env: Env, caller: Address) -> Result<bool, Error> {
        check_admin(&env, &caller)?;
        let enabled: bool = !get_data(&env, &PUBLIC_LISTING).unwrap_or(false);
        store_data(&env, &PUBLIC_LISTING, &enabled);
        MarketplaceEvent::ListingStateToggled(enabled).publish(&env);
        Ok(enabled)
    }

    /// Scheduled-start variant: when enabled, `buy` rejects listings whose
    /// `start_time` is still in the future. Disabled by default.
    pub fn set_start_time_enforcement(env: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        check_admin(&env, &caller)?;
        store_data(&env, &ENFORCE_START, &enabled);
        MarketplaceEvent::StartTimeEnforcementSet(enabled).publish(&env);
        Ok(())
    }

    pub fn update_whitelisted_currency(
        env: Env,
        caller: Address,
        currencies: Vec<Address>,
        statuses: Vec<bool>,
    ) -> Result<(), Error> {
        check_whitelister(&env, &caller)?;
        if currencies.len() != statuses.len() {
            return Err(Error::ArrayLengthMismatch);
        }
        for (currency, status) in currencies.iter().zip(statuses.iter()) {
            store_persistent(&env, &DataKey::WhitelistedCurrency(currency.clone()), &status);
            MarketplaceEvent::CurrencyWhitelistUpdated(currency, status).publish(&env);
        }
        Ok(())
    }

    pub fn update_whitelisted_tokens(
        env: Env,
        caller: Address,
        assets: Vec<Address>,
        statuses: Vec<bool>,
    ) -> Result<(), Error> {
        check_whitelister(&env, &caller)?;
        if assets.len() != statuses.len() {
            return Err(Error::ArrayLengthMismatch);
        }
        for (asset, status) in assets.iter().zip(statuses.iter()) {
            store_persistent(&env, &DataKey::WhitelistedAsset(asset.clone()), &status);
            MarketplaceEvent::AssetWhitelistUpdated(asset, status).publish(&env);
        }
        Ok(())
    }

    pub fn is_currency_whitelisted(env: Env, currency: Address) -> bool {
        is_currency_approved(&env, &currency)
    }

    pub fn is_token_whitelisted(env: Env, asset_contract: Address) -> bool {
        is_asset_approved(&env, &asset_contract)
    }

    pub fn create_listing(env: Env, lister: Address, params: ListingParams) -> Result<u64, Error> {
        lister.require_auth();
        append_listing(&env, &lister, &params)
    }

    pub fn create_multiple_listings(
        env: Env,
        lister: Address,
        params: Vec<ListingParams>,
    ) -> Result<Vec<u64>, Error> {
        lister.require_auth();
        let mut listing_ids: Vec<u64> = Vec::new(&env);
        for element in params.iter() {
            listing_ids.push_back(append_listing(&env, &lister, &element)?);
        }
        Ok(listing_ids)
    }

    pub fn update_listing(
        env: Env,
        caller: Address,
        listing_id: u64,
        quantity: i128,
        buyout_price_per_token: i128,
        currency: Address,
        start_time: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        apply_listing_update(
            &env,
            &caller,
            listing_id,
            quantity,
            buyout_price_per_token,
            &currency,
            start_time,
        )
    }

    pub fn update_listings(
        env: Env,
        caller: Address,
        listing_ids: Vec<u64>,
        quantities: Vec<i128>,
        prices: Vec<i128>,
        currencies: Vec<Address>,
        start_times: Vec<u64>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let len = listing_ids.len();
        if quantities.len() != len
            || prices.len() != len
            || currencies.len() != len
            || start_times.len() != len
        {
            return Err(Error::ArrayLengthMismatch);
        }
        for i in 0..len {
            apply_listing_update(
                &env,
                &caller,
                listing_ids.get_unchecked(i),
                quantities.get_unchecked(i),
                prices.get_unchecked(i),
                &currencies.get_unchecked(i),
                start_times.get_unchecked(i),
            )?;
        }
        Ok(())
    }

    pub fn cancel_direct_listing(env: Env, caller: Address, listing_id: u64) -> Result<(), Error> {
        caller.require_auth();
        remove_listing_entry(&env, &caller, listing_id)
    }

    pub fn cancel_direct_listings(
        env: Env,
        caller: Address,
        listing_ids: Vec<u64>,
    ) -> Result<(), Error> {
        caller.require_auth();
        for listing_id in listing_ids.iter() {
            remove_listing_entry(&env, &caller, listing_id)?;
        }
        Ok(())
    }

    pub fn buy(
        env: Env,
        buyer: Address,
        listing_id: u64,
        buy_for: Address,
        quantity_to_buy: i128,
        currency: Address,
        total_price: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        execute_buy(
            &env,
            &buyer,
            listing_id,
            &buy_for,
            quantity_to_buy,
            &currency,
            total_price,
        )
    }

    pub fn bulk_buy(
        env: Env,
        buyer: Address,
        listing_ids: Vec<u64>,
        buy_for: Address,
        quantities_to_buy: Vec<i128>,
        currencies: Vec<Address>,
        total_prices: Vec<i128>,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let len = listing_ids.len();
        if quantities_to_buy.len() != len || currencies.len() != len || total_prices.len() != len {
            return Err(Error::ArrayLengthMismatch);
        }
        for i in 0..len {
            execute_buy(
                &env,
                &buyer,
                listing_ids.get_unchecked(i),
                &buy_for,
                quantities_to_buy.get_unchecked(i),
                &currencies.get_unchecked(i),
                total_prices.get_unchecked(i),
            )?;
        }
        Ok(())
    }

    pub fn get_listing(env: Env, listing_id: u64) -> Result<Listing, Error> {
        get_listing_by_id(&env, listing_id)
    }

    pub fn get_all_listings(env: Env) -> Vec<Listing> {
        let total: u64 = get_data(&env, &DataKey::TotalListings).unwrap_or(0);
        let mut listings: Vec<Listing> = Vec::new(&env);
        for listing_id in 0..total {
            if let Ok(listing) = get_listing_by_id(&env, listing_id) {
                listings.push_back(listing);
            }
        }
        listings
    }

    pub fn total_listings(env: Env) -> u64 {
        get_data(&env, &DataKey::TotalListings).unwrap_or(0)
    }
}

fn append_listing(env: &Env, lister: &Address, params: &ListingParams) -> Result<u64, Error> {
    if params.quantity_to_list <= 0 {
        return Err(Error::InvalidListingQuantity);
    }
    if params.buyout_price_per_token <= 0 {
        return Err(Error::InvalidListingPrice);
    }
    if !is_asset_approved(env, &params.asset_contract) {
        return Err(Error::AssetNotWhitelisted);
    }
    if !is_currency_approved(env, &params.currency_to_accept) {
        return Err(Error::CurrencyNotWhitelisted);
    }
    check_credential(env, lister)?;

    // No escrow at listing time; the owner's approval to this contract is
    // verified when the sale settles.
    let listing_id: u64 = get_data(env, &DataKey::TotalListings).unwrap_or(0);
    let listing = Listing {
        listing_id,
        token_owner: lister.clone(),
        asset_contract: params.asset_contract.clone(),
        token_id: params.token_id,
        quantity: params.quantity_to_list,
        currency: params.currency_to_accept.clone(),
        buyout_price_per_token: params.buyout_price_per_token,
        start_time: params.start_time,
        asset_kind: params.asset_kind,
    };
    store_persistent(env, &DataKey::Listing(listing_id), &listing);
    store_data(env, &DataKey::TotalListings, &(listing_id + 1));

    MarketplaceEvent::ListingAdded(
        listing_id,
        lister.clone(),
        params.asset_contract.clone(),
        params.quantity_to_list,
    )
    .publish(env);
    Ok(listing_id)
}

fn apply_listing_update(
    env: &Env,
    caller: &Address,
    listing_id: u64,
    quantity: i128,
    buyout_price_per_token: i128,
    currency: &Address,
    start_time: u64,
) -> Result<(), Error> {
    let mut listing = get_listing_by_id(env, listing_id)?;
    if listing.token_owner != *caller {
        return Err(Error::NotListingOwner);
    }
    if quantity <= 0 {
        return Err(Error::InvalidListingQuantity);
    }
    if buyout_price_per_token <= 0 {
        return Err(Error::InvalidListingPrice);
    }
    if !is_currency_approved(env, currency) {
        return Err(Error::CurrencyNotWhitelisted);
    }

    listing.quantity = quantity;
    listing.buyout_price_per_token = buyout_price_per_token;
    listing.currency = currency.clone();
    listing.start_time = start_time;
    store_persistent(env, &DataKey::Listing(listing_id), &listing);

    MarketplaceEvent::ListingUpdated(listing_id).publish(env);
    Ok(())
}

fn remove_listing_entry(env: &Env, caller: &Address, listing_id: u64) -> Result<(), Error> {
    let listing = get_listing_by_id(env, listing_id)?;
    if listing.token_owner != *caller {
        return Err(Error::NotListingOwner);
    }
    // The slot index stays allocated; ids are never reused.
    remove_persistent(env, &DataKey::Listing(listing_id));
    MarketplaceEvent::ListingCancelled(listing_id, caller.clone()).publish(env);
    Ok(())
}

fn execute_buy(
    env: &Env,
    buyer: &Address,
    listing_id: u64,
    buy_for: &Address,
    quantity_to_buy: i128,
    currency: &Address,
    total_price: i128,
) -> Result<(), Error> {
    let mut listing = get_listing_by_id(env, listing_id)?;

    let enforce_start: bool = get_data(env, &ENFORCE_START).unwrap_or(false);
    if enforce_start && env.ledger().timestamp() < listing.start_time {
        return Err(Error::ListingNotStarted);
    }
    if quantity_to_buy <= 0 {
        return Err(Error::InvalidListingQuantity);
    }
    if quantity_to_buy > listing.quantity {
        return Err(Error::InsufficientListingQuantity);
    }
    if *currency != listing.currency {
        return Err(Error::PaymentMismatch);
    }
    let expected_price = listing
        .buyout_price_per_token
        .checked_mul(quantity_to_buy)
        .ok_or(Error::PriceMismatch)?;
    if total_price != expected_price {
        return Err(Error::PriceMismatch);
    }

    // The quantity decrement is committed before any cross-contract call.
    // An exhausted listing keeps its zero-quantity record, so later buys
    // fail the quantity check rather than the existence check.
    listing.quantity -= quantity_to_buy;
    store_persistent(env, &DataKey::Listing(listing_id), &listing);

    settle_payment(env, &listing, buyer, total_price)?;
    transfer_listed_asset(env, &listing, buy_for, quantity_to_buy);

    MarketplaceEvent::NewSale(
        listing_id,
        buyer.clone(),
        buy_for.clone(),
        quantity_to_buy,
        total_price,
    )
    .publish(env);
    Ok(())
}
