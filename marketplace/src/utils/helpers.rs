use soroban_sdk::{Address, Env};

use crate::{
    storage::{get_data, get_persistent},
    types::{
        AssetKind, DataKey, Error, Listing, ADMIN, BPS_DENOMINATOR, FEE_BPS, FEE_RECIPIENT,
        NATIVE_TOKEN, PUBLIC_LISTING, WHITELISTER,
    },
};

use super::contract_clients::{
    get_currency_client, get_kyb_client, get_kyc_client, get_nft_client, get_royalty_client,
    get_semi_fungible_client,
};

pub fn check_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin: Address = get_data(env, &ADMIN).unwrap();
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn check_whitelister(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin: Address = get_data(env, &ADMIN).unwrap();
    let whitelister: Address = get_data(env, &WHITELISTER).unwrap();
    if *caller != admin && *caller != whitelister {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn get_listing_by_id(env: &Env, listing_id: u64) -> Result<Listing, Error> {
    get_persistent(env, &DataKey::Listing(listing_id)).ok_or(Error::ListingNotFound)
}

/// The configured native token is the sentinel currency and is always
/// accepted; everything else goes through the whitelist map.
pub fn is_currency_approved(env: &Env, currency: &Address) -> bool {
    let native: Address = get_data(env, &NATIVE_TOKEN).unwrap();
    if *currency == native {
        return true;
    }
    get_persistent(env, &DataKey::WhitelistedCurrency(currency.clone())).unwrap_or(false)
}

pub fn is_asset_approved(env: &Env, asset_contract: &Address) -> bool {
    get_persistent(env, &DataKey::WhitelistedAsset(asset_contract.clone())).unwrap_or(false)
}

/// KYC/KYB gate for listing creation. Holding either credential is enough;
/// the check is skipped entirely while public listing is enabled.
pub fn check_credential(env: &Env, lister: &Address) -> Result<(), Error> {
    let public_listing: bool = get_data(env, &PUBLIC_LISTING).unwrap_or(false);
    if public_listing {
        return Ok(());
    }
    if get_kyc_client(env).balance_of(lister) >= 1 {
        return Ok(());
    }
    if get_kyb_client(env).balance_of(lister) >= 1 {
        return Ok(());
    }
    Err(Error::NotASoulBoundOwner)
}

/// Pays the three settlement legs in the listing currency. The seller leg is
/// the residual, so the legs always sum to exactly `total_price`.
pub fn settle_payment(
    env: &Env,
    listing: &Listing,
    buyer: &Address,
    total_price: i128,
) -> Result<(), Error> {
    let currency = get_currency_client(env, &listing.currency);
    if currency.balance(buyer) < total_price {
        return Err(Error::PaymentMismatch);
    }

    let fee_bps: u32 = get_data(env, &FEE_BPS).unwrap();
    let platform_cut = total_price * i128::from(fee_bps) / BPS_DENOMINATOR;
    let royalty = royalty_for(env, listing, total_price, total_price - platform_cut);
    let royalty_amount = royalty.as_ref().map(|(_, amount)| *amount).unwrap_or(0);
    let seller_proceeds = total_price - platform_cut - royalty_amount;

    if platform_cut > 0 {
        let fee_recipient: Address = get_data(env, &FEE_RECIPIENT).unwrap();
        currency.transfer(buyer, &fee_recipient, &platform_cut);
    }
    if let Some((royalty_recipient, amount)) = royalty {
        currency.transfer(buyer, &royalty_recipient, &amount);
    }
    currency.transfer(buyer, &listing.token_owner, &seller_proceeds);
    Ok(())
}

/// Probes the asset contract for the optional royalty hook. Only unique
/// assets pay royalties; a contract that does not export the hook, or whose
/// hook traps, pays none. A reported amount is capped at `max` so the seller
/// residual cannot go negative.
fn royalty_for(
    env: &Env,
    listing: &Listing,
    total_price: i128,
    max: i128,
) -> Option<(Address, i128)> {
    if listing.asset_kind != AssetKind::Unique {
        return None;
    }
    let royalty_client = get_royalty_client(env, &listing.asset_contract);
    match royalty_client.try_royalty_info(&listing.token_id, &total_price) {
        Ok(Ok((recipient, amount))) if amount > 0 => Some((recipient, amount.min(max))),
        _ => None,
    }
}

/// Moves the sold units from the listing owner to the buyer's recipient,
/// dispatched on asset kind. Relies on the owner's standing approval to this
/// contract; a revoked approval traps here and aborts the whole purchase.
pub fn transfer_listed_asset(env: &Env, listing: &Listing, to: &Address, quantity: i128) {
    let spender = env.current_contract_address();
    match listing.asset_kind {
        AssetKind::Fungible => {
            get_currency_client(env, &listing.asset_contract).transfer_from(
                &spender,
                &listing.token_owner,
                to,
                &quantity,
            );
        }
        AssetKind::Unique => {
            get_nft_client(env, &listing.asset_contract).transfer_from(
                &spender,
                &listing.token_owner,
                to,
                &listing.token_id,
            );
        }
        AssetKind::SemiFungible => {
            get_semi_fungible_client(env, &listing.asset_contract).transfer_from(
                &spender,
                &listing.token_owner,
                to,
                &listing.token_id,
                &quantity,
            );
        }
    }
}
