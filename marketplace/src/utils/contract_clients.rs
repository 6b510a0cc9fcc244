use crate::{
    storage::get_data,
    types::{KYB_TOKEN, KYC_TOKEN},
};
use common::{
    nft::interface::NftContractClient, royalty::interface::RoyaltyClient,
    semi_fungible::interface::SemiFungibleContractClient,
    soul_bound::interface::SoulBoundContractClient,
};
use soroban_sdk::{token, Address, Env};

pub fn get_nft_client<'a>(env: &'a Env, asset_contract: &Address) -> NftContractClient<'a> {
    NftContractClient::new(env, asset_contract)
}

pub fn get_semi_fungible_client<'a>(
    env: &'a Env,
    asset_contract: &Address,
) -> SemiFungibleContractClient<'a> {
    SemiFungibleContractClient::new(env, asset_contract)
}

pub fn get_royalty_client<'a>(env: &'a Env, asset_contract: &Address) -> RoyaltyClient<'a> {
    RoyaltyClient::new(env, asset_contract)
}

pub fn get_currency_client<'a>(env: &'a Env, currency: &Address) -> token::Client<'a> {
    token::Client::new(env, currency)
}

pub fn get_kyc_client(env: &Env) -> SoulBoundContractClient<'_> {
    let kyc_ca: Address = get_data(env, &KYC_TOKEN).unwrap();
    SoulBoundContractClient::new(env, &kyc_ca)
}

pub fn get_kyb_client(env: &Env) -> SoulBoundContractClient<'_> {
    let kyb_ca: Address = get_data(env, &KYB_TOKEN).unwrap();
    SoulBoundContractClient::new(env, &kyb_ca)
}
