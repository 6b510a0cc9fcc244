use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    ListingNotFound = 3,
    NotListingOwner = 4,
    NotASoulBoundOwner = 5,
    AssetNotWhitelisted = 6,
    CurrencyNotWhitelisted = 7,
    InsufficientListingQuantity = 8,
    PriceMismatch = 9,
    PaymentMismatch = 10,
    ArrayLengthMismatch = 11,
    InvalidListingQuantity = 12,
    ListingNotStarted = 13,
    InvalidPlatformFee = 14,
    InvalidListingPrice = 15,
}

/// Which transfer primitive the listed asset contract speaks.
#[contracttype]
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Fungible = 1,
    Unique = 2,
    SemiFungible = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub listing_id: u64,
    pub token_owner: Address,
    pub asset_contract: Address,
    pub token_id: u64,
    pub quantity: i128,
    pub currency: Address,
    pub buyout_price_per_token: i128,
    pub start_time: u64,
    pub asset_kind: AssetKind,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ListingParams {
    pub asset_contract: Address,
    pub token_id: u64,
    pub quantity_to_list: i128,
    pub currency_to_accept: Address,
    pub buyout_price_per_token: i128,
    pub start_time: u64,
    pub asset_kind: AssetKind,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),                  // id slots are never reused or compacted
    TotalListings,
    WhitelistedCurrency(Address),
    WhitelistedAsset(Address),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const FEE_RECIPIENT: Symbol = symbol_short!("FEE_RCPT");
pub const FEE_BPS: Symbol = symbol_short!("FEE_BPS");
pub const NATIVE_TOKEN: Symbol = symbol_short!("NATIVE");
pub const KYC_TOKEN: Symbol = symbol_short!("KYC_CA");
pub const KYB_TOKEN: Symbol = symbol_short!("KYB_CA");
pub const WHITELISTER: Symbol = symbol_short!("WL_ROLE");
pub const PUBLIC_LISTING: Symbol = symbol_short!("PUB_LIST");
pub const ENFORCE_START: Symbol = symbol_short!("ENF_START");

pub const BPS_DENOMINATOR: i128 = 10_000;
