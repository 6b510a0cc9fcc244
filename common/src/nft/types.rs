use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    TokenAlreadyMinted = 2,
    TokenNotFound = 3,
    NotTokenOwner = 4,
    NotApproved = 5,
    RoyaltyNotConfigured = 6,
    InvalidRoyaltyBps = 7,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner(u64),                        // token id -> holder
    Balance(Address),                  // holder -> token count
    TokenApproval(u64),                // token id -> approved operator
    OperatorApproval(Address, Address), // (holder, operator) -> approved for all
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoyaltyConfig {
    pub recipient: Address,
    pub royalty_bps: u32,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const ROYALTY: Symbol = symbol_short!("ROYALTY");
