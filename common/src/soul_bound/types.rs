use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NonTransferable = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    NextId,
    Owner(u64),       // token id -> holder
    Balance(Address), // holder -> credential count
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
