use soroban_sdk::{contractclient, Address, Env};

/// Optional capability on an asset contract. Settlement probes for it with
/// the generated `try_` client; a contract that does not export
/// `royalty_info` (or traps in it) is treated as paying no royalty.
#[contractclient(name = "RoyaltyClient")]
pub trait RoyaltyInterface {
    fn royalty_info(env: Env, token_id: u64, sale_price: i128) -> (Address, i128);
}
