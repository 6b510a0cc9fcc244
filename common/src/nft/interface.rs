use super::types::Error;
use soroban_sdk::{contractclient, Address, BytesN, Env, String};

#[contractclient(name = "NftContractClient")]
pub trait NftInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, token_id: u64) -> Result<(), Error>;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn balance_of(env: Env, owner: Address) -> u32;
    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error>;
    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool);
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
    fn set_default_royalty(env: Env, recipient: Address, royalty_bps: u32) -> Result<(), Error>;
}
