use super::types::Error;
use soroban_sdk::{contractclient, Address, BytesN, Env, String};

#[contractclient(name = "SoulBoundContractClient")]
pub trait SoulBoundInterface {
    fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address) -> Result<u64, Error>;
    fn revoke(env: Env, token_id: u64) -> Result<(), Error>;
    fn balance_of(env: Env, owner: Address) -> u32;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
}
