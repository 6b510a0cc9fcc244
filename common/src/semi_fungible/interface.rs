use super::types::Error;
use soroban_sdk::{contractclient, Address, BytesN, Env};

#[contractclient(name = "SemiFungibleContractClient")]
pub trait SemiFungibleInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn mint(env: Env, to: Address, token_id: u64, amount: i128) -> Result<(), Error>;
    fn balance_of(env: Env, owner: Address, token_id: u64) -> i128;
    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool);
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u64,
        amount: i128,
    ) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
        amount: i128,
    ) -> Result<(), Error>;
}
