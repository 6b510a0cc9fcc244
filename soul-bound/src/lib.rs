#![no_std]

//! Non-transferable membership token. Holding a balance >= 1 is the only
//! thing the marketplace ever asks of it, so the surface stays minimal:
//! admin mint/revoke plus the balance and ownership queries.

use common::soul_bound::{
    interface::SoulBoundInterface,
    types::{DataKey, Error, ADMIN},
};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, String, Symbol};

const TOKEN_NAME: Symbol = symbol_short!("NAME");
const TOKEN_SYMBOL: Symbol = symbol_short!("SYM");

#[contract]
pub struct SoulBoundContract;

#[contractimpl]
impl SoulBoundInterface for SoulBoundContract {
    fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&TOKEN_NAME, &name);
        env.storage().instance().set(&TOKEN_SYMBOL, &symbol);
        env.storage().instance().set(&DataKey::NextId, &0u64);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    fn name(env: Env) -> String {
        env.storage().instance().get(&TOKEN_NAME).unwrap()
    }

    fn symbol(env: Env) -> String {
        env.storage().instance().get(&TOKEN_SYMBOL).unwrap()
    }

    fn mint(env: Env, to: Address) -> Result<u64, Error> {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();

        let token_id: u64 = env.storage().instance().get(&DataKey::NextId).unwrap_or(0);
        env.storage().instance().set(&DataKey::NextId, &(token_id + 1));

        env.storage()
            .persistent()
            .set(&DataKey::Owner(token_id), &to);
        let balance: u32 = env
            .storage()
            .persistent()
            .get(&DataKey::Balance(to.clone()))
            .unwrap_or(0);
        env.storage()
            .persistent()
            .set(&DataKey::Balance(to), &(balance + 1));

        Ok(token_id)
    }

    fn revoke(env: Env, token_id: u64) -> Result<(), Error> {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();

        let holder: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::TokenNotFound)?;
        env.storage().persistent().remove(&DataKey::Owner(token_id));

        let balance: u32 = env
            .storage()
            .persistent()
            .get(&DataKey::Balance(holder.clone()))
            .unwrap_or(1);
        env.storage()
            .persistent()
            .set(&DataKey::Balance(holder), &(balance - 1));
        Ok(())
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::TokenNotFound)
    }

    fn transfer(_env: Env, _from: Address, _to: Address, _token_id: u64) -> Result<(), Error> {
        Err(Error::NonTransferable)
    }
}
