#![no_std]

mod events;

use common::semi_fungible::{
    interface::SemiFungibleInterface,
    types::{DataKey, Error, ADMIN},
};
use events::SemiFungibleEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol};

#[contract]
pub struct SemiFungibleContract;

#[contractimpl]
impl SemiFungibleInterface for SemiFungibleContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&ADMIN, &admin);
        SemiFungibleEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        SemiFungibleEvent::Upgraded(Self::version()).publish(&env);
    }

    fn mint(env: Env, to: Address, token_id: u64, amount: i128) -> Result<(), Error> {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let balance = balance(&env, &to, token_id);
        set_balance(&env, &to, token_id, balance + amount);
        SemiFungibleEvent::Mint(token_id, to, amount).publish(&env);
        Ok(())
    }

    fn balance_of(env: Env, owner: Address, token_id: u64) -> i128 {
        balance(&env, &owner, token_id)
    }

    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();

        let key = DataKey::OperatorApproval(owner.clone(), operator.clone());
        if approved {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }
        SemiFungibleEvent::ApprovalForAll(owner, operator, approved).publish(&env);
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::OperatorApproval(owner, operator))
            .unwrap_or(false)
    }

    fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        from.require_auth();
        move_balance(&env, &from, &to, token_id, amount)
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();

        let approved: bool = env
            .storage()
            .persistent()
            .get(&DataKey::OperatorApproval(from.clone(), spender))
            .unwrap_or(false);
        if !approved {
            return Err(Error::NotApproved);
        }
        move_balance(&env, &from, &to, token_id, amount)
    }
}

fn balance(env: &Env, owner: &Address, token_id: u64) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone(), token_id))
        .unwrap_or(0)
}

fn set_balance(env: &Env, owner: &Address, token_id: u64, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(owner.clone(), token_id), &amount);
}

fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    token_id: u64,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let from_balance = balance(env, from, token_id);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }
    set_balance(env, from, token_id, from_balance - amount);
    set_balance(env, to, token_id, balance(env, to, token_id) + amount);
    SemiFungibleEvent::Transfer(token_id, from.clone(), to.clone(), amount).publish(env);
    Ok(())
}

#[cfg(test)]
mod test;
