#![cfg(test)]
extern crate std;

use crate::{SemiFungibleContract, SemiFungibleContractClient};
use common::semi_fungible::types::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

fn setup<'a>() -> (Env, SemiFungibleContractClient<'a>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(SemiFungibleContract, ());
    let client = SemiFungibleContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin, alice, bob)
}

#[test]
fn test_mint_and_transfer() {
    let (_env, client, _admin, alice, bob) = setup();

    client.mint(&alice, &1u64, &1_000_i128);
    assert_eq!(client.balance_of(&alice, &1u64), 1_000);

    client.transfer(&alice, &bob, &1u64, &100_i128);
    assert_eq!(client.balance_of(&alice, &1u64), 900);
    assert_eq!(client.balance_of(&bob, &1u64), 100);
}

#[test]
fn test_transfer_from_requires_operator_approval() {
    let (env, client, _admin, alice, bob) = setup();
    let operator = Address::generate(&env);

    client.mint(&alice, &7u64, &50_i128);

    let res = client.try_transfer_from(&operator, &alice, &bob, &7u64, &10_i128);
    assert_eq!(res, Err(Ok(Error::NotApproved)));

    client.set_approval_for_all(&alice, &operator, &true);
    client.transfer_from(&operator, &alice, &bob, &7u64, &10_i128);
    assert_eq!(client.balance_of(&bob, &7u64), 10);

    client.set_approval_for_all(&alice, &operator, &false);
    let res = client.try_transfer_from(&operator, &alice, &bob, &7u64, &10_i128);
    assert_eq!(res, Err(Ok(Error::NotApproved)));
}

#[test]
fn test_transfer_more_than_balance_fails() {
    let (_env, client, _admin, alice, bob) = setup();

    client.mint(&alice, &3u64, &5_i128);
    let res = client.try_transfer(&alice, &bob, &3u64, &6_i128);
    assert_eq!(res, Err(Ok(Error::InsufficientBalance)));
}
