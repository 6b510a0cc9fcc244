use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env, String, Symbol};

use crate::{
    events::NftEvent,
    storage::{get_data, get_persistent, has_persistent, remove_persistent, store_data,
        store_persistent},
};
use common::nft::{
    interface::NftInterface,
    types::{DataKey, Error, RoyaltyConfig, ADMIN, ROYALTY},
};
use common::royalty::interface::RoyaltyInterface;

const NAME: &str = "Mock Marketplace NFT";
const SYMBOL: &str = "MNFT";

const BPS_DENOMINATOR: i128 = 10_000;

#[contract]
pub struct NftContract;

#[contractimpl]
impl NftInterface for NftContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        NftEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        NftEvent::Upgraded(Self::version()).publish(&env);
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn mint(env: Env, to: Address, token_id: u64) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if has_persistent(&env, &DataKey::Owner(token_id)) {
            return Err(Error::TokenAlreadyMinted);
        }
        store_persistent(&env, &DataKey::Owner(token_id), &to);

        let balance: u32 = get_persistent(&env, &DataKey::Balance(to.clone())).unwrap_or(0);
        store_persistent(&env, &DataKey::Balance(to.clone()), &(balance + 1));

        NftEvent::Mint(token_id, to).publish(&env);
        Ok(())
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        get_persistent(&env, &DataKey::Balance(owner)).unwrap_or(0)
    }

    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let holder: Address =
            get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)?;
        if holder != owner {
            return Err(Error::NotTokenOwner);
        }
        store_persistent(&env, &DataKey::TokenApproval(token_id), &operator);
        Ok(())
    }

    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();

        let key = DataKey::OperatorApproval(owner.clone(), operator.clone());
        if approved {
            store_persistent(&env, &key, &true);
        } else {
            remove_persistent(&env, &key);
        }
        NftEvent::ApprovalForAll(owner, operator, approved).publish(&env);
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        get_persistent(&env, &DataKey::OperatorApproval(owner, operator)).unwrap_or(false)
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let holder: Address =
            get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)?;
        if holder != from {
            return Err(Error::NotTokenOwner);
        }
        move_token(&env, &from, &to, token_id);
        Ok(())
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let holder: Address =
            get_persistent(&env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)?;
        if holder != from {
            return Err(Error::NotTokenOwner);
        }

        let approved_for_all: bool =
            get_persistent(&env, &DataKey::OperatorApproval(from.clone(), spender.clone()))
                .unwrap_or(false);
        let approved_for_token: Option<Address> =
            get_persistent(&env, &DataKey::TokenApproval(token_id));
        if !approved_for_all && approved_for_token != Some(spender) {
            return Err(Error::NotApproved);
        }

        move_token(&env, &from, &to, token_id);
        Ok(())
    }

    fn set_default_royalty(env: Env, recipient: Address, royalty_bps: u32) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if i128::from(royalty_bps) > BPS_DENOMINATOR {
            return Err(Error::InvalidRoyaltyBps);
        }
        store_data(
            &env,
            &ROYALTY,
            &RoyaltyConfig {
                recipient: recipient.clone(),
                royalty_bps,
            },
        );
        NftEvent::RoyaltySet(recipient, royalty_bps).publish(&env);
        Ok(())
    }
}

#[contractimpl]
impl RoyaltyInterface for NftContract {
    fn royalty_info(env: Env, _token_id: u64, sale_price: i128) -> (Address, i128) {
        let config: RoyaltyConfig = match get_data(&env, &ROYALTY) {
            Some(config) => config,
            None => panic_with_error!(&env, Error::RoyaltyNotConfigured),
        };
        let amount = sale_price * i128::from(config.royalty_bps) / BPS_DENOMINATOR;
        (config.recipient, amount)
    }
}

fn move_token(env: &Env, from: &Address, to: &Address, token_id: u64) {
    store_persistent(env, &DataKey::Owner(token_id), to);
    remove_persistent(env, &DataKey::TokenApproval(token_id));

    let from_balance: u32 = get_persistent(env, &DataKey::Balance(from.clone())).unwrap_or(1);
    store_persistent(env, &DataKey::Balance(from.clone()), &(from_balance - 1));
    let to_balance: u32 = get_persistent(env, &DataKey::Balance(to.clone())).unwrap_or(0);
    store_persistent(env, &DataKey::Balance(to.clone()), &(to_balance + 1));

    NftEvent::Transfer(token_id, from.clone(), to.clone()).publish(env);
}
