use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, testutils::Address as _, testutils::Events,
    token, Address, Env, Symbol, Val, Vec,
};

use crate::contract::{RewardPool, RewardPoolClient};

pub const SCALE: u128 = crate::distribution::SCALE;

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    token::Client::new(
        env,
        &env.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn mint(env: &Env, token: &token::Client, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

pub fn deploy_reward_pool_contract<'a>(
    env: &Env,
    admin: impl Into<Option<Address>>,
    stake_token: &Address,
) -> RewardPoolClient<'a> {
    let admin = admin.into().unwrap_or(Address::generate(env));
    RewardPoolClient::new(env, &env.register(RewardPool, (&admin, stake_token)))
}

/// Deploys a stake token and a pool, and funds the admin with `admin_funds` for rewards.
pub fn setup<'a>(env: &Env, admin_funds: i128) -> (Address, token::Client<'a>, RewardPoolClient<'a>) {
    let admin = Address::generate(env);
    let stake_token = deploy_token_contract(env, &admin);
    let pool = deploy_reward_pool_contract(env, admin.clone(), &stake_token.address);

    if admin_funds > 0 {
        mint(env, &stake_token, &admin, admin_funds);
    }

    (admin, stake_token, pool)
}

/// The last event published in the most recent invocation.
pub fn last_event(env: &Env) -> Vec<(Address, Vec<Val>, Val)> {
    let events = env.events().all();
    events.slice(events.len() - 1..)
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum LedgerError {
    Frozen = 1,
}

const FROZEN: Symbol = symbol_short!("FROZEN");

/// Token which accepts every transfer until it is frozen, and declines every one after.
/// It keeps no balances.
#[contract]
pub struct FreezableLedger;

#[contractimpl]
impl FreezableLedger {
    pub fn freeze(env: Env) {
        env.storage().instance().set(&FROZEN, &true);
    }

    pub fn transfer(env: Env, _from: Address, _to: Address, _amount: i128) -> Result<(), LedgerError> {
        if env.storage().instance().get(&FROZEN).unwrap_or(false) {
            return Err(LedgerError::Frozen);
        }
        Ok(())
    }

    pub fn balance(_env: Env, _id: Address) -> i128 {
        0
    }
}

pub fn deploy_freezable_ledger<'a>(env: &Env) -> FreezableLedgerClient<'a> {
    FreezableLedgerClient::new(env, &env.register(FreezableLedger, ()))
}
