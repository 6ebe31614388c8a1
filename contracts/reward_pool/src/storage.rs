use pool_common::ttl::{PERSISTENT_RENEWAL_THRESHOLD, PERSISTENT_TARGET_TTL};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PENDING_ADMIN: Symbol = symbol_short!("p_admin");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Token which is staked by the participants and in which rewards are paid
    pub stake_token: Address,
}
const CONFIG: Symbol = symbol_short!("CONFIG");

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&CONFIG)
        .expect("Reward Pool: Config not set")
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().instance().set(&CONFIG, &config);
}

/// State of a single participant. A record that was never written reads as an empty
/// position, and records are never removed.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// The amount of staked tokens
    pub stake: i128,
    /// Accumulator value when the position was last settled; the basis of the next payout
    pub settled_at: u128,
}

impl Position {
    pub fn is_open(&self) -> bool {
        self.stake != 0
    }
}

#[derive(Clone)]
#[contracttype]
pub enum ParticipantDataKey {
    Position(Address),
}

pub fn get_position(env: &Env, participant: &Address) -> Position {
    let key = ParticipantDataKey::Position(participant.clone());
    let position = env
        .storage()
        .persistent()
        .get::<_, Position>(&key)
        .unwrap_or_default();
    env.storage().persistent().has(&key).then(|| {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_RENEWAL_THRESHOLD,
            PERSISTENT_TARGET_TTL,
        );
    });

    position
}

pub fn save_position(env: &Env, participant: &Address, position: &Position) {
    let key = ParticipantDataKey::Position(participant.clone());
    env.storage().persistent().set(&key, position);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_RENEWAL_THRESHOLD,
        PERSISTENT_TARGET_TTL,
    );
}

pub mod utils {
    use crate::error::ContractError;

    use super::*;

    use pool_common::{
        ttl::{INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL},
        utils::AdminChange,
    };
    use soroban_sdk::{log, ConversionError, TryFromVal, Val};

    #[derive(Clone, Copy)]
    #[repr(u32)]
    pub enum DataKey {
        TotalStaked = 0,
        Accumulator = 1,
    }

    impl TryFromVal<Env, DataKey> for Val {
        type Error = ConversionError;

        fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
            Ok((*v as u32).into())
        }
    }

    pub fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
    }

    pub fn save_admin(e: &Env, address: &Address) {
        e.storage().instance().set(&ADMIN, address);
    }

    pub fn get_admin(e: &Env) -> Result<Address, ContractError> {
        e.storage().instance().get(&ADMIN).ok_or_else(|| {
            log!(e, "Reward Pool: Admin not set");
            ContractError::AdminNotSet
        })
    }

    pub fn save_pending_admin(e: &Env, change: &AdminChange) {
        e.storage().instance().set(&PENDING_ADMIN, change);
    }

    pub fn get_pending_admin(e: &Env) -> Option<AdminChange> {
        e.storage().instance().get(&PENDING_ADMIN)
    }

    pub fn remove_pending_admin(e: &Env) {
        e.storage().instance().remove(&PENDING_ADMIN);
    }

    pub fn init_pool_totals(e: &Env) {
        e.storage().instance().set(&DataKey::TotalStaked, &0i128);
        e.storage().instance().set(&DataKey::Accumulator, &0u128);
    }

    pub fn get_total_staked(e: &Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::TotalStaked)
            .unwrap_or(0)
    }

    pub fn increase_total_staked(e: &Env, amount: i128) -> Result<i128, ContractError> {
        let total = get_total_staked(e)
            .checked_add(amount)
            .ok_or(ContractError::ContractMathError)?;
        e.storage().instance().set(&DataKey::TotalStaked, &total);

        Ok(total)
    }

    pub fn decrease_total_staked(e: &Env, amount: i128) -> Result<i128, ContractError> {
        let total = get_total_staked(e)
            .checked_sub(amount)
            .filter(|total| *total >= 0)
            .ok_or(ContractError::ContractMathError)?;
        e.storage().instance().set(&DataKey::TotalStaked, &total);

        Ok(total)
    }

    pub fn get_accumulator(e: &Env) -> u128 {
        e.storage()
            .instance()
            .get(&DataKey::Accumulator)
            .unwrap_or(0)
    }

    /// Raises the accumulator by `delta`. There is no way to lower it.
    pub fn increase_accumulator(e: &Env, delta: u128) -> Result<u128, ContractError> {
        let accumulator = get_accumulator(e)
            .checked_add(delta)
            .ok_or(ContractError::ContractMathError)?;
        e.storage()
            .instance()
            .set(&DataKey::Accumulator, &accumulator);

        Ok(accumulator)
    }
}
