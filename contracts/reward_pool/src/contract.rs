use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Symbol};

use pool_common::utils::AdminChange;

use crate::{
    distribution::{accumulator_delta, owed_reward},
    error::ContractError,
    ledger::LedgerGateway,
    msg::{ConfigResponse, PositionResponse},
    storage::{
        get_config, get_position, save_config, save_position,
        utils::{
            self, extend_instance_ttl, get_accumulator, get_admin, get_pending_admin,
            get_total_staked,
        },
        Config, Position,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Pro rata reward distribution pool for stakers of a single token"
);

#[contract]
pub struct RewardPool;

pub trait RewardPoolTrait {
    // Deposits `amount` tokens of `participant` and opens their position.
    // Only one position can be open at a time.
    fn stake(env: Env, participant: Address, amount: i128) -> Result<(), ContractError>;

    // Withdraws `amount` of the staked tokens together with every reward earned by the
    // whole position so far.
    fn unstake(env: Env, participant: Address, amount: i128) -> Result<(), ContractError>;

    // Adds `amount` tokens of the admin to the pool, shared by the current stakers
    // in proportion to their stake.
    fn distribute(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    fn propose_admin(
        env: Env,
        new_admin: Address,
        time_limit: Option<u64>,
    ) -> Result<Address, ContractError>;

    fn revoke_admin_change(env: Env) -> Result<(), ContractError>;

    fn accept_admin(env: Env) -> Result<Address, ContractError>;

    // QUERIES

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Result<Address, ContractError>;

    fn query_position(env: Env, participant: Address) -> PositionResponse;

    fn query_total_staked(env: Env) -> i128;

    fn query_accumulator(env: Env) -> u128;

    fn query_pending_reward(env: Env, participant: Address) -> Result<i128, ContractError>;

    fn query_pool_balance(env: Env) -> i128;
}

#[contractimpl]
impl RewardPool {
    pub fn __constructor(env: Env, admin: Address, stake_token: Address) {
        utils::save_admin(&env, &admin);
        utils::init_pool_totals(&env);
        save_config(
            &env,
            Config {
                stake_token: stake_token.clone(),
            },
        );

        env.events()
            .publish(("initialize", "reward pool"), stake_token);
    }
}

#[contractimpl]
impl RewardPoolTrait for RewardPool {
    fn stake(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        participant.require_auth();
        extend_instance_ttl(&env);

        if amount <= 0 {
            log!(
                &env,
                "Reward Pool: Stake: Trying to stake {} which is not a positive amount",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }

        let position = get_position(&env, &participant);
        if position.is_open() {
            log!(
                &env,
                "Reward Pool: Stake: Participant already has an open position of {}",
                position.stake
            );
            return Err(ContractError::PositionAlreadyOpen);
        }

        let config = get_config(&env);
        LedgerGateway::new(&env, &config.stake_token).transfer_in(&participant, amount)?;

        // a fresh position must not claim anything distributed before it was opened
        let position = Position {
            stake: amount,
            settled_at: get_accumulator(&env),
        };
        save_position(&env, &participant, &position);
        utils::increase_total_staked(&env, amount)?;

        env.events()
            .publish((Symbol::new(&env, "staked"), participant), amount);

        Ok(())
    }

    fn unstake(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        participant.require_auth();
        extend_instance_ttl(&env);

        let mut position = get_position(&env, &participant);
        if !position.is_open() {
            log!(&env, "Reward Pool: Unstake: No active position to unstake from");
            return Err(ContractError::NoActivePosition);
        }
        if amount <= 0 {
            log!(
                &env,
                "Reward Pool: Unstake: Trying to unstake {} which is not a positive amount",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }
        if amount > position.stake {
            log!(
                &env,
                "Reward Pool: Unstake: Trying to unstake {} while only {} is staked",
                amount,
                position.stake
            );
            return Err(ContractError::ExceedsStake);
        }

        // the whole position is settled, no matter how much of it is withdrawn
        let accumulator = get_accumulator(&env);
        let reward = owed_reward(position.stake as u128, accumulator, position.settled_at)
            .and_then(|reward| i128::try_from(reward).ok())
            .ok_or(ContractError::ContractMathError)?;
        let payout = amount
            .checked_add(reward)
            .ok_or(ContractError::ContractMathError)?;

        let config = get_config(&env);
        LedgerGateway::new(&env, &config.stake_token).transfer_out(&participant, payout)?;

        position.stake -= amount;
        position.settled_at = accumulator;
        save_position(&env, &participant, &position);
        utils::decrease_total_staked(&env, amount)?;

        env.events()
            .publish((Symbol::new(&env, "unstaked"), participant), payout);

        Ok(())
    }

    fn distribute(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();
        extend_instance_ttl(&env);

        if sender != get_admin(&env)? {
            log!(
                &env,
                "Reward Pool: Distribute: You are not authorized to distribute rewards!"
            );
            return Err(ContractError::NotAuthorized);
        }
        if amount < 0 {
            log!(
                &env,
                "Reward Pool: Distribute: Trying to distribute negative amount {}",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }

        let total_staked = get_total_staked(&env);
        if total_staked <= 0 {
            log!(
                &env,
                "Reward Pool: Distribute: There are no stakers to distribute rewards to"
            );
            return Err(ContractError::NoParticipants);
        }

        let delta = accumulator_delta(amount as u128, total_staked as u128)
            .ok_or(ContractError::ContractMathError)?;

        let config = get_config(&env);
        LedgerGateway::new(&env, &config.stake_token).transfer_in(&sender, amount)?;

        utils::increase_accumulator(&env, delta)?;

        env.events()
            .publish((Symbol::new(&env, "distributed"),), amount);

        Ok(())
    }

    fn propose_admin(
        env: Env,
        new_admin: Address,
        time_limit: Option<u64>,
    ) -> Result<Address, ContractError> {
        let current_admin = get_admin(&env)?;
        current_admin.require_auth();
        extend_instance_ttl(&env);

        if current_admin == new_admin {
            log!(&env, "Reward Pool: Propose admin: Trying to set the same admin");
            return Err(ContractError::SameAdmin);
        }

        utils::save_pending_admin(
            &env,
            &AdminChange {
                new_admin: new_admin.clone(),
                time_limit,
            },
        );

        env.events()
            .publish(("admin", "proposed"), new_admin.clone());

        Ok(new_admin)
    }

    fn revoke_admin_change(env: Env) -> Result<(), ContractError> {
        let current_admin = get_admin(&env)?;
        current_admin.require_auth();
        extend_instance_ttl(&env);

        let Some(change) = get_pending_admin(&env) else {
            log!(&env, "Reward Pool: Revoke admin change: No admin change in place");
            return Err(ContractError::NoAdminChangeInPlace);
        };
        utils::remove_pending_admin(&env);

        env.events()
            .publish(("admin", "revoked"), change.new_admin);

        Ok(())
    }

    fn accept_admin(env: Env) -> Result<Address, ContractError> {
        extend_instance_ttl(&env);

        let Some(change) = get_pending_admin(&env) else {
            log!(&env, "Reward Pool: Accept admin: No admin change in place");
            return Err(ContractError::NoAdminChangeInPlace);
        };
        change.new_admin.require_auth();

        if change.is_expired(env.ledger().timestamp()) {
            log!(&env, "Reward Pool: Accept admin: Admin change expired");
            return Err(ContractError::AdminChangeExpired);
        }

        utils::remove_pending_admin(&env);
        utils::save_admin(&env, &change.new_admin);

        env.events()
            .publish(("admin", "accepted"), change.new_admin.clone());

        Ok(change.new_admin)
    }

    // QUERIES

    fn query_config(env: Env) -> ConfigResponse {
        extend_instance_ttl(&env);
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Result<Address, ContractError> {
        extend_instance_ttl(&env);
        get_admin(&env)
    }

    fn query_position(env: Env, participant: Address) -> PositionResponse {
        extend_instance_ttl(&env);
        let position = get_position(&env, &participant);
        PositionResponse {
            stake: position.stake,
            settled_at: position.settled_at,
        }
    }

    fn query_total_staked(env: Env) -> i128 {
        extend_instance_ttl(&env);
        get_total_staked(&env)
    }

    fn query_accumulator(env: Env) -> u128 {
        extend_instance_ttl(&env);
        get_accumulator(&env)
    }

    fn query_pending_reward(env: Env, participant: Address) -> Result<i128, ContractError> {
        extend_instance_ttl(&env);
        let position = get_position(&env, &participant);
        owed_reward(
            position.stake as u128,
            get_accumulator(&env),
            position.settled_at,
        )
        .and_then(|reward| i128::try_from(reward).ok())
        .ok_or(ContractError::ContractMathError)
    }

    fn query_pool_balance(env: Env) -> i128 {
        extend_instance_ttl(&env);
        let config = get_config(&env);
        LedgerGateway::new(&env, &config.stake_token).balance_of(&env.current_contract_address())
    }
}
