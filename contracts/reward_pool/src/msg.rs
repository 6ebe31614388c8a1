use soroban_sdk::contracttype;

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionResponse {
    /// Amount of tokens currently staked by the participant
    pub stake: i128,
    /// Value of the reward accumulator at the last settlement of this position
    pub settled_at: u128,
}
