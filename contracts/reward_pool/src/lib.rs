#![no_std]
mod contract;
mod distribution;
mod error;
mod ledger;
mod msg;
mod storage;

pub use crate::contract::{RewardPool, RewardPoolClient};
pub use crate::error::ContractError;
pub use crate::msg::{ConfigResponse, PositionResponse};
