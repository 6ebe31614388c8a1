use soroban_sdk::{log, token, Address, Env};

use crate::error::ContractError;

/// Moves the staked token in and out of the custody of the pool.
///
/// Transfers go through `try_transfer`, so a declined transfer is reported as
/// `TransferFailed` and the calling operation can return it instead of trapping.
pub struct LedgerGateway<'a> {
    env: &'a Env,
    token: token::Client<'a>,
}

impl<'a> LedgerGateway<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        LedgerGateway {
            env,
            token: token::Client::new(env, asset),
        }
    }

    /// Moves `amount` from the external balance of `from` into the pool.
    pub fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        if amount == 0 {
            return Ok(());
        }
        let pool = self.env.current_contract_address();
        self.transfer(from, &pool, amount)
    }

    /// Moves `amount` held by the pool to `to`.
    pub fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        let pool = self.env.current_contract_address();
        self.transfer(&pool, to, amount)
    }

    pub fn balance_of(&self, account: &Address) -> i128 {
        self.token.balance(account)
    }

    fn transfer(&self, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
        match self.token.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(
                    self.env,
                    "Reward Pool: Ledger: transfer of {} from {} to {} was declined",
                    amount,
                    from,
                    to
                );
                Err(ContractError::TransferFailed)
            }
        }
    }
}
