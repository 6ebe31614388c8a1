use soroban_sdk::{contracttype, Address};

/// Pending handover of the administrator role, created by the current admin and
/// completed by the proposed one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChange {
    pub new_admin: Address,
    /// Last ledger timestamp at which the proposal can still be accepted
    pub time_limit: Option<u64>,
}

impl AdminChange {
    pub fn is_expired(&self, now: u64) -> bool {
        match self.time_limit {
            Some(limit) => now > limit,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};
    use test_case::test_case;

    #[test_case(None, 0, false; "no limit at genesis never expires")]
    #[test_case(None, u64::MAX, false; "no limit never expires")]
    #[test_case(Some(1_500), 1_000, false; "before the limit")]
    #[test_case(Some(1_500), 1_500, false; "exactly on the limit")]
    #[test_case(Some(1_500), 1_501, true; "one second after the limit")]
    fn admin_change_expiry(time_limit: Option<u64>, now: u64, expired: bool) {
        let env = Env::default();
        let change = AdminChange {
            new_admin: Address::generate(&env),
            time_limit,
        };

        assert_eq!(change.is_expired(now), expired);
    }
}
