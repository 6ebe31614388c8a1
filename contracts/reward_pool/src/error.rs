use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidAmount = 800,
    PositionAlreadyOpen = 801,
    NoActivePosition = 802,
    ExceedsStake = 803,
    NoParticipants = 804,
    NotAuthorized = 805,
    TransferFailed = 806,
    ContractMathError = 807,
    AdminNotSet = 808,
    SameAdmin = 809,
    NoAdminChangeInPlace = 810,
    AdminChangeExpired = 811,
}
