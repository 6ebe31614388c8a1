/// Ledgers closed in a day, assuming ~5 seconds per ledger.
pub const DAY_IN_LEDGERS: u32 = 17280;

// the pool instance (config, admin and totals) is kept alive for a week after every touch
pub const INSTANCE_TARGET_TTL: u32 = 7 * DAY_IN_LEDGERS;
// no extension is written while more than six days are left
pub const INSTANCE_RENEWAL_THRESHOLD: u32 = INSTANCE_TARGET_TTL - DAY_IN_LEDGERS;

// participant positions live for a month after they were last read or written
pub const PERSISTENT_TARGET_TTL: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_RENEWAL_THRESHOLD: u32 = PERSISTENT_TARGET_TTL - DAY_IN_LEDGERS;
