/// 7-decimal token, the Stellar asset convention.
pub const TOKEN_UNIT: i128 = 10_000_000;

/// Length of every window after window 0 (23 hours).
pub const WINDOW_DURATION: u64 = 82_800;

// Reserved shares, taken out of the supply before anything is sold.
pub const FOUNDATION_SHARE: i128 = 1_000_000 * TOKEN_UNIT;
pub const COMPANY_SHARE: i128 = 1_000_000 * TOKEN_UNIT;
pub const MARKETING_SHARE: i128 = 1_000_000 * TOKEN_UNIT;
pub const TEAM_MEMBER_SHARE: i128 = 250_000 * TOKEN_UNIT;
pub const TEAM_SIZE: u32 = 4;
pub const TOTAL_SHARES: i128 = FOUNDATION_SHARE
    + COMPANY_SHARE
    + MARKETING_SHARE
    + TEAM_MEMBER_SHARE * TEAM_SIZE as i128;

// Escrow split between foundation and company.
pub const FOUNDATION_PERCENT: u32 = 50;
pub const COMPANY_PERCENT: u32 = 50;
pub const VESTING_CLIFF: u64 = 31_536_000; // 1 year
pub const VESTING_DURATION: u64 = 10 * VESTING_CLIFF;

/// Number of entries reachable through `wallet(index)`.
pub const WALLET_COUNT: u32 = 5 + TEAM_SIZE;
