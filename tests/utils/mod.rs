/// Fixtures and assertions shared by the integration scenarios.
pub mod assertions;
pub mod test_fixtures;

pub use test_fixtures::*;

/// Common test constants
pub mod constants {
    use token_sale::constants::TOKEN_UNIT;

    pub const SALE_START: u64 = 1_700_000_000;
    pub const DAY: u64 = 86_400;
    pub const YEAR: u64 = 31_536_000;
    pub const OTHER_WINDOWS_START: u64 = SALE_START + 5 * DAY;
    pub const OTHER_WINDOWS: u32 = 237;
    pub const TOTAL_SUPPLY: i128 = 10_000_000 * TOKEN_UNIT;
    pub const FIRST_WINDOW_TOKENS: i128 = 75_000 * TOKEN_UNIT;
    pub const OTHER_WINDOW_TOKENS: i128 = 25_000 * TOKEN_UNIT;
    pub const BUYER_FUNDS: i128 = 1_000_000_000;
}
