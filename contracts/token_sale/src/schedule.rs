//! Window clock and emission schedule. Both are pure functions of the sale
//! configuration and their argument; the contract feeds them the ledger
//! timestamp.

use crate::constants::WINDOW_DURATION;
use crate::types::{EmissionConfig, SaleConfig};

/// Window 0 covers everything before `other_windows_start`; after that a new
/// window opens every `WINDOW_DURATION` seconds.
pub fn window_for(config: &SaleConfig, timestamp: u64) -> u32 {
    if timestamp < config.other_windows_start {
        return 0;
    }
    let elapsed_windows = (timestamp - config.other_windows_start) / WINDOW_DURATION;
    u32::try_from(elapsed_windows)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// Token budget of `window`. Not clamped to the configured window count.
pub fn create_on_window(emission: &EmissionConfig, window: u32) -> i128 {
    if window == 0 {
        emission.tokens_for_first_window
    } else {
        emission.tokens_for_other_window
    }
}

/// Sum of every configured window's budget.
pub fn scheduled_emission(config: &SaleConfig, emission: &EmissionConfig) -> Option<i128> {
    emission
        .tokens_for_other_window
        .checked_mul(config.number_of_other_windows as i128)?
        .checked_add(emission.tokens_for_first_window)
}

/// `floor(budget * contribution / window_total)`.
pub fn pro_rata(budget: i128, contribution: i128, window_total: i128) -> Option<i128> {
    if contribution == 0 || window_total == 0 {
        return Some(0);
    }
    budget
        .checked_mul(contribution)
        .map(|scaled| scaled / window_total)
}
