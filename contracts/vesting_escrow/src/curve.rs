//! Cliff + linear release curve. Everything here is a pure function of the
//! grant terms and the timestamp it is evaluated at.

use crate::types::VestingGrant;

pub const PERCENT_BASE: u32 = 100;

/// The beneficiary's slice of the escrow pool.
pub fn entitlement(pool: i128, percentage_of_pool: u32) -> Option<i128> {
    pool.checked_mul(percentage_of_pool as i128)
        .map(|scaled| scaled / PERCENT_BASE as i128)
}

/// Amount unlocked at `now`: nothing before the cliff, everything once the
/// full duration has elapsed, linear in elapsed time in between.
pub fn vested_amount(entitlement: i128, grant: &VestingGrant, now: u64) -> Option<i128> {
    let cliff_end = grant.unlock_start.saturating_add(grant.cliff_duration);
    if now < cliff_end {
        return Some(0);
    }

    let elapsed = now - grant.unlock_start;
    if elapsed >= grant.total_vesting_duration {
        return Some(entitlement);
    }

    entitlement
        .checked_mul(elapsed as i128)
        .map(|scaled| scaled / grant.total_vesting_duration as i128)
}

/// What can still be paid out at `now` given what was already released.
pub fn releasable_amount(
    entitlement: i128,
    grant: &VestingGrant,
    released: i128,
    now: u64,
) -> Option<i128> {
    vested_amount(entitlement, grant, now).map(|vested| vested.saturating_sub(released).max(0))
}
