use crate::errors::Error;
use soroban_sdk::{Address, Vec};

/// Validates a bulk batch and returns its total. Items are checked one by
/// one; the pool check in `check_pool` looks at the batch as a whole.
pub fn batch_total(accounts: &Vec<Address>, amounts: &Vec<i128>) -> Result<i128, Error> {
    if accounts.len() != amounts.len() {
        return Err(Error::LengthMismatch);
    }
    let mut total: i128 = 0;
    for amount in amounts.iter() {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        total = total
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
    }
    Ok(total)
}

/// The pool left after the batch must still cover the reserved shares.
pub fn check_pool(pool_balance: i128, batch_total: i128, reserved: i128) -> Result<i128, Error> {
    let remaining = pool_balance
        .checked_sub(batch_total)
        .ok_or(Error::ArithmeticOverflow)?;
    if remaining < reserved {
        return Err(Error::PoolExhausted);
    }
    Ok(remaining)
}
