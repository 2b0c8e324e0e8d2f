/// Custom assertions for sale scenarios
use sale_token::SaleTokenClient;
use soroban_sdk::Address;

/// Assert a `try_*` call failed with a specific contract error
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected_error:expr) => {
        assert_eq!($result, Err(Ok($expected_error)), "Contract error mismatch")
    };
    ($result:expr, $expected_error:expr, $($msg:tt)*) => {
        assert_eq!($result, Err(Ok($expected_error)), $($msg)*)
    };
}

/// Assert value is within range (inclusive)
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        assert!(
            $value >= $min && $value <= $max,
            "Value {} not in range [{}, {}]",
            $value,
            $min,
            $max
        )
    };
}

/// The pool plus every listed holder must account for the whole supply.
pub fn assert_supply_conserved(ledger: &SaleTokenClient, holders: &[Address]) {
    let held: i128 = holders.iter().map(|h| ledger.balance(h)).sum();
    assert_eq!(
        ledger.pool_balance() + held,
        ledger.total_supply(),
        "Token supply not conserved"
    );
}

pub fn assert_balance(ledger: &SaleTokenClient, holder: &Address, expected: i128) {
    assert_eq!(
        ledger.balance(holder),
        expected,
        "Unexpected token balance"
    );
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_in_range() {
        assert_in_range!(5, 1, 10);
    }

    #[test]
    #[should_panic]
    fn test_assert_in_range_fails() {
        assert_in_range!(11, 1, 10);
    }
}
