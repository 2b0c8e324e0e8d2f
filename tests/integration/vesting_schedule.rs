use soroban_sdk::Env;
use token_sale::constants::*;

use crate::utils::assertions::assert_balance;
use crate::utils::constants::*;
use crate::utils::SaleFixture;

#[test]
fn test_escrow_grants_follow_sale_wallets() {
    let env = Env::default();
    let f = SaleFixture::started(&env);

    let foundation = f.escrow.shares(&f.wallets.foundation).unwrap();
    assert_eq!(foundation.percentage_of_pool, FOUNDATION_PERCENT);
    assert_eq!(foundation.cliff_duration, VESTING_CLIFF);
    assert_eq!(foundation.total_vesting_duration, VESTING_DURATION);
    assert_eq!(foundation.unlock_start, SALE_START);
    assert!(f.escrow.shares(&f.wallets.company).is_some());
    assert_eq!(f.escrow.pool(), FOUNDATION_SHARE + COMPANY_SHARE);
}

#[test]
fn test_vested_shares_release_while_transfers_are_frozen() {
    let env = Env::default();
    let f = SaleFixture::started(&env);
    let company = f.wallets.company.clone();
    let entitlement = COMPANY_SHARE;
    assert!(f.ledger.paused());

    f.advance_to(SALE_START + YEAR - 1);
    assert_eq!(f.escrow.release(&company), 0);

    f.advance_to(SALE_START + YEAR);
    assert_eq!(f.escrow.release(&company), entitlement / 10);
    assert_eq!(f.escrow.release(&company), 0);

    f.advance_to(SALE_START + 5 * YEAR + YEAR / 2);
    f.escrow.release(&company);
    assert_balance(&f.ledger, &company, entitlement * 11 / 20);
}

#[test]
fn test_escrow_pays_out_in_full_at_the_end() {
    let env = Env::default();
    let f = SaleFixture::started(&env);

    f.advance_to(SALE_START + 3 * YEAR);
    let early = f.escrow.release(&f.wallets.foundation);

    f.advance_to(SALE_START + 10 * YEAR);
    let rest = f.escrow.release(&f.wallets.foundation);
    f.escrow.release(&f.wallets.company);

    assert_eq!(early + rest, FOUNDATION_SHARE);
    assert_balance(&f.ledger, &f.wallets.foundation, FOUNDATION_SHARE);
    assert_balance(&f.ledger, &f.wallets.company, COMPANY_SHARE);
    assert_balance(&f.ledger, &f.escrow.address, 0);
}
