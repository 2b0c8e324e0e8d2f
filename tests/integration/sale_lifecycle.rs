use soroban_sdk::{testutils::Address as _, vec, Address, Env};
use token_sale::{constants::*, Error};

use crate::assert_contract_error;
use crate::utils::assertions::{assert_balance, assert_supply_conserved};
use crate::utils::constants::*;
use crate::utils::SaleFixture;

#[test]
fn test_full_sale_lifecycle() {
    let env = Env::default();
    let f = SaleFixture::new(&env);
    let whale = Address::generate(&env);
    let bulk = 500_000 * TOKEN_UNIT;

    // pre-sale allocation, then the schedule is fixed
    f.sale
        .add_bulk_purchasers(&f.owner, &vec![&env, whale.clone()], &vec![&env, bulk]);
    f.sale
        .set_emission_rates(&f.owner, &FIRST_WINDOW_TOKENS, &OTHER_WINDOW_TOKENS);
    f.sale.distribute_shares(&f.owner);
    f.sale.begin(&f.owner);
    assert_eq!(f.sale.sellable_tokens(), TOTAL_SUPPLY - TOTAL_SHARES - bulk);

    let alice = f.buyer();
    let bob = f.buyer();
    let carol = f.buyer();
    f.sale.buy(&alice, &1_000);
    f.sale.buy(&bob, &2_000);

    f.advance_to_window(3);
    f.sale.buy(&carol, &5_000);
    f.advance_to_window(5);

    assert_eq!(f.sale.claim(&alice, &0), FIRST_WINDOW_TOKENS / 3);
    assert_eq!(f.sale.claim(&bob, &0), FIRST_WINDOW_TOKENS * 2 / 3);
    assert_eq!(f.sale.claim(&carol, &3), OTHER_WINDOW_TOKENS);

    // windows 1, 2 and 4 went unsold; window 5 must close before it counts
    assert_contract_error!(f.sale.try_collect_unsold_tokens(&5), Error::WindowNotClosed);
    f.advance_to_window(6);
    assert_eq!(f.sale.collect_unsold_tokens(&5), 3 * OTHER_WINDOW_TOKENS);
    assert_balance(&f.ledger, &f.wallets.unsold_tokens, 3 * OTHER_WINDOW_TOKENS);

    assert_eq!(f.sale.collect(), 8_000);
    assert_eq!(f.payment.balance(&f.wallets.beneficiary), 8_000);
    assert_eq!(f.sale.total_raised(), 8_000);

    let mut holders = f.stakeholders();
    holders.extend([whale.clone(), alice, bob, carol]);
    assert_supply_conserved(&f.ledger, &holders);
    assert_balance(&f.ledger, &whale, bulk);

    f.sale.renounce_ownership(&f.owner);
    assert_eq!(f.sale.owner(), None);
}

#[test]
fn test_pro_rata_claims_and_collect_timing() {
    let env = Env::default();
    let f = SaleFixture::started(&env);
    let one_share = f.buyer();
    let two_shares = f.buyer();

    f.sale.buy(&one_share, &10_000_000);
    f.sale.buy(&two_shares, &20_000_000);
    assert_eq!(f.sale.window_total(&0), 30_000_000);

    // window 0 lasts until the other windows start, five days in
    f.advance_to(OTHER_WINDOWS_START - 1);
    assert_contract_error!(f.sale.try_collect(), Error::NothingToCollect);
    assert_contract_error!(f.sale.try_claim(&one_share, &0), Error::WindowNotClosed);

    f.advance_to(OTHER_WINDOWS_START);
    assert_eq!(f.sale.today(), 1);
    assert_eq!(f.sale.collect(), 30_000_000);

    assert_eq!(f.sale.claim(&one_share, &0), 25_000 * TOKEN_UNIT);
    assert_eq!(f.sale.claim(&two_shares, &0), 50_000 * TOKEN_UNIT);
    assert_eq!(f.sale.claim(&two_shares, &0), 0);
    assert_eq!(f.sale.window_claimed(&0), FIRST_WINDOW_TOKENS);
}

#[test]
fn test_sweeping_an_idle_sale_drains_the_pool() {
    let env = Env::default();
    let f = SaleFixture::started(&env);
    assert_eq!(f.sale.scheduled_emission(), f.sale.sellable_tokens());

    f.advance_to_window(OTHER_WINDOWS + 3);
    let swept = f.sale.collect_unsold_tokens(&(OTHER_WINDOWS + 2));

    assert_eq!(swept, f.sale.scheduled_emission());
    assert_eq!(f.ledger.pool_balance(), 0);
    assert_supply_conserved(&f.ledger, &f.stakeholders());

    let late = f.buyer();
    assert_contract_error!(f.sale.try_buy(&late, &100), Error::OutOfRange);
}

#[test]
fn test_limit_orders_into_future_windows() {
    let env = Env::default();
    let f = SaleFixture::started(&env);
    let alice = f.buyer();
    let bob = f.buyer();

    f.sale.buy_with_limit(&alice, &2, &3_000, &2_000);
    assert_contract_error!(
        f.sale.try_buy_with_limit(&bob, &2, &3_000, &1_500),
        Error::LimitExceeded
    );
    f.sale.buy_with_limit(&bob, &2, &3_000, &1_000);

    f.advance_to_window(3);
    assert_contract_error!(
        f.sale.try_buy_with_limit(&bob, &2, &0, &1_000),
        Error::WindowClosed
    );

    let alice_tokens = f.sale.claim(&alice, &2);
    let bob_tokens = f.sale.claim(&bob, &2);
    assert_eq!(alice_tokens, OTHER_WINDOW_TOKENS * 2 / 3);
    assert_eq!(bob_tokens, OTHER_WINDOW_TOKENS / 3);
    assert!(alice_tokens + bob_tokens <= OTHER_WINDOW_TOKENS);
}
