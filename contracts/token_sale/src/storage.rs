use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_emission(env: &Env) -> EmissionConfig {
    env.storage()
        .instance()
        .get(&DataKey::Emission)
        .unwrap_or(EmissionConfig {
            tokens_for_first_window: 0,
            tokens_for_other_window: 0,
        })
}

pub fn set_emission(env: &Env, emission: &EmissionConfig) {
    env.storage().instance().set(&DataKey::Emission, emission);
}

pub fn get_wallets(env: &Env) -> Result<SaleWallets, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Wallets)
        .ok_or(Error::NotInitialized)
}

pub fn set_wallets(env: &Env, wallets: &SaleWallets) {
    env.storage().instance().set(&DataKey::Wallets, wallets);
}

pub fn get_state(env: &Env) -> SaleState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn clear_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::Owner);
}

pub fn get_ledger(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Ledger)
        .ok_or(Error::NotInitialized)
}

pub fn set_ledger(env: &Env, ledger: &Address) {
    env.storage().instance().set(&DataKey::Ledger, ledger);
}

pub fn get_escrow(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Escrow)
        .ok_or(Error::NotInitialized)
}

pub fn set_escrow(env: &Env, escrow: &Address) {
    env.storage().instance().set(&DataKey::Escrow, escrow);
}

pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_bulk_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::BulkTotal)
        .unwrap_or(0)
}

pub fn set_bulk_total(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::BulkTotal, &amount);
}

pub fn get_bulk_allocation(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::BulkAllocation(account.clone()))
        .unwrap_or(0)
}

pub fn set_bulk_allocation(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::BulkAllocation(account.clone()), &amount);
}

// Per-window accounting

pub fn get_window_total(env: &Env, window: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::WindowTotal(window))
        .unwrap_or(0)
}

pub fn set_window_total(env: &Env, window: u32, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::WindowTotal(window), &amount);
}

pub fn get_window_claimed(env: &Env, window: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::WindowClaimed(window))
        .unwrap_or(0)
}

pub fn set_window_claimed(env: &Env, window: u32, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::WindowClaimed(window), &amount);
}

pub fn get_window_settled(env: &Env, window: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::WindowSettled(window))
        .unwrap_or(0)
}

pub fn set_window_settled(env: &Env, window: u32, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::WindowSettled(window), &amount);
}

pub fn get_contribution(env: &Env, window: u32, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(window, account.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, window: u32, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(window, account.clone()), &amount);
}

pub fn is_settled(env: &Env, window: u32, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Settled(window, account.clone()))
}

pub fn mark_settled(env: &Env, window: u32, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Settled(window, account.clone()), &true);
}
