use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
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

pub fn is_funded(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Pool)
}

pub fn get_pool(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Pool).unwrap_or(0)
}

pub fn set_pool(env: &Env, pool: i128) {
    env.storage().instance().set(&DataKey::Pool, &pool);
}

pub fn get_unlock_start(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::UnlockStart)
        .unwrap_or(0)
}

pub fn set_unlock_start(env: &Env, unlock_start: u64) {
    env.storage()
        .instance()
        .set(&DataKey::UnlockStart, &unlock_start);
}

pub fn get_total_share(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalShare)
        .unwrap_or(0)
}

pub fn set_total_share(env: &Env, total: u32) {
    env.storage().instance().set(&DataKey::TotalShare, &total);
}

pub fn get_beneficiaries(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Beneficiaries)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_beneficiaries(env: &Env, beneficiaries: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&DataKey::Beneficiaries, beneficiaries);
}

pub fn get_grant(env: &Env, beneficiary: &Address) -> Option<VestingGrant> {
    env.storage()
        .persistent()
        .get(&DataKey::Grant(beneficiary.clone()))
}

pub fn set_grant(env: &Env, grant: &VestingGrant) {
    env.storage()
        .persistent()
        .set(&DataKey::Grant(grant.beneficiary.clone()), grant);
}

pub fn get_released(env: &Env, beneficiary: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Released(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_released(env: &Env, beneficiary: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Released(beneficiary.clone()), &amount);
}
