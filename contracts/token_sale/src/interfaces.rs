use crate::types::GrantTerms;
use soroban_sdk::{contractclient, Address, Env, Vec};

// Privileged calls take the caller explicitly; the ledger only obeys its owner.
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address);
    fn total_supply(env: Env) -> i128;
    fn pool_balance(env: Env) -> i128;
    fn transfer_from_pool(env: Env, caller: Address, to: Address, amount: i128);
    fn pause(env: Env, caller: Address);
    fn unpause(env: Env, caller: Address);
    fn paused(env: Env) -> bool;
    fn add_exception(env: Env, caller: Address, account: Address);
    fn remove_exception(env: Env, caller: Address, account: Address);
    fn has_exception(env: Env, account: Address) -> bool;
}

#[contractclient(name = "EscrowClient")]
pub trait Escrow {
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address);
    fn fund(env: Env, caller: Address, unlock_start: u64, pool: i128, grants: Vec<GrantTerms>);
    fn total_share(env: Env) -> u32;
}
