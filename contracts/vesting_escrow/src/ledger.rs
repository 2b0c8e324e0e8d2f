use soroban_sdk::{contractclient, Address, Env};

// Subset of the token ledger the escrow pays out through.
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}
