use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub total_supply: i128,
    pub first_window_start: u64,
    pub other_windows_start: u64, // window 1 opens here
    pub number_of_other_windows: u32,
    pub min_contribution: i128, // in payment token units
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EmissionConfig {
    pub tokens_for_first_window: i128,
    pub tokens_for_other_window: i128,
}

/// Fixed recipients of shares, unsold tokens and raised funds.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWallets {
    pub foundation: Address,
    pub company: Address,
    pub marketing: Address,
    pub team: Vec<Address>,
    pub unsold_tokens: Address,
    pub beneficiary: Address,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub initialized: bool,
    pub emission_rates_set: bool,
    pub shares_distributed: bool,
    pub began: bool,
    pub paused: bool,
    pub total_raised: i128,
    pub total_distributed_tokens: i128,
    pub unsold_swept_before_window: u32,
}

/// Mirrors the escrow contract's grant terms so the two encode identically.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GrantTerms {
    pub beneficiary: Address,
    pub percentage_of_pool: u32,
    pub cliff_duration: u64,
    pub total_vesting_duration: u64,
}

#[contracttype]
pub enum DataKey {
    // Instance storage
    Config,
    Emission,
    Wallets,
    State,
    Owner,
    Ledger,
    Escrow,
    PaymentToken,
    BulkTotal,

    // Persistent storage
    WindowTotal(u32),
    WindowClaimed(u32),
    WindowSettled(u32),
    Contribution(u32, Address),
    Settled(u32, Address),
    BulkAllocation(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
