use soroban_sdk::{contracttype, Address};

/// Terms handed to `fund` by the escrow owner.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GrantTerms {
    pub beneficiary: Address,
    pub percentage_of_pool: u32,
    pub cliff_duration: u64,         // seconds after unlock start
    pub total_vesting_duration: u64, // seconds after unlock start
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingGrant {
    pub beneficiary: Address,
    pub percentage_of_pool: u32,
    pub cliff_duration: u64,
    pub total_vesting_duration: u64,
    pub unlock_start: u64,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Ledger,
    UnlockStart,
    Pool,
    TotalShare,
    Beneficiaries,
    Grant(Address),
    Released(Address),
}
