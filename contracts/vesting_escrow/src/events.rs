use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct FundedEvent {
    pub pool: i128,
    pub unlock_start: u64,
    pub grant_count: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct ReleasedEvent {
    pub beneficiary: Address,
    pub amount: i128,
    pub total_released: i128,
    pub timestamp: u64,
}

pub fn emit_initialized(env: &Env, owner: Address, ledger: Address) {
    env.events()
        .publish(("VEST", symbol_short!("INIT")), (owner, ledger));
}

pub fn emit_owner_changed(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        ("VEST", symbol_short!("OWNER")),
        (previous_owner, new_owner),
    );
}

pub fn emit_funded(env: &Env, pool: i128, unlock_start: u64, grant_count: u32) {
    env.events().publish(
        ("VEST", symbol_short!("FUNDED")),
        FundedEvent {
            pool,
            unlock_start,
            grant_count,
        },
    );
}

pub fn emit_released(env: &Env, beneficiary: Address, amount: i128, total_released: i128) {
    env.events().publish(
        ("VEST", symbol_short!("RELEASE")),
        ReleasedEvent {
            beneficiary,
            amount,
            total_released,
            timestamp: env.ledger().timestamp(),
        },
    );
}
