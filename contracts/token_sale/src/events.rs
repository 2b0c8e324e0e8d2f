use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct InitializedEvent {
    pub owner: Address,
    pub ledger: Address,
    pub escrow: Address,
    pub total_supply: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct RatesSetEvent {
    pub tokens_for_first_window: i128,
    pub tokens_for_other_window: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct ContributionEvent {
    pub buyer: Address,
    pub window: u32,
    pub amount: i128,
    pub window_total: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct ClaimEvent {
    pub claimant: Address,
    pub window: u32,
    pub tokens: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct SweepEvent {
    pub from_window: u32,
    pub to_window: u32,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, owner: Address, ledger: Address, escrow: Address, total_supply: i128) {
    env.events().publish(
        ("SALE", symbol_short!("INIT")),
        InitializedEvent {
            owner,
            ledger,
            escrow,
            total_supply,
        },
    );
}

pub fn emit_bulk_purchase(env: &Env, purchaser: Address, amount: i128) {
    env.events()
        .publish(("SALE", symbol_short!("BULK")), (purchaser, amount));
}

pub fn emit_rates_set(env: &Env, first: i128, other: i128) {
    env.events().publish(
        ("SALE", symbol_short!("RATES")),
        RatesSetEvent {
            tokens_for_first_window: first,
            tokens_for_other_window: other,
        },
    );
}

pub fn emit_shares_distributed(env: &Env, escrow: Address, escrow_pool: i128, unlock_start: u64) {
    env.events().publish(
        ("SALE", symbol_short!("SHARES")),
        (escrow, escrow_pool, unlock_start),
    );
}

pub fn emit_began(env: &Env, at: u64) {
    env.events().publish(("SALE", symbol_short!("BEGIN")), at);
}

pub fn emit_contribution(env: &Env, buyer: Address, window: u32, amount: i128, window_total: i128) {
    env.events().publish(
        ("SALE", symbol_short!("BUY")),
        ContributionEvent {
            buyer,
            window,
            amount,
            window_total,
        },
    );
}

pub fn emit_claimed(env: &Env, claimant: Address, window: u32, tokens: i128) {
    env.events().publish(
        ("SALE", symbol_short!("CLAIM")),
        ClaimEvent {
            claimant,
            window,
            tokens,
        },
    );
}

pub fn emit_unsold_swept(env: &Env, from_window: u32, to_window: u32, amount: i128) {
    env.events().publish(
        ("SALE", symbol_short!("UNSOLD")),
        SweepEvent {
            from_window,
            to_window,
            amount,
        },
    );
}

pub fn emit_collected(env: &Env, beneficiary: Address, amount: i128) {
    env.events()
        .publish(("SALE", symbol_short!("COLLECT")), (beneficiary, amount));
}

pub fn emit_sale_paused(env: &Env, paused: bool) {
    env.events()
        .publish(("SALE", symbol_short!("PAUSED")), paused);
}

pub fn emit_transfer_paused(env: &Env, paused: bool) {
    env.events()
        .publish(("SALE", symbol_short!("XFERPAUS")), paused);
}

pub fn emit_exception(env: &Env, account: Address, allowed: bool) {
    env.events()
        .publish(("SALE", symbol_short!("EXCEPT")), (account, allowed));
}

/// `new_owner` is `None` when ownership is renounced.
pub fn emit_owner_changed(env: &Env, previous_owner: Address, new_owner: Option<Address>) {
    env.events()
        .publish(("SALE", symbol_short!("OWNER")), (previous_owner, new_owner));
}
