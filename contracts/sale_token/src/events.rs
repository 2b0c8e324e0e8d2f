use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct OwnershipEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_minted(env: &Env, pool: Address, amount: i128) {
    env.events()
        .publish(("TOKEN", symbol_short!("MINT")), (pool, amount));
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        ("TOKEN", symbol_short!("XFER")),
        TransferEvent { from, to, amount },
    );
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        ("TOKEN", symbol_short!("OWNER")),
        OwnershipEvent {
            previous_owner,
            new_owner,
        },
    );
}

pub fn emit_paused(env: &Env, paused: bool) {
    env.events()
        .publish(("TOKEN", symbol_short!("PAUSED")), paused);
}

/// `allowed` is true when the address joins the allowlist, false when it leaves.
pub fn emit_exception(env: &Env, account: Address, allowed: bool) {
    env.events()
        .publish(("TOKEN", symbol_short!("EXCEPT")), (account, allowed));
}
