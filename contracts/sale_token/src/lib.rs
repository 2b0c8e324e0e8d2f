#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod errors;
mod events;


pub use errors::TokenError;

use soroban_sdk::{contract, contractimpl, contractmeta, contracttype, Address, Env, String};

contractmeta!(
    key = "Description",
    val = "Sale Token - fixed supply token with owner-gated pool and pausable transfers"
);

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    // Instance storage
    Owner,
    Paused,
    Metadata,
    TotalSupply,

    // Persistent storage
    Balance(Address),
    Exception(Address),
}

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// Mints the whole supply into the pool held by the token contract itself.
    /// Transfers start frozen; only allowlisted senders can move tokens until
    /// the owner unpauses.
    pub fn initialize(
        env: Env,
        owner: Address,
        decimal: u32,
        name: String,
        symbol: String,
        total_supply: i128,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(TokenError::AlreadyInitialized);
        }
        owner.require_auth();
        if total_supply <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let metadata = TokenMetadata {
            decimal,
            name,
            symbol,
        };
        let pool = env.current_contract_address();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &total_supply);
        env.storage().instance().set(&DataKey::Paused, &true);
        Self::write_balance(&env, &pool, total_supply);

        events::emit_minted(&env, pool, total_supply);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Owner-gated
    // ------------------------------------------------------------------

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TokenError> {
        Self::require_owner(&env, &caller)?;
        env.storage().instance().set(&DataKey::Owner, &new_owner);
        events::emit_ownership_transferred(&env, caller, new_owner);
        Ok(())
    }

    /// Moves tokens out of the unsold pool. Owner transfers are not subject
    /// to the pause switch.
    pub fn transfer_from_pool(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        Self::require_owner(&env, &caller)?;
        let pool = env.current_contract_address();
        Self::move_balance(&env, &pool, &to, amount)?;
        events::emit_transfer(&env, pool, to, amount);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), TokenError> {
        Self::require_owner(&env, &caller)?;
        if Self::is_paused(&env) {
            return Err(TokenError::AlreadyPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &true);
        events::emit_paused(&env, true);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), TokenError> {
        Self::require_owner(&env, &caller)?;
        if !Self::is_paused(&env) {
            return Err(TokenError::NotPaused);
        }
        env.storage().instance().set(&DataKey::Paused, &false);
        events::emit_paused(&env, false);
        Ok(())
    }

    pub fn add_exception(env: Env, caller: Address, account: Address) -> Result<(), TokenError> {
        Self::require_owner(&env, &caller)?;
        env.storage()
            .persistent()
            .set(&DataKey::Exception(account.clone()), &true);
        events::emit_exception(&env, account, true);
        Ok(())
    }

    pub fn remove_exception(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), TokenError> {
        Self::require_owner(&env, &caller)?;
        env.storage()
            .persistent()
            .remove(&DataKey::Exception(account.clone()));
        events::emit_exception(&env, account, false);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Public
    // ------------------------------------------------------------------

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        from.require_auth();
        if Self::is_paused(&env) && !Self::has_exception(env.clone(), from.clone()) {
            return Err(TokenError::TransferPaused);
        }
        Self::move_balance(&env, &from, &to, amount)?;
        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn balance(env: Env, id: Address) -> i128 {
        Self::read_balance(&env, &id)
    }

    pub fn pool_balance(env: Env) -> i128 {
        Self::read_balance(&env, &env.current_contract_address())
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn paused(env: Env) -> bool {
        Self::is_paused(&env)
    }

    pub fn has_exception(env: Env, account: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Exception(account))
            .unwrap_or(false)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(Self::read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(Self::read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(Self::read_metadata(&env)?.symbol)
    }
}

impl SaleToken {
    fn require_initialized(env: &Env) -> Result<(), TokenError> {
        if !env.storage().instance().has(&DataKey::Owner) {
            return Err(TokenError::NotInitialized);
        }
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(TokenError::NotInitialized)?;
        caller.require_auth();
        if *caller != owner {
            return Err(TokenError::NotAuthorized);
        }
        Ok(())
    }

    fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(TokenError::NotInitialized)
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &amount);
    }

    fn move_balance(
        env: &Env,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        let from_balance = Self::read_balance(env, from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        if from == to {
            return Ok(());
        }
        let to_balance = Self::read_balance(env, to)
            .checked_add(amount)
            .ok_or(TokenError::InvalidAmount)?;
        Self::write_balance(env, from, from_balance - amount);
        Self::write_balance(env, to, to_balance);
        Ok(())
    }
}
