use crate::curve;
use crate::errors::Error;
use crate::events;
use crate::ledger::LedgerClient;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

contractmeta!(
    key = "Description",
    val = "Stakeholder escrow releasing reserved shares on a cliff and linear curve"
);

#[contract]
pub struct VestingEscrow;

#[contractimpl]
impl VestingEscrow {
    pub fn initialize(env: Env, owner: Address, ledger: Address) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        set_owner(&env, &owner);
        set_ledger(&env, &ledger);

        events::emit_initialized(&env, owner, ledger);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        set_owner(&env, &new_owner);
        events::emit_owner_changed(&env, caller, new_owner);
        Ok(())
    }

    /// Fix the grant set and the unlock start. The pool must already sit in
    /// the escrow's ledger balance. One-shot.
    pub fn fund(
        env: Env,
        caller: Address,
        unlock_start: u64,
        pool: i128,
        grants: Vec<GrantTerms>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if is_funded(&env) {
            return Err(Error::AlreadyFunded);
        }
        if pool <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut total_share: u32 = 0;
        let mut beneficiaries: Vec<Address> = Vec::new(&env);
        for terms in grants.iter() {
            if terms.percentage_of_pool == 0 || beneficiaries.contains(&terms.beneficiary) {
                return Err(Error::InvalidShares);
            }
            if terms.total_vesting_duration == 0
                || terms.cliff_duration > terms.total_vesting_duration
            {
                return Err(Error::InvalidSchedule);
            }
            total_share = total_share
                .checked_add(terms.percentage_of_pool)
                .ok_or(Error::InvalidShares)?;
            beneficiaries.push_back(terms.beneficiary.clone());
        }
        if total_share != curve::PERCENT_BASE {
            return Err(Error::InvalidShares);
        }

        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        if ledger.balance(&env.current_contract_address()) < pool {
            return Err(Error::Underfunded);
        }

        for terms in grants.iter() {
            set_grant(
                &env,
                &VestingGrant {
                    beneficiary: terms.beneficiary,
                    percentage_of_pool: terms.percentage_of_pool,
                    cliff_duration: terms.cliff_duration,
                    total_vesting_duration: terms.total_vesting_duration,
                    unlock_start,
                },
            );
        }
        set_pool(&env, pool);
        set_unlock_start(&env, unlock_start);
        set_total_share(&env, total_share);
        set_beneficiaries(&env, &beneficiaries);

        events::emit_funded(&env, pool, unlock_start, beneficiaries.len());
        Ok(())
    }

    /// Pay out whatever has vested for `beneficiary` since the last release.
    /// Anyone may trigger it; tokens always go to the beneficiary.
    pub fn release(env: Env, beneficiary: Address) -> Result<i128, Error> {
        let amount = Self::releasable(env.clone(), beneficiary.clone())?;
        if amount == 0 {
            return Ok(0);
        }

        let total_released = get_released(&env, &beneficiary)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        set_released(&env, &beneficiary, total_released);

        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        ledger.transfer(&env.current_contract_address(), &beneficiary, &amount);

        events::emit_released(&env, beneficiary, amount, total_released);
        Ok(amount)
    }

    // View functions
    pub fn releasable(env: Env, beneficiary: Address) -> Result<i128, Error> {
        if !is_initialized(&env) {
            return Err(Error::NotInitialized);
        }
        if !is_funded(&env) {
            return Err(Error::NotFunded);
        }
        let grant = get_grant(&env, &beneficiary).ok_or(Error::UnknownBeneficiary)?;
        let entitlement = curve::entitlement(get_pool(&env), grant.percentage_of_pool)
            .ok_or(Error::ArithmeticOverflow)?;
        curve::releasable_amount(
            entitlement,
            &grant,
            get_released(&env, &beneficiary),
            env.ledger().timestamp(),
        )
        .ok_or(Error::ArithmeticOverflow)
    }

    pub fn shares(env: Env, beneficiary: Address) -> Option<VestingGrant> {
        get_grant(&env, &beneficiary)
    }

    pub fn released(env: Env, beneficiary: Address) -> i128 {
        get_released(&env, &beneficiary)
    }

    pub fn unlock_start(env: Env) -> u64 {
        get_unlock_start(&env)
    }

    pub fn total_share(env: Env) -> u32 {
        get_total_share(&env)
    }

    pub fn pool(env: Env) -> i128 {
        get_pool(&env)
    }

    pub fn beneficiaries(env: Env) -> Vec<Address> {
        get_beneficiaries(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn ledger(env: Env) -> Result<Address, Error> {
        get_ledger(&env)
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    let owner = get_owner(env)?;
    caller.require_auth();
    if *caller != owner {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}
