use crate::bulk;
use crate::constants::*;
use crate::errors::Error;
use crate::events;
use crate::interfaces::{EscrowClient, LedgerClient};
use crate::schedule;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, vec, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Windowed token sale with bulk allocations and vested stakeholder shares"
);

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale. The engine takes over ownership of the ledger and
    /// the escrow, so `owner` must currently own both.
    pub fn initialize(
        env: Env,
        owner: Address,
        ledger: Address,
        escrow: Address,
        payment_token: Address,
        wallets: SaleWallets,
        config: SaleConfig,
    ) -> Result<(), Error> {
        let mut state = get_state(&env);
        if state.initialized {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if config.total_supply <= TOTAL_SHARES
            || config.first_window_start >= config.other_windows_start
            || config.number_of_other_windows == 0
            || config.min_contribution < 0
            || wallets.team.len() != TEAM_SIZE
        {
            return Err(Error::InvalidConfig);
        }

        let this = env.current_contract_address();
        let ledger_client = LedgerClient::new(&env, &ledger);
        if ledger_client.total_supply() != config.total_supply {
            return Err(Error::InvalidConfig);
        }
        if ledger_client.owner() != this {
            ledger_client.transfer_ownership(&owner, &this);
        }
        let escrow_client = EscrowClient::new(&env, &escrow);
        if escrow_client.owner() != this {
            escrow_client.transfer_ownership(&owner, &this);
        }

        set_config(&env, &config);
        set_wallets(&env, &wallets);
        set_owner(&env, &owner);
        set_ledger(&env, &ledger);
        set_escrow(&env, &escrow);
        set_payment_token(&env, &payment_token);

        state.initialized = true;
        set_state(&env, &state);

        events::emit_initialized(&env, owner, ledger, escrow, config.total_supply);
        Ok(())
    }

    // ==================== Setup phase ====================

    /// Hand tokens straight from the pool to pre-sale purchasers. Only open
    /// until the emission rates are fixed. The batch either lands whole or
    /// not at all.
    pub fn add_bulk_purchasers(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if get_state(&env).emission_rates_set {
            return Err(Error::EmissionRatesLocked);
        }

        let batch = bulk::batch_total(&accounts, &amounts)?;
        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        bulk::check_pool(ledger.pool_balance(), batch, TOTAL_SHARES)?;

        let this = env.current_contract_address();
        for (account, amount) in accounts.iter().zip(amounts.iter()) {
            ledger.transfer_from_pool(&this, &account, &amount);
            let allocation = get_bulk_allocation(&env, &account)
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?;
            set_bulk_allocation(&env, &account, allocation);
            events::emit_bulk_purchase(&env, account, amount);
        }

        let total = get_bulk_total(&env)
            .checked_add(batch)
            .ok_or(Error::ArithmeticOverflow)?;
        set_bulk_total(&env, total);
        Ok(())
    }

    /// Fix the per-window budgets. Can be repeated until the sale begins;
    /// the first call closes bulk allocation for good.
    pub fn set_emission_rates(
        env: Env,
        caller: Address,
        tokens_for_first_window: i128,
        tokens_for_other_window: i128,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let mut state = get_state(&env);
        if state.began {
            return Err(Error::AlreadyBegun);
        }
        if tokens_for_first_window < 0 || tokens_for_other_window < 0 {
            return Err(Error::InvalidAmount);
        }

        set_emission(
            &env,
            &EmissionConfig {
                tokens_for_first_window,
                tokens_for_other_window,
            },
        );
        state.emission_rates_set = true;
        set_state(&env, &state);

        events::emit_rates_set(&env, tokens_for_first_window, tokens_for_other_window);
        Ok(())
    }

    /// Move the reserved shares out of the pool. Foundation and company
    /// shares go to the escrow in one transfer and vest from now on.
    pub fn distribute_shares(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let mut state = get_state(&env);
        if !state.emission_rates_set {
            return Err(Error::EmissionRatesNotSet);
        }
        if state.shares_distributed {
            return Err(Error::AlreadyDistributed);
        }

        let wallets = get_wallets(&env)?;
        let escrow_address = get_escrow(&env)?;
        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        let escrow = EscrowClient::new(&env, &escrow_address);
        let this = env.current_contract_address();
        let now = get_ledger_timestamp(&env);

        let escrow_pool = FOUNDATION_SHARE + COMPANY_SHARE;
        ledger.transfer_from_pool(&this, &escrow_address, &escrow_pool);
        let grants = vec![
            &env,
            default_grant(&wallets.foundation, FOUNDATION_PERCENT),
            default_grant(&wallets.company, COMPANY_PERCENT),
        ];
        escrow.fund(&this, &now, &escrow_pool, &grants);

        ledger.transfer_from_pool(&this, &wallets.marketing, &MARKETING_SHARE);
        for member in wallets.team.iter() {
            ledger.transfer_from_pool(&this, &member, &TEAM_MEMBER_SHARE);
        }

        ledger.add_exception(&this, &escrow_address);
        ledger.add_exception(&this, &this);
        ledger.add_exception(&this, &wallets.marketing);

        state.shares_distributed = true;
        set_state(&env, &state);

        events::emit_shares_distributed(&env, escrow_address, escrow_pool, now);
        Ok(())
    }

    pub fn begin(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let mut state = get_state(&env);
        if !state.shares_distributed {
            return Err(Error::SharesNotDistributed);
        }
        if state.began {
            return Err(Error::AlreadyBegun);
        }

        state.began = true;
        set_state(&env, &state);

        events::emit_began(&env, get_ledger_timestamp(&env));
        Ok(())
    }

    // ==================== Sale ====================

    /// Contribute `amount` of the payment token to the current window.
    pub fn buy(env: Env, buyer: Address, amount: i128) -> Result<(), Error> {
        buyer.require_auth();
        let config = require_open_sale(&env, amount)?;
        let window = schedule::window_for(&config, get_ledger_timestamp(&env));
        if window > config.number_of_other_windows {
            return Err(Error::OutOfRange);
        }
        record_contribution(&env, &buyer, window, amount, 0)
    }

    /// Contribute to a specific window that is still open. A non-zero
    /// `limit` caps the window total including this contribution.
    pub fn buy_with_limit(
        env: Env,
        buyer: Address,
        window: u32,
        limit: i128,
        amount: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let config = require_open_sale(&env, amount)?;
        if window > config.number_of_other_windows {
            return Err(Error::OutOfRange);
        }
        if window < schedule::window_for(&config, get_ledger_timestamp(&env)) {
            return Err(Error::WindowClosed);
        }
        if limit < 0 {
            return Err(Error::InvalidAmount);
        }
        record_contribution(&env, &buyer, window, amount, limit)
    }

    /// Settle the claimant's share of a closed window. Returns the tokens
    /// paid; repeated calls pay nothing.
    pub fn claim(env: Env, claimant: Address, window: u32) -> Result<i128, Error> {
        claimant.require_auth();
        let mut state = get_state(&env);
        if !state.initialized {
            return Err(Error::NotInitialized);
        }
        if !state.began {
            return Err(Error::NotBegun);
        }
        let config = get_config(&env)?;
        if schedule::window_for(&config, get_ledger_timestamp(&env)) <= window {
            return Err(Error::WindowNotClosed);
        }
        if is_settled(&env, window, &claimant) {
            return Ok(0);
        }
        let contribution = get_contribution(&env, window, &claimant);
        if contribution == 0 {
            return Ok(0);
        }

        let tokens = payout(&env, window, contribution)?;
        mark_settled(&env, window, &claimant);

        let claimed = get_window_claimed(&env, window)
            .checked_add(tokens)
            .ok_or(Error::ArithmeticOverflow)?;
        set_window_claimed(&env, window, claimed);
        let settled = get_window_settled(&env, window)
            .checked_add(contribution)
            .ok_or(Error::ArithmeticOverflow)?;
        set_window_settled(&env, window, settled);

        state.total_distributed_tokens = state
            .total_distributed_tokens
            .checked_add(tokens)
            .ok_or(Error::ArithmeticOverflow)?;
        set_state(&env, &state);

        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        let this = env.current_contract_address();
        if tokens > 0 {
            ledger.transfer_from_pool(&this, &claimant, &tokens);
        }

        // The last claim on an already swept window hands its rounding
        // residue to the unsold wallet.
        if window < state.unsold_swept_before_window {
            let residue = unsold_in_window(&env, window)?;
            if residue > 0 {
                let wallets = get_wallets(&env)?;
                ledger.transfer_from_pool(&this, &wallets.unsold_tokens, &residue);
                events::emit_unsold_swept(&env, window, window + 1, residue);
            }
        }

        events::emit_claimed(&env, claimant, window, tokens);
        Ok(tokens)
    }

    /// Send whatever finished windows left unsold to the unsold-tokens
    /// wallet: the whole budget of windows without contributions and the
    /// rounding residue of fully claimed ones. Covers every window from the
    /// previous sweep up to, not including, `window`.
    pub fn collect_unsold_tokens(env: Env, window: u32) -> Result<i128, Error> {
        let mut state = get_state(&env);
        if !state.initialized {
            return Err(Error::NotInitialized);
        }
        if !state.began {
            return Err(Error::NotBegun);
        }
        let config = get_config(&env)?;
        if schedule::window_for(&config, get_ledger_timestamp(&env)) <= window {
            return Err(Error::WindowNotClosed);
        }
        let from = state.unsold_swept_before_window;
        if window <= from {
            return Err(Error::AlreadySwept);
        }

        let until = window.min(config.number_of_other_windows.saturating_add(1));
        let mut unsold: i128 = 0;
        for w in from..until {
            unsold = unsold
                .checked_add(unsold_in_window(&env, w)?)
                .ok_or(Error::ArithmeticOverflow)?;
        }

        state.unsold_swept_before_window = window;
        set_state(&env, &state);

        if unsold > 0 {
            let wallets = get_wallets(&env)?;
            let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
            ledger.transfer_from_pool(
                &env.current_contract_address(),
                &wallets.unsold_tokens,
                &unsold,
            );
        }

        events::emit_unsold_swept(&env, from, window, unsold);
        Ok(unsold)
    }

    /// Forward everything raised so far to the beneficiary wallet. Opens
    /// once window 0 is over.
    pub fn collect(env: Env) -> Result<i128, Error> {
        if !get_state(&env).initialized {
            return Err(Error::NotInitialized);
        }
        let config = get_config(&env)?;
        if schedule::window_for(&config, get_ledger_timestamp(&env)) == 0 {
            return Err(Error::NothingToCollect);
        }

        let wallets = get_wallets(&env)?;
        let payment = token::Client::new(&env, &get_payment_token(&env)?);
        let this = env.current_contract_address();
        let amount = payment.balance(&this);
        if amount > 0 {
            payment.transfer(&this, &wallets.beneficiary, &amount);
        }

        events::emit_collected(&env, wallets.beneficiary, amount);
        Ok(amount)
    }

    // ==================== Pause policy ====================

    pub fn pause_token_sale(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        set_sale_paused(&env, true);
        Ok(())
    }

    pub fn unpause_token_sale(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        set_sale_paused(&env, false);
        Ok(())
    }

    pub fn pause_token_transfer(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        if ledger.paused() {
            return Err(Error::TransferAlreadyPaused);
        }
        ledger.pause(&env.current_contract_address());
        events::emit_transfer_paused(&env, true);
        Ok(())
    }

    pub fn unpause_token_transfer(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        if !ledger.paused() {
            return Err(Error::TransferNotPaused);
        }
        ledger.unpause(&env.current_contract_address());
        events::emit_transfer_paused(&env, false);
        Ok(())
    }

    pub fn add_pausable_exception(env: Env, caller: Address, account: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        ledger.add_exception(&env.current_contract_address(), &account);
        events::emit_exception(&env, account, true);
        Ok(())
    }

    pub fn remove_pausable_exception(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let ledger = LedgerClient::new(&env, &get_ledger(&env)?);
        ledger.remove_exception(&env.current_contract_address(), &account);
        events::emit_exception(&env, account, false);
        Ok(())
    }

    // ==================== Ownership ====================

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        set_owner(&env, &new_owner);
        events::emit_owner_changed(&env, caller, Some(new_owner));
        Ok(())
    }

    /// Give up ownership for good. Refused while raised funds are still
    /// waiting to be collected.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let payment = token::Client::new(&env, &get_payment_token(&env)?);
        if payment.balance(&env.current_contract_address()) != 0 {
            return Err(Error::NonZeroBalance);
        }
        clear_owner(&env);
        events::emit_owner_changed(&env, caller, None);
        Ok(())
    }

    // ==================== Views ====================

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_emission(env: Env) -> EmissionConfig {
        get_emission(&env)
    }

    pub fn get_wallets(env: Env) -> Result<SaleWallets, Error> {
        get_wallets(&env)
    }

    /// Index order: foundation, company, marketing, team members, unsold
    /// tokens, beneficiary.
    pub fn wallet(env: Env, index: u32) -> Result<Address, Error> {
        let wallets = get_wallets(&env)?;
        match index {
            0 => Ok(wallets.foundation),
            1 => Ok(wallets.company),
            2 => Ok(wallets.marketing),
            i if i < 3 + TEAM_SIZE => wallets.team.get(i - 3).ok_or(Error::OutOfRange),
            i if i == WALLET_COUNT - 2 => Ok(wallets.unsold_tokens),
            i if i == WALLET_COUNT - 1 => Ok(wallets.beneficiary),
            _ => Err(Error::OutOfRange),
        }
    }

    pub fn get_state(env: Env) -> SaleState {
        get_state(&env)
    }

    pub fn owner(env: Env) -> Option<Address> {
        get_owner(&env)
    }

    pub fn ledger(env: Env) -> Result<Address, Error> {
        get_ledger(&env)
    }

    pub fn escrow(env: Env) -> Result<Address, Error> {
        get_escrow(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        get_payment_token(&env)
    }

    pub fn total_raised(env: Env) -> i128 {
        get_state(&env).total_raised
    }

    pub fn total_distributed_tokens(env: Env) -> i128 {
        get_state(&env).total_distributed_tokens
    }

    pub fn contribution(env: Env, window: u32, account: Address) -> i128 {
        get_contribution(&env, window, &account)
    }

    pub fn window_total(env: Env, window: u32) -> i128 {
        get_window_total(&env, window)
    }

    pub fn window_claimed(env: Env, window: u32) -> i128 {
        get_window_claimed(&env, window)
    }

    /// Contributions already settled by a claim.
    pub fn window_settled(env: Env, window: u32) -> i128 {
        get_window_settled(&env, window)
    }

    pub fn has_claimed(env: Env, window: u32, account: Address) -> bool {
        is_settled(&env, window, &account)
    }

    /// What `claim` would pay right now. Zero while the window is open.
    pub fn claimable(env: Env, window: u32, account: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        if schedule::window_for(&config, get_ledger_timestamp(&env)) <= window
            || is_settled(&env, window, &account)
        {
            return Ok(0);
        }
        let contribution = get_contribution(&env, window, &account);
        if contribution == 0 {
            return Ok(0);
        }
        payout(&env, window, contribution)
    }

    pub fn today(env: Env) -> Result<u32, Error> {
        let config = get_config(&env)?;
        Ok(schedule::window_for(&config, get_ledger_timestamp(&env)))
    }

    pub fn window_for(env: Env, timestamp: u64) -> Result<u32, Error> {
        let config = get_config(&env)?;
        Ok(schedule::window_for(&config, timestamp))
    }

    pub fn create_on_window(env: Env, window: u32) -> i128 {
        schedule::create_on_window(&get_emission(&env), window)
    }

    /// Stakeholder shares plus every committed bulk allocation.
    pub fn reserved_tokens(env: Env) -> Result<i128, Error> {
        reserved_tokens(&env)
    }

    pub fn sellable_tokens(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        config
            .total_supply
            .checked_sub(reserved_tokens(&env)?)
            .ok_or(Error::ArithmeticOverflow)
    }

    pub fn scheduled_emission(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        schedule::scheduled_emission(&config, &get_emission(&env)).ok_or(Error::ArithmeticOverflow)
    }

    pub fn bulk_allocation(env: Env, account: Address) -> i128 {
        get_bulk_allocation(&env, &account)
    }

    pub fn bulk_total(env: Env) -> i128 {
        get_bulk_total(&env)
    }

    pub fn now(env: Env) -> u64 {
        get_ledger_timestamp(&env)
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    if !get_state(env).initialized {
        return Err(Error::NotInitialized);
    }
    caller.require_auth();
    match get_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(Error::NotAuthorized),
    }
}

/// Checks shared by both buy entry points. Returns the config for the
/// window checks that follow.
fn require_open_sale(env: &Env, amount: i128) -> Result<SaleConfig, Error> {
    let state = get_state(env);
    if !state.initialized {
        return Err(Error::NotInitialized);
    }
    if !state.began {
        return Err(Error::NotBegun);
    }
    if state.paused {
        return Err(Error::SalePaused);
    }
    let config = get_config(env)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if amount < config.min_contribution {
        return Err(Error::BelowMinContribution);
    }
    Ok(config)
}

fn record_contribution(
    env: &Env,
    buyer: &Address,
    window: u32,
    amount: i128,
    limit: i128,
) -> Result<(), Error> {
    let window_total = get_window_total(env, window)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if limit > 0 && window_total > limit {
        return Err(Error::LimitExceeded);
    }
    let contribution = get_contribution(env, window, buyer)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let mut state = get_state(env);
    state.total_raised = state
        .total_raised
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    let payment = token::Client::new(env, &get_payment_token(env)?);
    payment.transfer(buyer, &env.current_contract_address(), &amount);

    set_window_total(env, window, window_total);
    set_contribution(env, window, buyer, contribution);
    set_state(env, &state);

    events::emit_contribution(env, buyer.clone(), window, amount, window_total);
    Ok(())
}

fn payout(env: &Env, window: u32, contribution: i128) -> Result<i128, Error> {
    let budget = schedule::create_on_window(&get_emission(env), window);
    schedule::pro_rata(budget, contribution, get_window_total(env, window))
        .ok_or(Error::ArithmeticOverflow)
}

/// Tokens of `window` nobody will ever claim. Zero while claims are
/// outstanding.
fn unsold_in_window(env: &Env, window: u32) -> Result<i128, Error> {
    let budget = schedule::create_on_window(&get_emission(env), window);
    let total = get_window_total(env, window);
    if total == 0 {
        return Ok(budget);
    }
    if get_window_settled(env, window) < total {
        return Ok(0);
    }
    budget
        .checked_sub(get_window_claimed(env, window))
        .ok_or(Error::ArithmeticOverflow)
}

fn reserved_tokens(env: &Env) -> Result<i128, Error> {
    TOTAL_SHARES
        .checked_add(get_bulk_total(env))
        .ok_or(Error::ArithmeticOverflow)
}

fn set_sale_paused(env: &Env, paused: bool) {
    let mut state = get_state(env);
    state.paused = paused;
    set_state(env, &state);
    events::emit_sale_paused(env, paused);
}

fn default_grant(beneficiary: &Address, percentage_of_pool: u32) -> GrantTerms {
    GrantTerms {
        beneficiary: beneficiary.clone(),
        percentage_of_pool,
        cliff_duration: VESTING_CLIFF,
        total_vesting_duration: VESTING_DURATION,
    }
}
