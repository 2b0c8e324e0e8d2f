/// Fully wired sale: ledger, escrow, payment token and engine.
use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, String as SorobanString,
};
use token_sale::{
    constants::WINDOW_DURATION, SaleConfig, SaleWallets, TokenSaleContract,
    TokenSaleContractClient,
};
use vesting_escrow::{VestingEscrow, VestingEscrowClient};

use super::constants::*;

pub struct SaleFixture<'a> {
    pub env: &'a Env,
    pub sale: TokenSaleContractClient<'a>,
    pub ledger: SaleTokenClient<'a>,
    pub escrow: VestingEscrowClient<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub owner: Address,
    pub wallets: SaleWallets,
}

impl<'a> SaleFixture<'a> {
    /// Deploy every contract and initialize the engine at `SALE_START`.
    pub fn new(env: &'a Env) -> Self {
        env.mock_all_auths();
        env.budget().reset_unlimited();
        env.ledger().with_mut(|l| l.timestamp = SALE_START);

        let owner = Address::generate(env);

        let ledger = SaleTokenClient::new(env, &env.register_contract(None, SaleToken));
        ledger.initialize(
            &owner,
            &7u32,
            &SorobanString::from_str(env, "Window Sale Token"),
            &SorobanString::from_str(env, "WST"),
            &TOTAL_SUPPLY,
        );

        let escrow = VestingEscrowClient::new(env, &env.register_contract(None, VestingEscrow));
        escrow.initialize(&owner, &ledger.address);

        let payment_address = env
            .register_stellar_asset_contract_v2(Address::generate(env))
            .address();
        let payment = token::Client::new(env, &payment_address);
        let payment_admin = token::StellarAssetClient::new(env, &payment_address);

        let sale = TokenSaleContractClient::new(env, &env.register_contract(None, TokenSaleContract));
        let wallets = SaleWallets {
            foundation: Address::generate(env),
            company: Address::generate(env),
            marketing: Address::generate(env),
            team: vec![
                env,
                Address::generate(env),
                Address::generate(env),
                Address::generate(env),
                Address::generate(env),
            ],
            unsold_tokens: Address::generate(env),
            beneficiary: Address::generate(env),
        };
        sale.initialize(
            &owner,
            &ledger.address,
            &escrow.address,
            &payment_address,
            &wallets,
            &default_config(),
        );

        Self {
            env,
            sale,
            ledger,
            escrow,
            payment,
            payment_admin,
            owner,
            wallets,
        }
    }

    /// Run the setup phase through to an open sale.
    pub fn started(env: &'a Env) -> Self {
        let fixture = Self::new(env);
        fixture.sale.set_emission_rates(
            &fixture.owner,
            &FIRST_WINDOW_TOKENS,
            &OTHER_WINDOW_TOKENS,
        );
        fixture.sale.distribute_shares(&fixture.owner);
        fixture.sale.begin(&fixture.owner);
        fixture
    }

    /// A fresh account holding `BUYER_FUNDS` of the payment token.
    pub fn buyer(&self) -> Address {
        let account = Address::generate(self.env);
        self.payment_admin.mint(&account, &BUYER_FUNDS);
        account
    }

    pub fn advance_to(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    pub fn advance_to_window(&self, window: u32) {
        self.advance_to(window_start(window));
    }

    /// Every non-pool holder the sale itself can pay tokens to.
    pub fn stakeholders(&self) -> std::vec::Vec<Address> {
        let w = &self.wallets;
        let mut holders = std::vec![
            self.escrow.address.clone(),
            w.foundation.clone(),
            w.company.clone(),
            w.marketing.clone(),
            w.unsold_tokens.clone(),
        ];
        holders.extend(w.team.iter());
        holders
    }
}

pub fn default_config() -> SaleConfig {
    SaleConfig {
        total_supply: TOTAL_SUPPLY,
        first_window_start: SALE_START,
        other_windows_start: OTHER_WINDOWS_START,
        number_of_other_windows: OTHER_WINDOWS,
        min_contribution: 1,
    }
}

pub fn window_start(window: u32) -> u64 {
    match window {
        0 => SALE_START,
        w => OTHER_WINDOWS_START + (w as u64 - 1) * WINDOW_DURATION,
    }
}
