#![allow(clippy::unwrap_used)]

//! Shared fixture for contract tests: a registered contract bound to a fresh
//! Stellar asset, with all auths mocked and the ledger clock pinned.

use crate::constants::CREATION_FEE;
use crate::{FactFundContract, FactFundContractClient, MilestoneInput};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env, String, Vec};

pub const START_TIME: u64 = 1_700_000_000;
pub const COIN: i128 = 1_000_000;

const MILESTONE_NAMES: [&str; 6] = ["Research", "Build", "Pilot", "Launch", "Scale", "Extra"];

pub struct FundFixture {
    pub env: Env,
    pub client: FactFundContractClient<'static>,
    pub token: token::Client<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub admin: Address,
}

impl Default for FundFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl FundFixture {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START_TIME);

        let admin = Address::generate(&env);
        let token_id = env
            .register_stellar_asset_contract_v2(admin.clone())
            .address();
        let contract_id = env.register_contract(None, FactFundContract);
        let client = FactFundContractClient::new(&env, &contract_id);
        client.initialize(&admin, &token_id);

        FundFixture {
            token: token::Client::new(&env, &token_id),
            token_admin: token::StellarAssetClient::new(&env, &token_id),
            client,
            admin,
            env,
        }
    }

    /// A fresh identity holding `balance` of the payment token.
    pub fn account(&self, balance: i128) -> Address {
        let who = Address::generate(&self.env);
        if balance > 0 {
            self.token_admin.mint(&who, &balance);
        }
        who
    }

    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    pub fn plan(&self, amounts: &[i128]) -> Vec<MilestoneInput> {
        let mut out = Vec::new(&self.env);
        for (i, amount) in amounts.iter().enumerate() {
            out.push_back(MilestoneInput {
                name: self.text(MILESTONE_NAMES[i % MILESTONE_NAMES.len()]),
                amount: *amount,
            });
        }
        out
    }

    /// Creates a proposal whose goal is the sum of `amounts`. The creator must
    /// hold at least the creation fee.
    pub fn create_proposal(&self, creator: &Address, amounts: &[i128]) -> u64 {
        let required: i128 = amounts.iter().sum();
        self.client.create_proposal(
            creator,
            &self.text("Ada"),
            &self.text("Community water filters"),
            &self.text("Filters for three villages, released per install phase."),
            &self.text("Environment"),
            &required,
            &self.plan(amounts),
            &CREATION_FEE,
        )
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn advance(&self, seconds: u64) {
        self.set_time(self.now() + seconds);
    }

    pub fn balance(&self, who: &Address) -> i128 {
        self.token.balance(who)
    }

    pub fn contract_balance(&self) -> i128 {
        self.token.balance(&self.client.address)
    }
}
