use crate::constants::MAX_PAGE_SIZE;
use crate::errors::Error;
use crate::events;
use crate::future_fund;
use crate::ledger::{Ledger, TokenLedger};
use crate::milestone;
use crate::refund;
use crate::storage::*;
use crate::types::*;
use crate::validation::{validate_creation_fee, validate_details, validate_milestones};
use crate::voting;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String, Vec};

contractmeta!(
    key = "Description",
    val = "Milestone-gated crowdfunding with donation-weighted votes"
);

#[contract]
pub struct FactFundContract;

fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

fn ledger(env: &Env, config: &Config) -> TokenLedger<'static> {
    TokenLedger::new(env, &config.token)
}

#[contractimpl]
impl FactFundContract {
    /// Binds the contract to the payment token and the fee administrator.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        set_config(
            &env,
            &Config {
                admin: admin.clone(),
                token: token.clone(),
            },
        );
        set_proposal_count(&env, 0);
        set_fund_count(&env, 0);
        set_collected_fees(&env, 0);

        events::initialized(&env, &admin, &token);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Proposals and donations
    // ------------------------------------------------------------------

    /// Creates a proposal whose milestones split `amount_required` exactly.
    ///
    /// `creation_fee` must equal [`crate::constants::CREATION_FEE`]; it is
    /// drawn from `caller` and kept by the contract.
    #[allow(clippy::too_many_arguments)]
    pub fn create_proposal(
        env: Env,
        caller: Address,
        name: String,
        title: String,
        description: String,
        category: String,
        amount_required: i128,
        milestones: Vec<MilestoneInput>,
        creation_fee: i128,
    ) -> Result<u64, Error> {
        caller.require_auth();
        let config = get_config(&env)?;

        validate_creation_fee(creation_fee)?;
        validate_details(&name, &title, &description, &category)?;
        validate_milestones(amount_required, &milestones)?;
        let collected = get_collected_fees(&env)
            .checked_add(creation_fee)
            .ok_or(Error::Overflow)?;

        let proposal_id = next_proposal_id(&env)?;
        let mut plan = Vec::new(&env);
        for input in milestones.iter() {
            plan.push_back(Milestone::from_input(&env, &input));
        }
        let proposal = Proposal {
            id: proposal_id,
            name,
            title,
            description,
            category,
            amount_required,
            created_by: caller.clone(),
            amount_raised: 0,
            no_of_donations: 0,
            no_of_unique_donors: 0,
            milestones: plan,
            current_milestone: 0,
            created_at: now(&env),
            amount_released: 0,
            amount_refunded: 0,
        };
        set_proposal(&env, &proposal);
        set_collected_fees(&env, collected);

        ledger(&env, &config).transfer(&caller, &env.current_contract_address(), creation_fee)?;

        events::proposal_created(
            &env,
            proposal_id,
            &caller,
            &proposal.category,
            amount_required,
            proposal.milestones.len(),
        );
        Ok(proposal_id)
    }

    /// Donates `amount` to a proposal that has not yet met its goal.
    ///
    /// The final donation is accepted in full even if it overshoots the goal.
    pub fn donate_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        let mut proposal = load_proposal(&env, proposal_id)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if proposal.goal_reached() {
            return Err(Error::GoalAlreadyReached);
        }

        let previous = get_donation(&env, proposal_id, &caller);
        let donor_total = previous
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if previous.is_none() {
            set_donor_at(&env, proposal_id, proposal.no_of_unique_donors, &caller);
            proposal.no_of_unique_donors += 1;
        }
        proposal.no_of_donations += 1;
        proposal.amount_raised = proposal
            .amount_raised
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        set_donation(&env, proposal_id, &caller, donor_total);
        set_proposal(&env, &proposal);

        ledger(&env, &config).transfer(&caller, &env.current_contract_address(), amount)?;

        events::donated(
            &env,
            proposal_id,
            &caller,
            amount,
            donor_total,
            proposal.amount_raised,
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Milestones
    // ------------------------------------------------------------------

    /// Creator-only. Attaches proof to the current milestone and opens a fresh
    /// voting window, discarding any earlier tally for it.
    pub fn submit_proof(
        env: Env,
        caller: Address,
        proposal_id: u64,
        proof_link: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        get_config(&env)?;
        let mut proposal = load_proposal(&env, proposal_id)?;

        milestone::submit_proof(&mut proposal, &caller, proof_link, now(&env))?;

        set_proposal(&env, &proposal);

        let current = milestone::current(&proposal)?;
        events::proof_submitted(
            &env,
            proposal_id,
            proposal.current_milestone,
            &current.proof_link,
            current.voting_end_time,
        );
        Ok(())
    }

    /// Casts a donation-weighted vote on the current milestone.
    pub fn vote_milestone(
        env: Env,
        caller: Address,
        proposal_id: u64,
        vote: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        get_config(&env)?;
        let mut proposal = load_proposal(&env, proposal_id)?;
        let index = proposal.current_milestone;
        let round = milestone::current(&proposal)?.round;
        let already_voted = has_voted(&env, proposal_id, &caller, index, round);

        milestone::ensure_can_vote(&proposal, &caller, already_voted, now(&env))?;
        let donated = get_donation(&env, proposal_id, &caller).ok_or(Error::NoDonation)?;
        let weight = voting::vote_weight(donated)?;
        milestone::record_vote(&mut proposal, weight, vote)?;

        set_voted(&env, proposal_id, &caller, index, round);
        set_proposal(&env, &proposal);

        events::voted(
            &env,
            proposal_id,
            proposal.current_milestone,
            &caller,
            vote,
            weight,
        );
        Ok(())
    }

    /// Pays the current milestone to the creator once its vote has closed in
    /// favour, then advances to the next milestone.
    pub fn claim_milestone(env: Env, caller: Address, proposal_id: u64) -> Result<i128, Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        let mut proposal = load_proposal(&env, proposal_id)?;

        let index = proposal.current_milestone;
        let amount = milestone::claim(&mut proposal, now(&env))?;
        set_proposal(&env, &proposal);

        ledger(&env, &config).transfer(
            &env.current_contract_address(),
            &proposal.created_by,
            amount,
        )?;

        events::milestone_claimed(&env, proposal_id, index, &proposal.created_by, amount);
        Ok(amount)
    }

    /// Refunds the caller's proportional share once the current milestone has
    /// sat unclaimed past the expiration window. The caller's donation record
    /// is zeroed in the same invocation as the payment.
    pub fn refund_if_inactive(env: Env, caller: Address, proposal_id: u64) -> Result<i128, Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        let mut proposal = load_proposal(&env, proposal_id)?;
        let donated = get_donation(&env, proposal_id, &caller).ok_or(Error::NoDonation)?;

        refund::ensure_expired(&proposal, now(&env))?;
        let amount = refund::refund_amount(&proposal, donated)?;

        proposal.amount_refunded = proposal
            .amount_refunded
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        set_donation(&env, proposal_id, &caller, 0);
        set_proposal(&env, &proposal);

        ledger(&env, &config).transfer(&env.current_contract_address(), &caller, amount)?;

        events::refunded(&env, proposal_id, &caller, amount);
        Ok(amount)
    }

    // ------------------------------------------------------------------
    // Future-self fund
    // ------------------------------------------------------------------

    /// Locks `amount` from the caller until `unlock_time`, claimable by either
    /// `primary` or `backup`.
    pub fn fund_future_self(
        env: Env,
        caller: Address,
        primary: Address,
        backup: Address,
        unlock_time: u64,
        amount: i128,
    ) -> Result<u64, Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let fund_id = next_fund_id(&env)?;
        let fund = FutureFund {
            id: fund_id,
            depositor: caller.clone(),
            primary,
            backup,
            unlock_time,
            amount,
            claimed: false,
            created_at: now(&env),
        };
        set_future_fund(&env, &fund);

        ledger(&env, &config).transfer(&caller, &env.current_contract_address(), amount)?;

        events::future_fund_created(&env, fund_id, &caller, unlock_time, amount);
        Ok(fund_id)
    }

    pub fn claim_future_self(env: Env, caller: Address, fund_id: u64) -> Result<i128, Error> {
        caller.require_auth();
        let config = get_config(&env)?;
        let mut fund = get_future_fund(&env, fund_id).ok_or(Error::FundNotFound)?;

        let amount = future_fund::claim(&mut fund, &caller, now(&env))?;
        set_future_fund(&env, &fund);

        ledger(&env, &config).transfer(&env.current_contract_address(), &caller, amount)?;

        events::future_fund_claimed(&env, fund_id, &caller, amount);
        Ok(amount)
    }

    // ------------------------------------------------------------------
    // Fees
    // ------------------------------------------------------------------

    /// Admin-only. Sends every collected creation fee to `to`.
    pub fn withdraw_fees(env: Env, admin: Address, to: Address) -> Result<i128, Error> {
        admin.require_auth();
        let config = get_config(&env)?;
        if admin != config.admin {
            return Err(Error::Unauthorized);
        }
        let fees = get_collected_fees(&env);
        if fees <= 0 {
            return Err(Error::NothingToWithdraw);
        }
        set_collected_fees(&env, 0);

        ledger(&env, &config).transfer(&env.current_contract_address(), &to, fees)?;

        events::fees_withdrawn(&env, &to, fees);
        Ok(fees)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn get_config(env: Env) -> Result<Config, Error> {
        get_config(&env)
    }

    pub fn get_proposal_count(env: Env) -> u64 {
        get_proposal_count(&env)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        get_proposal(&env, proposal_id)
    }

    /// Proposals with ids in `[start_id, start_id + limit)`, oldest first.
    pub fn list_proposals(env: Env, start_id: u64, limit: u32) -> Vec<Proposal> {
        let mut out = Vec::new(&env);
        let count = get_proposal_count(&env);
        let limit = limit.min(MAX_PAGE_SIZE) as u64;
        let mut id = start_id;
        while id < count && (out.len() as u64) < limit {
            if let Some(proposal) = get_proposal(&env, id) {
                out.push_back(proposal);
            }
            id += 1;
        }
        out
    }

    pub fn get_donation(env: Env, proposal_id: u64, donor: Address) -> Option<i128> {
        get_donation(&env, proposal_id, &donor)
    }

    pub fn has_donated(env: Env, proposal_id: u64, donor: Address) -> bool {
        has_donation(&env, proposal_id, &donor)
    }

    /// Whether `voter` has voted in the current proof round of the
    /// proposal's current milestone.
    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        match get_proposal(&env, proposal_id) {
            Some(proposal) => match milestone::current(&proposal) {
                Ok(current) => has_voted(
                    &env,
                    proposal_id,
                    &voter,
                    proposal.current_milestone,
                    current.round,
                ),
                Err(_) => false,
            },
            None => false,
        }
    }

    /// Donors with their cumulative totals, in first-donation order, for
    /// indexes `[start, start + limit)`.
    pub fn list_donors(env: Env, proposal_id: u64, start: u64, limit: u32) -> Vec<DonorEntry> {
        let mut out = Vec::new(&env);
        let count = match get_proposal(&env, proposal_id) {
            Some(proposal) => proposal.no_of_unique_donors,
            None => return out,
        };
        let limit = limit.min(MAX_PAGE_SIZE) as u64;
        let mut index = start;
        while index < count && (out.len() as u64) < limit {
            if let Some(donor) = get_donor_at(&env, proposal_id, index) {
                let amount = get_donation(&env, proposal_id, &donor).unwrap_or(0);
                out.push_back(DonorEntry { donor, amount });
            }
            index += 1;
        }
        out
    }

    /// Weight a donor with this cumulative donation would vote with; 0 below the threshold.
    pub fn get_vote_weight(_env: Env, donated: i128) -> u64 {
        voting::vote_weight(donated).unwrap_or(0)
    }

    pub fn get_future_fund(env: Env, fund_id: u64) -> Option<FutureFund> {
        get_future_fund(&env, fund_id)
    }

    pub fn get_future_fund_count(env: Env) -> u64 {
        get_fund_count(&env)
    }

    pub fn get_collected_fees(env: Env) -> i128 {
        get_collected_fees(&env)
    }
}
