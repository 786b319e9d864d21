use crate::constants::{PERSISTENT_BUMP_LEDGERS, PERSISTENT_THRESHOLD_LEDGERS};
use crate::errors::Error;
use crate::types::{Config, DataKey, FutureFund, Proposal, VoteMarker};
use soroban_sdk::{Address, Env, Vec};

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

// ---- config ----

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ---- proposals ----

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

/// Reserves the next proposal id; ids run from 0. Only call once every
/// precondition has passed.
pub fn next_proposal_id(env: &Env) -> Result<u64, Error> {
    let id = get_proposal_count(env);
    set_proposal_count(env, id.checked_add(1).ok_or(Error::Overflow)?);
    Ok(id)
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn load_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, Error> {
    get_proposal(env, proposal_id).ok_or(Error::ProposalNotFound)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump(env, &key);
}

// ---- donations ----

pub fn has_donation(env: &Env, proposal_id: u64, donor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Donation(proposal_id, donor.clone()))
}

pub fn get_donation(env: &Env, proposal_id: u64, donor: &Address) -> Option<i128> {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(proposal_id, donor.clone()))
}

pub fn set_donation(env: &Env, proposal_id: u64, donor: &Address, amount: i128) {
    let key = DataKey::Donation(proposal_id, donor.clone());
    env.storage().persistent().set(&key, &amount);
    bump(env, &key);
}

/// Donor at `index` in first-donation order; `index < no_of_unique_donors`.
pub fn get_donor_at(env: &Env, proposal_id: u64, index: u64) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Donor(proposal_id, index))
}

pub fn set_donor_at(env: &Env, proposal_id: u64, index: u64, donor: &Address) {
    let key = DataKey::Donor(proposal_id, index);
    env.storage().persistent().set(&key, donor);
    bump(env, &key);
}

// ---- votes ----

/// True if `voter` already voted in this milestone's current proof round.
pub fn has_voted(
    env: &Env,
    proposal_id: u64,
    voter: &Address,
    milestone: u32,
    round: u32,
) -> bool {
    let marker: Option<VoteMarker> = env
        .storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()));
    marker == Some(VoteMarker { milestone, round })
}

pub fn set_voted(env: &Env, proposal_id: u64, voter: &Address, milestone: u32, round: u32) {
    let key = DataKey::Vote(proposal_id, voter.clone());
    env.storage()
        .persistent()
        .set(&key, &VoteMarker { milestone, round });
    bump(env, &key);
}

// ---- future funds ----

pub fn get_fund_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::FundCount)
        .unwrap_or(0)
}

pub fn set_fund_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::FundCount, &count);
    bump_instance(env);
}

pub fn next_fund_id(env: &Env) -> Result<u64, Error> {
    let id = get_fund_count(env);
    set_fund_count(env, id.checked_add(1).ok_or(Error::Overflow)?);
    Ok(id)
}

pub fn get_future_fund(env: &Env, fund_id: u64) -> Option<FutureFund> {
    env.storage()
        .persistent()
        .get(&DataKey::FutureFund(fund_id))
}

pub fn set_future_fund(env: &Env, fund: &FutureFund) {
    let key = DataKey::FutureFund(fund.id);
    env.storage().persistent().set(&key, fund);
    bump(env, &key);
}

// ---- creation fees ----

pub fn get_collected_fees(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CollectedFees)
        .unwrap_or(0)
}

pub fn set_collected_fees(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::CollectedFees, &amount);
    bump_instance(env);
}
