//! Milestone lifecycle: proof submission, weighted voting, claim.
//!
//! These functions check and mutate an in-memory [`Proposal`]; persisting the
//! result and paying out is left to the contract entry points so that every
//! check runs before the first storage write.

use crate::constants::VOTING_WINDOW;
use crate::errors::Error;
use crate::types::{Milestone, Proposal};
use soroban_sdk::{Address, String};

/// Returns the milestone at `current_milestone`, or `AllMilestonesCompleted`.
pub fn current(proposal: &Proposal) -> Result<Milestone, Error> {
    proposal
        .milestones
        .get(proposal.current_milestone)
        .ok_or(Error::AllMilestonesCompleted)
}

fn store_current(proposal: &mut Proposal, milestone: Milestone) {
    proposal
        .milestones
        .set(proposal.current_milestone, milestone);
}

/// Opens (or reopens) the vote on the current milestone.
pub fn submit_proof(
    proposal: &mut Proposal,
    caller: &Address,
    proof_link: String,
    now: u64,
) -> Result<(), Error> {
    if *caller != proposal.created_by {
        return Err(Error::Unauthorized);
    }
    if !proposal.goal_reached() {
        return Err(Error::GoalNotReached);
    }
    let mut milestone = current(proposal)?;
    if proof_link.len() == 0 {
        return Err(Error::EmptyField);
    }

    milestone.proof_link = proof_link;
    milestone.proof_submitted_time = now;
    milestone.voting_end_time = now.checked_add(VOTING_WINDOW).ok_or(Error::Overflow)?;
    milestone.claimed = false;
    milestone.votes_for = 0;
    milestone.votes_against = 0;
    milestone.total_voters = 0;
    milestone.round = milestone.round.checked_add(1).ok_or(Error::Overflow)?;
    store_current(proposal, milestone);
    Ok(())
}

/// Checks that `caller` may vote on the current milestone right now.
///
/// Donation size is checked separately, when the weight is computed.
pub fn ensure_can_vote(
    proposal: &Proposal,
    caller: &Address,
    already_voted: bool,
    now: u64,
) -> Result<(), Error> {
    let milestone = current(proposal)?;
    if already_voted {
        return Err(Error::AlreadyVoted);
    }
    if *caller == proposal.created_by {
        return Err(Error::CreatorCannotVote);
    }
    if !milestone.has_proof() {
        return Err(Error::ProofNotSubmitted);
    }
    if now >= milestone.voting_end_time {
        return Err(Error::VotingClosed);
    }
    Ok(())
}

pub fn record_vote(proposal: &mut Proposal, weight: u64, support: bool) -> Result<(), Error> {
    let mut milestone = current(proposal)?;
    if support {
        milestone.votes_for = milestone
            .votes_for
            .checked_add(weight)
            .ok_or(Error::Overflow)?;
    } else {
        milestone.votes_against = milestone
            .votes_against
            .checked_add(weight)
            .ok_or(Error::Overflow)?;
    }
    milestone.total_voters = milestone
        .total_voters
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    store_current(proposal, milestone);
    Ok(())
}

/// Marks the current milestone claimed and advances the proposal.
///
/// Returns the amount owed to the creator.
pub fn claim(proposal: &mut Proposal, now: u64) -> Result<i128, Error> {
    let mut milestone = current(proposal)?;
    if !milestone.has_proof() || milestone.proof_submitted_time == 0 {
        return Err(Error::ProofNotSubmitted);
    }
    if now <= milestone.voting_end_time {
        return Err(Error::VotingStillOpen);
    }
    // Ties are not approval.
    if milestone.votes_for <= milestone.votes_against {
        return Err(Error::NotApproved);
    }
    if milestone.claimed {
        return Err(Error::AlreadyClaimed);
    }
    if proposal.held_balance() < milestone.amount {
        return Err(Error::InsufficientEscrow);
    }

    let amount = milestone.amount;
    milestone.claimed = true;
    store_current(proposal, milestone);
    proposal.current_milestone += 1;
    proposal.amount_released = proposal
        .amount_released
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    Ok(amount)
}
