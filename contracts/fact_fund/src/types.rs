use soroban_sdk::{contracttype, Address, Env, String, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Config {
    pub admin: Address,
    /// Asset contract every payment is denominated in.
    pub token: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MilestoneInput {
    pub name: String,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Milestone {
    pub name: String,
    pub amount: i128,
    pub proof_link: String,
    pub votes_for: u64,     // weighted sum
    pub votes_against: u64, // weighted sum
    pub total_voters: u32,
    pub claimed: bool,
    pub proof_submitted_time: u64,
    pub voting_end_time: u64,
    /// Bumped on every proof submission; votes count only in their round.
    pub round: u32,
}

impl Milestone {
    pub fn from_input(env: &Env, input: &MilestoneInput) -> Self {
        Milestone {
            name: input.name.clone(),
            amount: input.amount,
            proof_link: String::from_str(env, ""),
            votes_for: 0,
            votes_against: 0,
            total_voters: 0,
            claimed: false,
            proof_submitted_time: 0,
            voting_end_time: 0,
            round: 0,
        }
    }

    pub fn has_proof(&self) -> bool {
        self.proof_link.len() > 0
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Proposal {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub amount_required: i128,
    pub created_by: Address,
    pub amount_raised: i128,
    pub no_of_donations: u64,
    pub no_of_unique_donors: u64,
    pub milestones: Vec<Milestone>,
    pub current_milestone: u32,
    pub created_at: u64,
    /// Sum of claimed milestone amounts paid to the creator.
    pub amount_released: i128,
    /// Sum of refunds paid back to donors.
    pub amount_refunded: i128,
}

impl Proposal {
    pub fn goal_reached(&self) -> bool {
        self.amount_raised >= self.amount_required
    }

    /// Balance still held by the contract on behalf of this proposal.
    pub fn held_balance(&self) -> i128 {
        self.amount_raised - self.amount_released - self.amount_refunded
    }
}

/// Last vote a donor cast on a proposal.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VoteMarker {
    pub milestone: u32,
    pub round: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DonorEntry {
    pub donor: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FutureFund {
    pub id: u64,
    pub depositor: Address,
    pub primary: Address,
    pub backup: Address,
    pub unlock_time: u64,
    pub amount: i128,
    pub claimed: bool,
    pub created_at: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    ProposalCount,
    Proposal(u64),
    Donation(u64, Address), // (proposal_id, donor) -> cumulative amount
    Donor(u64, u64),        // (proposal_id, index) -> donor, in first-donation order
    Vote(u64, Address),     // (proposal_id, voter) -> VoteMarker
    FundCount,
    FutureFund(u64),
    CollectedFees,
}
