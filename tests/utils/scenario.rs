/// Scenario builders layered on the contract's own fixture
use fact_fund::constants::{CREATION_FEE, EXPIRATION_WINDOW, VOTING_WINDOW};
use fact_fund::testutils::FundFixture;
use soroban_sdk::Address;

/// A created proposal with its creator.
pub struct Campaign {
    pub id: u64,
    pub creator: Address,
}

/// Creates a proposal from a fresh creator holding exactly the creation fee.
pub fn open_campaign(f: &FundFixture, milestones: &[i128]) -> Campaign {
    let creator = f.account(CREATION_FEE);
    let id = f.create_proposal(&creator, milestones);
    Campaign { id, creator }
}

/// Funds `donor` with `amount` and donates all of it to `campaign`.
pub fn donate_from_new(f: &FundFixture, campaign: &Campaign, amount: i128) -> Address {
    let donor = f.account(amount);
    f.client.donate_proposal(&donor, &campaign.id, &amount);
    donor
}

pub fn prove(f: &FundFixture, campaign: &Campaign, link: &str) {
    f.client
        .submit_proof(&campaign.creator, &campaign.id, &f.text(link));
}

pub fn close_vote(f: &FundFixture) {
    f.advance(VOTING_WINDOW + 1);
}

pub fn expire(f: &FundFixture) {
    f.advance(EXPIRATION_WINDOW + 1);
}

/// Tokens the contract should still hold for a proposal.
pub fn held(f: &FundFixture, campaign: &Campaign) -> i128 {
    match f.client.get_proposal(&campaign.id) {
        Some(p) => p.amount_raised - p.amount_released - p.amount_refunded,
        None => 0,
    }
}
