use soroban_sdk::{symbol_short, Address, Env, String};

// Topics are (tag, entity id); payloads carry the actors and amounts involved.

pub fn initialized(env: &Env, admin: &Address, token: &Address) {
    env.events()
        .publish((symbol_short!("init"),), (admin.clone(), token.clone()));
}

pub fn proposal_created(
    env: &Env,
    proposal_id: u64,
    creator: &Address,
    category: &String,
    amount_required: i128,
    milestone_count: u32,
) {
    env.events().publish(
        (symbol_short!("prop_new"), proposal_id),
        (
            creator.clone(),
            category.clone(),
            amount_required,
            milestone_count,
        ),
    );
}

pub fn donated(
    env: &Env,
    proposal_id: u64,
    donor: &Address,
    amount: i128,
    donor_total: i128,
    amount_raised: i128,
) {
    env.events().publish(
        (symbol_short!("donated"), proposal_id),
        (donor.clone(), amount, donor_total, amount_raised),
    );
}

pub fn proof_submitted(
    env: &Env,
    proposal_id: u64,
    milestone_index: u32,
    proof_link: &String,
    voting_end_time: u64,
) {
    env.events().publish(
        (symbol_short!("proof"), proposal_id),
        (milestone_index, proof_link.clone(), voting_end_time),
    );
}

pub fn voted(
    env: &Env,
    proposal_id: u64,
    milestone_index: u32,
    voter: &Address,
    support: bool,
    weight: u64,
) {
    env.events().publish(
        (symbol_short!("voted"), proposal_id),
        (milestone_index, voter.clone(), support, weight),
    );
}

pub fn milestone_claimed(
    env: &Env,
    proposal_id: u64,
    milestone_index: u32,
    creator: &Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("claimed"), proposal_id),
        (milestone_index, creator.clone(), amount),
    );
}

pub fn refunded(env: &Env, proposal_id: u64, donor: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("refunded"), proposal_id),
        (donor.clone(), amount),
    );
}

pub fn future_fund_created(
    env: &Env,
    fund_id: u64,
    depositor: &Address,
    unlock_time: u64,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("ff_new"), fund_id),
        (depositor.clone(), unlock_time, amount),
    );
}

pub fn future_fund_claimed(env: &Env, fund_id: u64, claimant: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("ff_claim"), fund_id),
        (claimant.clone(), amount),
    );
}

pub fn fees_withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("fees_out"),), (to.clone(), amount));
}
