use crate::constants::EXPIRATION_WINDOW;
use crate::errors::Error;
use crate::milestone;
use crate::types::Proposal;

/// True once the current milestone's proof is older than the expiration window.
///
/// A milestone with no proof never expires: the refund clock only starts at
/// proof submission.
pub fn ensure_expired(proposal: &Proposal, now: u64) -> Result<(), Error> {
    let milestone = milestone::current(proposal)?;
    if milestone.proof_submitted_time == 0 {
        return Err(Error::ProofNotSubmitted);
    }
    let elapsed = now.saturating_sub(milestone.proof_submitted_time);
    if elapsed <= EXPIRATION_WINDOW {
        return Err(Error::NotExpired);
    }
    Ok(())
}

/// Proportional share of the unraised remainder owed to a donor.
///
/// `(amount_required - amount_raised) * donated / amount_raised`, truncated,
/// and never more than the proposal still holds. A goal that was met or
/// overshot leaves no remainder, so nothing is owed.
pub fn refund_amount(proposal: &Proposal, donated: i128) -> Result<i128, Error> {
    if donated <= 0 {
        return Err(Error::NothingToRefund);
    }
    if proposal.amount_raised <= 0 {
        return Err(Error::NothingRaised);
    }
    let remaining = proposal.amount_required - proposal.amount_raised;
    if remaining <= 0 {
        return Err(Error::NothingToRefund);
    }
    let refund = remaining
        .checked_mul(donated)
        .ok_or(Error::Overflow)?
        / proposal.amount_raised;
    let refund = refund.min(proposal.held_balance());
    if refund <= 0 {
        return Err(Error::NothingToRefund);
    }
    Ok(refund)
}
