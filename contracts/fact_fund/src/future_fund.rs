use crate::errors::Error;
use crate::types::FutureFund;
use soroban_sdk::Address;

/// Validates a claim on a future fund and marks it claimed.
pub fn claim(fund: &mut FutureFund, caller: &Address, now: u64) -> Result<i128, Error> {
    if fund.claimed {
        return Err(Error::AlreadyClaimed);
    }
    if now < fund.unlock_time {
        return Err(Error::FundLocked);
    }
    if *caller != fund.primary && *caller != fund.backup {
        return Err(Error::Unauthorized);
    }
    fund.claimed = true;
    Ok(fund.amount)
}
