use crate::constants::{CREATION_FEE, MAX_DESCRIPTION_LEN, MAX_MILESTONES};
use crate::errors::Error;
use crate::types::MilestoneInput;
use soroban_sdk::{String, Vec};

pub fn require_non_empty(value: &String) -> Result<(), Error> {
    if value.len() == 0 {
        return Err(Error::EmptyField);
    }
    Ok(())
}

pub fn validate_creation_fee(fee: i128) -> Result<(), Error> {
    if fee != CREATION_FEE {
        return Err(Error::InvalidFee);
    }
    Ok(())
}

pub fn validate_details(
    name: &String,
    title: &String,
    description: &String,
    category: &String,
) -> Result<(), Error> {
    require_non_empty(name)?;
    require_non_empty(title)?;
    require_non_empty(description)?;
    require_non_empty(category)?;
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::DescriptionTooLong);
    }
    Ok(())
}

/// Checks the milestone plan against the funding goal: 1..=5 tranches, each
/// named and positive, summing exactly to `amount_required`.
pub fn validate_milestones(
    amount_required: i128,
    milestones: &Vec<MilestoneInput>,
) -> Result<(), Error> {
    if amount_required <= 0 {
        return Err(Error::InvalidAmount);
    }
    if milestones.is_empty() {
        return Err(Error::InvalidMilestones);
    }
    if milestones.len() > MAX_MILESTONES {
        return Err(Error::TooManyMilestones);
    }

    let mut total: i128 = 0;
    for milestone in milestones.iter() {
        require_non_empty(&milestone.name)?;
        if milestone.amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        total = total
            .checked_add(milestone.amount)
            .ok_or(Error::Overflow)?;
    }
    if total != amount_required {
        return Err(Error::MilestoneSumMismatch);
    }
    Ok(())
}
