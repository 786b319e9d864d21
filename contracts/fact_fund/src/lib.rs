//! # FactFund
//!
//! Milestone-gated crowdfunding. Donors fund a proposal up to its goal; the
//! creator is then paid one milestone at a time, each release gated by a vote
//! weighted by `floor(sqrt(whole coins donated))`. Stalled milestones can be
//! refunded proportionally once they expire. The contract also hosts an
//! independent time-locked "future self" escrow.
//!
//! | Phase       | Entry point(s)                                   |
//! |-------------|--------------------------------------------------|
//! | Bootstrap   | `initialize`                                     |
//! | Fundraising | `create_proposal`, `donate_proposal`             |
//! | Milestones  | `submit_proof`, `vote_milestone`, `claim_milestone` |
//! | Refunds     | `refund_if_inactive`                             |
//! | Escrow      | `fund_future_self`, `claim_future_self`          |
//! | Fees        | `withdraw_fees`                                  |

#![no_std]

pub mod constants;
pub mod contract;
mod errors;
mod events;
mod future_fund;
pub mod ledger;
mod milestone;
mod refund;
mod storage;
mod types;
mod validation;
pub mod voting;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;


pub use contract::{FactFundContract, FactFundContractClient};
pub use errors::{Error, ErrorKind};
pub use types::{Config, DonorEntry, FutureFund, Milestone, MilestoneInput, Proposal};
