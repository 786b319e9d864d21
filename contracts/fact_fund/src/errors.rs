use soroban_sdk::{contracterror, contracttype};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    ProposalNotFound = 3,
    FundNotFound = 4,
    Unauthorized = 5,

    // Proposal / milestone lifecycle
    GoalNotReached = 6,
    GoalAlreadyReached = 7,
    AllMilestonesCompleted = 8,
    ProofNotSubmitted = 9,
    VotingClosed = 10,
    VotingStillOpen = 11,
    AlreadyVoted = 12,
    CreatorCannotVote = 13,
    InsufficientDonation = 14,
    NotApproved = 15,
    AlreadyClaimed = 16,
    InsufficientEscrow = 17,

    // Refunds
    NoDonation = 18,
    NotExpired = 19,
    NothingToRefund = 20,
    NothingRaised = 21,

    // Input validation
    InvalidFee = 22,
    InvalidAmount = 23,
    InvalidMilestones = 24,
    MilestoneSumMismatch = 25,
    TooManyMilestones = 26,
    EmptyField = 27,
    DescriptionTooLong = 28,

    // Future fund / fees
    FundLocked = 29,
    NothingToWithdraw = 30,

    TransferFailed = 31,
    Overflow = 32,
}

/// Coarse failure classes surfaced to clients alongside the numeric code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ErrorKind {
    NotFound = 0,
    Unauthorized = 1,
    InvalidState = 2,
    InvalidInput = 3,
    ArithmeticHazard = 4,
    Ledger = 5,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ProposalNotFound | Error::FundNotFound => ErrorKind::NotFound,
            Error::Unauthorized | Error::CreatorCannotVote => ErrorKind::Unauthorized,
            Error::InvalidFee
            | Error::InvalidAmount
            | Error::InvalidMilestones
            | Error::MilestoneSumMismatch
            | Error::TooManyMilestones
            | Error::EmptyField
            | Error::DescriptionTooLong => ErrorKind::InvalidInput,
            Error::NothingRaised | Error::Overflow => ErrorKind::ArithmeticHazard,
            Error::TransferFailed => ErrorKind::Ledger,
            Error::NotInitialized
            | Error::AlreadyInitialized
            | Error::GoalNotReached
            | Error::GoalAlreadyReached
            | Error::AllMilestonesCompleted
            | Error::ProofNotSubmitted
            | Error::VotingClosed
            | Error::VotingStillOpen
            | Error::AlreadyVoted
            | Error::InsufficientDonation
            | Error::NotApproved
            | Error::AlreadyClaimed
            | Error::InsufficientEscrow
            | Error::NoDonation
            | Error::NotExpired
            | Error::NothingToRefund
            | Error::FundLocked
            | Error::NothingToWithdraw => ErrorKind::InvalidState,
        }
    }
}
