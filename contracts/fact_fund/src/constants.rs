/// Fee charged on `create_proposal`, in token stroops (1 whole coin).
pub const CREATION_FEE: i128 = 1_000_000;

/// Subunits per whole coin; vote weight is computed in whole coins.
pub const UNITS_PER_COIN: i128 = 1_000_000;

/// Cumulative donation required before a donor may vote.
pub const MIN_VOTE_DONATION: i128 = UNITS_PER_COIN;

/// Voting window after a proof is submitted: 2 days.
pub const VOTING_WINDOW: u64 = 172_800;

/// Time after proof submission past which a stalled milestone can be refunded: 90 days.
pub const EXPIRATION_WINDOW: u64 = 7_776_000;

pub const MAX_MILESTONES: u32 = 5;
pub const MAX_DESCRIPTION_LEN: u32 = 180;

/// Upper bound on a single `list_proposals` page.
pub const MAX_PAGE_SIZE: u32 = 50;

// TTL management for persistent entries (~30 days at 5s ledgers).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
pub const PERSISTENT_THRESHOLD_LEDGERS: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;
