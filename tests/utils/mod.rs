/// Testing utilities shared by the scenario and property suites.
#[macro_use]
pub mod assertions;
pub mod scenario;

pub use assertions::*;
pub use scenario::*;

/// Common test constants
pub mod constants {
    pub use fact_fund::testutils::{COIN, START_TIME};

    /// Starting balance handed to every generated donor.
    pub const DONOR_BALANCE: i128 = 10_000 * COIN;
    /// Enough for a creator to pay several creation fees.
    pub const CREATOR_BALANCE: i128 = 10 * COIN;
}
