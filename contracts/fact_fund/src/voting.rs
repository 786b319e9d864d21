use crate::constants::{MIN_VOTE_DONATION, UNITS_PER_COIN};
use crate::errors::Error;

/// Integer square root, rounded down.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = n / 2 + (n & 1);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Vote weight of a donor whose cumulative donation is `donated`.
///
/// `floor(sqrt(donated / UNITS_PER_COIN))`, i.e. the square root of whole coins given.
pub fn vote_weight(donated: i128) -> Result<u64, Error> {
    if donated < MIN_VOTE_DONATION {
        return Err(Error::InsufficientDonation);
    }
    let coins = (donated / UNITS_PER_COIN) as u128;
    u64::try_from(isqrt(coins)).map_err(|_| Error::Overflow)
}
