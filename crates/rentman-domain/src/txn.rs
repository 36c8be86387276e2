//! Transaction-number generation.
//!
//! Numbers are human-decodable and probabilistically unique:
//! `TXN_<DDMMYYYYHHMMSS>_<BuildingLetter>_<RoomNumber>_<4-digit-random>`.
//! Uniqueness is enforced by the database constraint on the column; two
//! writes in the same second for the same room have a 1-in-9000 collision
//! chance, so callers must treat a duplicate rejection as retryable.

use chrono::{DateTime, Utc};
use rand::Rng as _;

use crate::building;

pub const SUFFIX_MIN: u16 = 1000;
pub const SUFFIX_MAX: u16 = 9999;

/// Format a transaction number from its parts. Pure; suffix supplied by the
/// caller.
pub fn format_transaction_number(
    at: DateTime<Utc>,
    building_code: &str,
    room_no: i32,
    suffix: u16,
) -> String {
    format!(
        "TXN_{}_{}_{}_{}",
        at.format("%d%m%Y%H%M%S"),
        building::letter(building_code),
        room_no,
        suffix,
    )
}

/// Generate a transaction number stamped with `at` (save time, one-second
/// granularity) and a uniform random suffix in [1000, 9999].
pub fn transaction_number(at: DateTime<Utc>, building_code: &str, room_no: i32) -> String {
    let suffix = rand::rng().random_range(SUFFIX_MIN..=SUFFIX_MAX);
    format_transaction_number(at, building_code, room_no, suffix)
}
