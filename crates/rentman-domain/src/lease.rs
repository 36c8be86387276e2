//! Lease-date derivation.

use chrono::{Days, Months, NaiveDate};

/// Default lease end for an 11-month agreement: `start + 11 months − 1 day`.
///
/// Used when an allotment is created without an explicit end date.
pub fn default_end_date(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_months(Months::new(11))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(start)
}
