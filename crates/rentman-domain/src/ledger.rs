//! Rent-total derivation.

/// Derived rent total for a rental-details write.
///
/// The total is recomputed as `rent + maintenance` only when both components
/// are non-zero on this particular write; otherwise the prior stored total is
/// carried forward unchanged. This mirrors the long-standing behavior the
/// front-end depends on.
pub fn rent_total(prior_total: i64, rent: i64, maintenance: i64) -> i64 {
    if rent != 0 && maintenance != 0 {
        rent + maintenance
    } else {
        prior_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_sum_rent_and_maintenance_when_both_present() {
        assert_eq!(rent_total(0, 8000, 500), 8500);
        assert_eq!(rent_total(9999, 8000, 500), 8500);
    }

    #[test]
    fn should_keep_prior_total_when_rent_is_zero() {
        assert_eq!(rent_total(8500, 0, 500), 8500);
    }

    #[test]
    fn should_keep_prior_total_when_maintenance_is_zero() {
        assert_eq!(rent_total(8500, 8000, 0), 8500);
    }

    #[test]
    fn should_keep_prior_total_when_both_are_zero() {
        assert_eq!(rent_total(123, 0, 0), 123);
    }
}
