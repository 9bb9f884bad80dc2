//! Timer Rules
//!
//! Deadline computation for the three feed cases. Reductions are stored in
//! hours; everything here works in unix seconds.

/// Full round duration granted on a first feed or a challenge: 24 hours.
pub const ROUND_DURATION: i64 = 24 * 60 * 60;

/// The deadline never lands closer than this to the feed that set it: 1 hour.
pub const MIN_TIMER_FLOOR: i64 = 60 * 60;

pub const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Largest configurable reduction. Anything above this could drive the
/// timer to (or past) the floor at configuration time, so the catalog
/// setter rejects it outright: (24h − 1h) / 1h = 23.
pub const MAX_TIMER_REDUCTION_HOURS: u64 =
    ((ROUND_DURATION - MIN_TIMER_FLOOR) / SECONDS_PER_HOUR) as u64;

/// Deadline for a first feed or a challenge: the full duration, with the
/// item's reduction ignored entirely.
pub fn full_deadline(now: i64) -> i64 {
    now + ROUND_DURATION
}

/// Deadline when the current leader re-feeds: full duration minus the
/// item's reduction, clamped so the result is never earlier than
/// `now + MIN_TIMER_FLOOR`.
pub fn reduced_deadline(now: i64, reduction_hours: u64) -> i64 {
    let reduced = now + ROUND_DURATION - reduction_hours as i64 * SECONDS_PER_HOUR;
    reduced.max(now + MIN_TIMER_FLOOR)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn max_reduction_is_twenty_three_hours() {
        assert_eq!(MAX_TIMER_REDUCTION_HOURS, 23);
    }

    #[test]
    fn full_deadline_is_a_day_out() {
        assert_eq!(full_deadline(NOW), NOW + 24 * 3600);
    }

    #[test]
    fn reduced_deadline_subtracts_whole_hours() {
        assert_eq!(reduced_deadline(NOW, 5), NOW + 19 * 3600);
        assert_eq!(reduced_deadline(NOW, 13), NOW + 11 * 3600);
    }

    #[test]
    fn zero_reduction_grants_the_full_duration() {
        assert_eq!(reduced_deadline(NOW, 0), full_deadline(NOW));
    }

    #[test]
    fn reduction_clamps_at_the_floor() {
        // 23 hours lands exactly on the floor; anything deeper clamps to it.
        assert_eq!(reduced_deadline(NOW, 23), NOW + MIN_TIMER_FLOOR);
        assert_eq!(reduced_deadline(NOW, 24), NOW + MIN_TIMER_FLOOR);
        assert_eq!(reduced_deadline(NOW, 1_000), NOW + MIN_TIMER_FLOOR);
    }
}
