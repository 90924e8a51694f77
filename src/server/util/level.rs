//! XP curve shared by message & voice leveling.
//!
//! Reaching level 1 costs 100 XP. Every further level costs `floor(100 * 1.1^level)`
//! where `level` is the level being left.
//!
//! All sums saturate at `i64::MAX`, so the curve is total for any input.

/// Highest level a member can be set to from the dashboard.
pub const MAX_LEVEL: i32 = 1_000;

/// Highest XP total a member can be set to from the dashboard.
pub const MAX_XP: i64 = 1_000_000_000_000_000;

/// XP needed to advance from `level` to `level + 1`.
///
/// Saturates at `i64::MAX` once the curve leaves the `i64` range.
pub fn xp_to_next_level(level: i32) -> i64 {
    // Float to int casts saturate
    (100.0 * 1.1_f64.powf(f64::from(level))).floor() as i64
}

/// Total XP required to reach `level` from zero.
pub fn xp_for_level(level: i32) -> i64 {
    let mut total: i64 = 0;
    for step in 0..level.max(0) {
        total = total.saturating_add(xp_to_next_level(step));
        if total == i64::MAX {
            break;
        }
    }
    total
}

/// Level reached with `xp` total experience.
pub fn calculate_level(xp: i64) -> i32 {
    let mut level = 0;
    let mut total: i64 = 0;

    while let Some(next) = total.checked_add(xp_to_next_level(level)) {
        if next > xp {
            break;
        }
        total = next;
        level += 1;
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_zero() {
        assert_eq!(calculate_level(0), 0);
        assert_eq!(calculate_level(99), 0);
    }

    #[test]
    fn first_level_costs_one_hundred() {
        assert_eq!(calculate_level(100), 1);
        // Level 2 needs another floor(100 * 1.1) = 110
        assert_eq!(calculate_level(209), 1);
        assert_eq!(calculate_level(210), 2);
    }

    #[test]
    fn cumulative_totals_match_curve() {
        assert_eq!(xp_for_level(0), 0);
        assert_eq!(xp_for_level(1), 100);
        assert_eq!(xp_for_level(2), 210);
        assert_eq!(xp_for_level(3), 331);
    }

    #[test]
    fn extreme_values_terminate() {
        let top = calculate_level(i64::MAX);
        assert!(top > 0);
        assert_eq!(calculate_level(xp_for_level(top)), top);

        assert_eq!(xp_to_next_level(i32::MAX), i64::MAX);
        assert_eq!(xp_for_level(i32::MAX), i64::MAX);
    }

    #[test]
    fn dashboard_limits_stay_on_curve() {
        let level = calculate_level(MAX_XP);
        assert!(xp_for_level(level) <= MAX_XP);
        assert!(xp_for_level(level + 1) > MAX_XP);
        assert_eq!(xp_for_level(MAX_LEVEL), i64::MAX);
    }

    #[test]
    fn level_is_inverse_of_totals() {
        for level in 0..30 {
            assert_eq!(calculate_level(xp_for_level(level)), level);
            if level > 0 {
                assert_eq!(calculate_level(xp_for_level(level) - 1), level - 1);
            }
        }
    }
}
