/// Flat points a correct pick earns before the spread adjustment.
pub const BASE_POINTS: f64 = 10.0;

/// Potential points for picking the side carrying `spread_for_side`.
///
/// Favorites carry a negative spread and earn less than the base;
/// underdogs carry a positive spread and earn more. Stored values keep
/// full precision so totals sum without drift.
pub fn potential_points(spread_for_side: f64) -> f64 {
    BASE_POINTS + spread_for_side
}

/// One-decimal rounding for presentation only.
pub fn display_points(points: f64) -> f64 {
    (points * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_potential_points_favorite_and_underdog() {
        assert_eq!(potential_points(-3.0), 7.0);
        assert_eq!(potential_points(3.0), 13.0);
        assert_eq!(potential_points(0.0), 10.0);
    }

    #[test]
    fn test_potential_points_keeps_half_point_lines() {
        assert_eq!(potential_points(-6.5), 3.5);
        assert_eq!(potential_points(9.5), 19.5);
    }

    #[test]
    fn test_display_points_rounds_to_one_decimal() {
        assert_eq!(display_points(7.0), 7.0);
        assert_eq!(display_points(3.45), 3.5);
        assert_eq!(display_points(19.44), 19.4);
    }
}
