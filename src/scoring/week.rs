use chrono::{DateTime, Duration, Utc};

use crate::config::{FIRST_WEEK, LAST_WEEK};

/// Maps a timestamp to an NFL week in [1, 18].
///
/// `season_start` is the Tuesday cutover anchor before the first kickoff,
/// so every week rolls over at the same weekday and hour. Timestamps
/// before the anchor count as week 1; everything past week 18 clamps.
pub fn week_number(now: DateTime<Utc>, season_start: DateTime<Utc>) -> u32 {
    if now < season_start {
        return FIRST_WEEK;
    }

    let days_since_start = (now - season_start).num_days();
    let week = (days_since_start / 7 + 1) as u32;
    week.clamp(FIRST_WEEK, LAST_WEEK)
}

/// Tuesday cutover opening the given week.
pub fn week_start(week: u32, season_start: DateTime<Utc>) -> DateTime<Utc> {
    let week = week.clamp(FIRST_WEEK, LAST_WEEK);
    season_start + Duration::days(7 * (week as i64 - 1))
}

/// Exclusive end of the given week, i.e. the next Tuesday cutover.
pub fn week_end(week: u32, season_start: DateTime<Utc>) -> DateTime<Utc> {
    week_start(week, season_start) + Duration::days(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 2, 7, 0, 0).unwrap()
    }

    #[test]
    fn test_week_number_first_week() {
        assert_eq!(week_number(anchor(), anchor()), 1);
        // Thursday night opener
        let opener = Utc.with_ymd_and_hms(2025, 9, 4, 23, 0, 0).unwrap();
        assert_eq!(week_number(opener, anchor()), 1);
        // Sunday slate of week 1
        let sunday = Utc.with_ymd_and_hms(2025, 9, 7, 17, 0, 0).unwrap();
        assert_eq!(week_number(sunday, anchor()), 1);
    }

    #[test]
    fn test_week_number_cutover_is_tuesday() {
        // Monday night of week 1 still belongs to week 1
        let monday = Utc.with_ymd_and_hms(2025, 9, 9, 3, 0, 0).unwrap();
        assert_eq!(week_number(monday, anchor()), 1);
        // One hour past the Tuesday 07:00 cutover
        let tuesday = Utc.with_ymd_and_hms(2025, 9, 9, 8, 0, 0).unwrap();
        assert_eq!(week_number(tuesday, anchor()), 2);
    }

    #[test]
    fn test_week_number_clamps() {
        let before = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(week_number(before, anchor()), 1);
        let long_after = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(week_number(long_after, anchor()), 18);
    }

    #[test]
    fn test_week_number_monotonic() {
        let mut last = 0;
        for day in 0..200 {
            let t = anchor() + Duration::days(day) + Duration::hours(3);
            let week = week_number(t, anchor());
            assert!(week >= last);
            assert!((1..=18).contains(&week));
            last = week;
        }
    }

    #[test]
    fn test_week_window() {
        let start = week_start(3, anchor());
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 9, 16, 7, 0, 0).unwrap());
        assert_eq!(week_end(3, anchor()), start + Duration::days(7));
        // A timestamp inside the window maps back to the same week
        assert_eq!(week_number(start + Duration::days(4), anchor()), 3);
    }
}
