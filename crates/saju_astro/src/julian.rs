//! Julian Day ↔ civil calendar conversion.
//!
//! Gregorian calendar only; the century correction term is applied
//! unconditionally. Fractional days carry the time of day.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date to Julian Day.
///
/// `day_fraction` is the day of month plus the fractional time of day,
/// e.g. 1.5 for noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_fraction: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor()
        + day_fraction
        + b
        - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        assert!((calendar_to_jd(2000, 1, 1.5) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn known_dates() {
        // 1999 Jan 1.0 and 1987 Jan 27.0, standard almanac values.
        assert!((calendar_to_jd(1999, 1, 1.0) - 2_451_179.5).abs() < 1e-9);
        assert!((calendar_to_jd(1987, 1, 27.0) - 2_446_822.5).abs() < 1e-9);
    }

    #[test]
    fn january_uses_previous_year_branch() {
        // Jan/Feb route through (year - 1, month + 12); consecutive days
        // across the year boundary must differ by exactly one day.
        let dec31 = calendar_to_jd(2023, 12, 31.0);
        let jan1 = calendar_to_jd(2024, 1, 1.0);
        assert!((jan1 - dec31 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn leap_day_continuity() {
        let feb29 = calendar_to_jd(2024, 2, 29.0);
        let mar1 = calendar_to_jd(2024, 3, 1.0);
        assert!((mar1 - feb29 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centuries_at_epoch() {
        assert!(julian_centuries(J2000_JD).abs() < 1e-12);
        assert!((julian_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-12);
    }
}
