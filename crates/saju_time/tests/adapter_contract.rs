//! Shared adapter contract suite.
//!
//! Every `DateAdapter` backend must pass these checks. The helpers are
//! generic over the adapter; the concrete instantiation at the bottom runs
//! them against the chrono backend.

use saju_time::{ChronoTzBackend, DateAdapter};

fn check_zone_invariance<A: DateAdapter>(adapter: &A) {
    let t = adapter.create_utc(2024, 6, 15, 12, 30, 0).unwrap();
    for zone in [
        "Asia/Seoul",
        "America/New_York",
        "Europe/Paris",
        "Pacific/Auckland",
        "UTC",
    ] {
        let rezoned = adapter.set_zone(&t, zone).unwrap();
        assert_eq!(
            adapter.to_millis(&rezoned),
            adapter.to_millis(&t),
            "zone change moved the instant for {zone}"
        );
        assert_eq!(adapter.zone_name(&rezoned), zone);
    }
}

fn check_day_arithmetic_rollover<A: DateAdapter>(adapter: &A) {
    // Leap year: Feb 28 + 1 day lands on Feb 29, + 2 on Mar 1.
    let feb28 = adapter.create_utc(2024, 2, 28, 0, 0, 0).unwrap();
    let feb29 = adapter.plus_days(&feb28, 1);
    assert_eq!((adapter.month(&feb29), adapter.day(&feb29)), (2, 29));
    let mar1 = adapter.plus_days(&feb28, 2);
    assert_eq!((adapter.month(&mar1), adapter.day(&mar1)), (3, 1));

    // Non-leap year: Feb 28 + 1 day lands on Mar 1.
    let feb28 = adapter.create_utc(2023, 2, 28, 0, 0, 0).unwrap();
    let next = adapter.plus_days(&feb28, 1);
    assert_eq!((adapter.month(&next), adapter.day(&next)), (3, 1));

    // Year boundary, both directions.
    let dec31 = adapter.create_utc(2023, 12, 31, 0, 0, 0).unwrap();
    let jan1 = adapter.plus_days(&dec31, 1);
    assert_eq!(
        (adapter.year(&jan1), adapter.month(&jan1), adapter.day(&jan1)),
        (2024, 1, 1)
    );
    let back = adapter.minus_days(&jan1, 1);
    assert_eq!(adapter.to_millis(&back), adapter.to_millis(&dec31));
}

fn check_minute_arithmetic_carry<A: DateAdapter>(adapter: &A) {
    let t = adapter.create_utc(2024, 12, 31, 23, 59, 0).unwrap();
    let rolled = adapter.plus_minutes(&t, 2);
    assert_eq!(
        (
            adapter.year(&rolled),
            adapter.month(&rolled),
            adapter.day(&rolled),
            adapter.hour(&rolled),
            adapter.minute(&rolled),
        ),
        (2025, 1, 1, 0, 1)
    );
}

fn check_millis_round_trip<A: DateAdapter>(adapter: &A) {
    let t = adapter.create_utc(2024, 3, 20, 3, 6, 29).unwrap();
    let ms = adapter.to_millis(&t);
    let back = adapter.from_millis(ms, "Asia/Seoul").unwrap();
    assert_eq!(adapter.to_millis(&back), ms);
    // Seoul sits at UTC+9 with no daylight saving.
    assert_eq!(adapter.hour(&back), 12);
    assert_eq!(adapter.day(&back), 20);
}

fn check_ordering<A: DateAdapter>(adapter: &A) {
    let early = adapter.create_utc(2024, 1, 1, 0, 0, 0).unwrap();
    let late = adapter.plus_minutes(&early, 1);
    assert!(adapter.is_gte(&late, &early));
    assert!(adapter.is_gte(&early, &early));
    assert!(!adapter.is_gte(&early, &late));

    // Ordering compares physical instants, not wall clocks.
    let rezoned = adapter.set_zone(&late, "America/New_York").unwrap();
    assert!(adapter.is_gte(&rezoned, &early));
}

fn check_utc_projection<A: DateAdapter>(adapter: &A) {
    let t = adapter.create_utc(2024, 8, 1, 15, 0, 0).unwrap();
    let seoul = adapter.set_zone(&t, "Asia/Seoul").unwrap();
    let utc = adapter.to_utc(&seoul);
    assert_eq!(adapter.hour(&utc), 15);
    assert_eq!(adapter.to_millis(&utc), adapter.to_millis(&t));
}

fn check_iso_rendering<A: DateAdapter>(adapter: &A) {
    let t = adapter.create_utc(2024, 3, 20, 3, 6, 0).unwrap();
    let iso = adapter.to_iso(&t);
    assert!(iso.starts_with("2024-03-20T03:06:00"), "got {iso}");
}

#[test]
fn chrono_backend_zone_invariance() {
    check_zone_invariance(&ChronoTzBackend);
}

#[test]
fn chrono_backend_day_arithmetic() {
    check_day_arithmetic_rollover(&ChronoTzBackend);
}

#[test]
fn chrono_backend_minute_carry() {
    check_minute_arithmetic_carry(&ChronoTzBackend);
}

#[test]
fn chrono_backend_millis_round_trip() {
    check_millis_round_trip(&ChronoTzBackend);
}

#[test]
fn chrono_backend_ordering() {
    check_ordering(&ChronoTzBackend);
}

#[test]
fn chrono_backend_utc_projection() {
    check_utc_projection(&ChronoTzBackend);
}

#[test]
fn chrono_backend_iso_rendering() {
    check_iso_rendering(&ChronoTzBackend);
}
