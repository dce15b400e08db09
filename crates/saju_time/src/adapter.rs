//! The date adapter contract.
//!
//! Higher layers treat instants as opaque values: every read and every
//! piece of arithmetic goes through an adapter. Implementations must keep
//! two invariants that the contract suite checks:
//!
//! - zone changes never move the physical instant:
//!   `to_millis(set_zone(t, z)) == to_millis(t)` for every valid `z`
//! - day and minute arithmetic is calendar-correct, carrying across month,
//!   year, and leap-year boundaries

use crate::error::TimeError;

/// Capability contract over an opaque zone-aware instant type.
pub trait DateAdapter {
    /// The backend's instant representation. Never constructed or taken
    /// apart outside adapter operations.
    type Instant: Clone + std::fmt::Debug + PartialEq;

    /// Calendar year of the instant in its own zone.
    fn year(&self, t: &Self::Instant) -> i32;
    /// Calendar month, 1-12.
    fn month(&self, t: &Self::Instant) -> u32;
    /// Day of month, 1-31.
    fn day(&self, t: &Self::Instant) -> u32;
    /// Hour of day, 0-23.
    fn hour(&self, t: &Self::Instant) -> u32;
    /// Minute, 0-59.
    fn minute(&self, t: &Self::Instant) -> u32;
    /// Second, 0-59 (leap seconds are not represented).
    fn second(&self, t: &Self::Instant) -> u32;

    /// IANA identifier of the instant's zone.
    fn zone_name(&self, t: &Self::Instant) -> String;

    /// The instant `minutes` later.
    fn plus_minutes(&self, t: &Self::Instant, minutes: i64) -> Self::Instant;

    /// The instant `days` later.
    fn plus_days(&self, t: &Self::Instant, days: i64) -> Self::Instant;

    /// The instant `days` earlier.
    fn minus_days(&self, t: &Self::Instant, days: i64) -> Self::Instant {
        self.plus_days(t, -days)
    }

    /// The same instant expressed in UTC.
    fn to_utc(&self, t: &Self::Instant) -> Self::Instant;

    /// The same instant expressed in another zone.
    fn set_zone(&self, t: &Self::Instant, zone: &str) -> Result<Self::Instant, TimeError>;

    /// ISO-8601 rendering with offset.
    fn to_iso(&self, t: &Self::Instant) -> String;

    /// Milliseconds since the Unix epoch.
    fn to_millis(&self, t: &Self::Instant) -> i64;

    /// Instant at an epoch offset, expressed in `zone`.
    fn from_millis(&self, millis: i64, zone: &str) -> Result<Self::Instant, TimeError>;

    /// Instant at a UTC civil date/time.
    fn create_utc(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self::Instant, TimeError>;

    /// Whether `a` is at or after `b` on the physical timeline.
    fn is_gte(&self, a: &Self::Instant, b: &Self::Instant) -> bool;
}
