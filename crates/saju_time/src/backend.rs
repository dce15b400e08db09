//! Concrete adapter over chrono + chrono-tz.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};
use chrono_tz::Tz;
use once_cell::sync::OnceCell;

use crate::adapter::DateAdapter;
use crate::error::TimeError;

/// Process-wide backend instance, created on first use.
static BACKEND: OnceCell<ChronoTzBackend> = OnceCell::new();

/// The memoized shared backend. Construction happens once per process;
/// every operation afterwards is a pure function over the instant.
pub fn backend() -> &'static ChronoTzBackend {
    BACKEND.get_or_init(|| ChronoTzBackend)
}

/// `DateAdapter` implementation carrying instants as `DateTime<Tz>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzBackend;

impl ChronoTzBackend {
    fn parse_zone(zone: &str) -> Result<Tz, TimeError> {
        zone.parse::<Tz>()
            .map_err(|_| TimeError::UnknownZone(zone.to_string()))
    }
}

impl DateAdapter for ChronoTzBackend {
    type Instant = DateTime<Tz>;

    fn year(&self, t: &Self::Instant) -> i32 {
        t.year()
    }

    fn month(&self, t: &Self::Instant) -> u32 {
        t.month()
    }

    fn day(&self, t: &Self::Instant) -> u32 {
        t.day()
    }

    fn hour(&self, t: &Self::Instant) -> u32 {
        t.hour()
    }

    fn minute(&self, t: &Self::Instant) -> u32 {
        t.minute()
    }

    fn second(&self, t: &Self::Instant) -> u32 {
        t.second()
    }

    fn zone_name(&self, t: &Self::Instant) -> String {
        t.timezone().name().to_string()
    }

    fn plus_minutes(&self, t: &Self::Instant, minutes: i64) -> Self::Instant {
        *t + Duration::minutes(minutes)
    }

    fn plus_days(&self, t: &Self::Instant, days: i64) -> Self::Instant {
        *t + Duration::days(days)
    }

    fn to_utc(&self, t: &Self::Instant) -> Self::Instant {
        t.with_timezone(&Tz::UTC)
    }

    fn set_zone(&self, t: &Self::Instant, zone: &str) -> Result<Self::Instant, TimeError> {
        let tz = Self::parse_zone(zone)?;
        Ok(t.with_timezone(&tz))
    }

    fn to_iso(&self, t: &Self::Instant) -> String {
        t.to_rfc3339()
    }

    fn to_millis(&self, t: &Self::Instant) -> i64 {
        t.timestamp_millis()
    }

    fn from_millis(&self, millis: i64, zone: &str) -> Result<Self::Instant, TimeError> {
        let tz = Self::parse_zone(zone)?;
        tz.timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| TimeError::InvalidCivilTime(format!("epoch millis {millis}")))
    }

    fn create_utc(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self::Instant, TimeError> {
        Tz::UTC
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .ok_or_else(|| {
                TimeError::InvalidCivilTime(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z"
                ))
            })
    }

    fn is_gte(&self, a: &Self::Instant, b: &Self::Instant) -> bool {
        a >= b
    }
}
