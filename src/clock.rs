use crate::error::{AdScoreError, Result};
use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;

pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Source of the reference instant for a scoring pass.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Backs `--at` and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AdScoreError::ConfigParse(format!("unsupported scoring.timezone: {name}")))
}

pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| AdScoreError::InvalidReferenceInstant(format!("{raw}: {e}")))
}

/// Calendar day before `instant`, as seen from `tz`.
pub fn irrelevant_since(instant: DateTime<Utc>, tz: Tz) -> Result<NaiveDate> {
    let local_day = instant.with_timezone(&tz).date_naive();
    local_day
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| AdScoreError::InvalidReferenceInstant(instant.to_rfc3339()))
}
