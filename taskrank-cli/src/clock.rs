//! Today's date in the configured timezone. Only the date is used.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

pub fn parse_tz(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// Calendar date of `instant` as seen in `tz`.
pub fn date_in(instant: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    Ok(instant.with_timezone(&parse_tz(tz)?).date_naive())
}

/// `explicit` when given, otherwise the current date in `tz`.
pub fn resolve_today(explicit: Option<NaiveDate>, tz: &str) -> Result<NaiveDate> {
    match explicit {
        Some(d) => Ok(d),
        None => date_in(Utc::now(), tz),
    }
}
