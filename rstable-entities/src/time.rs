use std::{fmt, str::FromStr};

use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

/// A point in time, always kept in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid timestamp '{0}'")]
pub struct TimestampParseError(String);

impl Timestamp {
    /// The current time with millisecond precision.
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        Self(now.replace_millisecond(now.millisecond()).unwrap_or(now))
    }

    pub fn from_secs(secs: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(secs).ok().map(Self)
    }

    pub fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Short, human readable representation, e.g. `01/06/2024 14:30`.
    pub fn to_short_string(self) -> String {
        let format = format_description!("[day]/[month]/[year] [hour]:[minute]");
        self.0
            .format(format)
            .unwrap_or_else(|_| self.as_secs().to_string())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.to_offset(time::UtcOffset::UTC))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    /// Accepts RFC 3339 timestamps and plain dates (`YYYY-MM-DD`),
    /// the latter meaning midnight UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(dt.into());
        }
        Date::parse(s, format_description!("[year]-[month]-[day]"))
            .map(|date| date.midnight().assume_utc().into())
            .map_err(|_| TimestampParseError(s.to_owned()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{}", self.as_secs()),
        }
    }
}
