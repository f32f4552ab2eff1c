//! Date/time parsing keyed on the input length.
//!
//! The layout is chosen purely from the number of characters in the token,
//! so a token of a known length in the wrong shape only fails once parsed.

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

use super::ScalarKind;
use crate::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    Time,
    Date,
    OffsetTime,
    DateTime,
    OffsetDateTime,
    Unmatched,
}

impl Layout {
    pub(crate) fn for_input(raw: &str) -> Self {
        match raw.chars().count() {
            8 => Self::Time,
            10 => Self::Date,
            14 => Self::OffsetTime,
            19 => Self::DateTime,
            25 => Self::OffsetDateTime,
            _ => Self::Unmatched,
        }
    }

    pub(crate) const fn format(self) -> &'static str {
        match self {
            Self::Time => "%H:%M:%S",
            Self::Date => "%Y-%m-%d",
            Self::OffsetTime => "%H:%M:%S %z",
            Self::DateTime => "%Y-%m-%d %H:%M:%S",
            Self::OffsetDateTime => "%Y-%m-%d %H:%M:%S %z",
            Self::Unmatched => "",
        }
    }

    // An unmatched layout still demands a date so that even an empty token
    // fails when the parsed fields are resolved.
    const fn has_date(self) -> bool {
        !matches!(self, Self::Time | Self::OffsetTime)
    }

    const fn has_time(self) -> bool {
        !matches!(self, Self::Date | Self::Unmatched)
    }

    const fn has_offset(self) -> bool {
        matches!(self, Self::OffsetTime | Self::OffsetDateTime)
    }
}

pub(crate) fn parse_datetime(raw: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    let layout = Layout::for_input(raw);
    let fail = |source| DecodeError::format(raw, source);

    let mut parsed = Parsed::new();
    parse(&mut parsed, raw, StrftimeItems::new(layout.format())).map_err(fail)?;

    let date = if layout.has_date() {
        parsed.to_naive_date().map_err(fail)?
    } else {
        NaiveDate::from_ymd_opt(0, 1, 1)
            .ok_or_else(|| DecodeError::conversion(raw, ScalarKind::DateTime))?
    };
    let time = if layout.has_time() {
        parsed.to_naive_time().map_err(fail)?
    } else {
        NaiveTime::default()
    };
    let offset = if layout.has_offset() {
        parsed.to_fixed_offset().map_err(fail)?
    } else {
        FixedOffset::east_opt(0)
            .ok_or_else(|| DecodeError::conversion(raw, ScalarKind::DateTime))?
    };

    date.and_time(time)
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| DecodeError::conversion(raw, ScalarKind::DateTime))
}
