//! Weekday vocabulary, weekday filter and start-date resolution.
//!
//! One immutable table maps Monday=0 … Sunday=6 to the short Italian names used
//! by the front-end. Both the filter vocabulary and calendar arithmetic index it.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::warn;

/// Monday-first weekday names. Index = `Weekday::num_days_from_monday()`.
pub const WEEKDAY_NAMES: [&str; 7] = ["Lun", "Mar", "Mer", "Gio", "Ven", "Sab", "Dom"];

/// Index (Monday=0) of a weekday name, if it belongs to the vocabulary.
pub fn weekday_index(name: &str) -> Option<usize> {
    WEEKDAY_NAMES.iter().position(|&n| n == name.trim())
}

/// Weekday index (Monday=0) of a calendar date.
pub fn date_weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date_weekday_index(date)]
}

// ────────────────────────────────────────────────────────────────────────────
// Filter
// ────────────────────────────────────────────────────────────────────────────

/// Set of weekdays eligible for study. An empty filter admits every day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayFilter {
    /// Bit `i` set ⇔ weekday `i` (Monday=0) is allowed.
    mask: u8,
    /// True when the caller named at least one weekday, known or not.
    restricted: bool,
}

impl WeekdayFilter {
    /// Admits every weekday.
    #[cfg(test)]
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from weekday names. Unknown names are logged and never
    /// match, but they still make the filter non-empty.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut filter = Self {
            mask: 0,
            restricted: !names.is_empty(),
        };
        for name in names {
            match weekday_index(name.as_ref()) {
                Some(idx) => filter.mask |= 1 << idx,
                None => warn!(weekday = name.as_ref(), "Ignoring unknown weekday name"),
            }
        }
        filter
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    pub fn allows(&self, date: NaiveDate) -> bool {
        !self.restricted || self.mask & (1 << date_weekday_index(date)) != 0
    }

    /// 0-based target-day indices in `[0, target_days)` whose calendar date
    /// (`start + i` days) is allowed, in ascending order.
    pub fn eligible_days(&self, start: NaiveDate, target_days: usize) -> Vec<usize> {
        start
            .iter_days()
            .take(target_days)
            .enumerate()
            .filter(|(_, date)| self.allows(*date))
            .map(|(i, _)| i)
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Start date
// ────────────────────────────────────────────────────────────────────────────

/// Start date anchoring target column 0, and whether it had to be defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartDate {
    pub date: NaiveDate,
    pub defaulted: bool,
}

/// Parses an ISO calendar date, ignoring any time portion after `T` or a space.
pub fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Resolves the caller's start date. Absent or unparsable input falls back to `today`.
pub fn resolve_start_date(raw: Option<&str>, today: NaiveDate) -> StartDate {
    match raw.map(|r| (r, parse_start_date(r))) {
        Some((_, Some(date))) => StartDate {
            date,
            defaulted: false,
        },
        Some((r, None)) => {
            warn!(start_date = r, %today, "Unparsable start date, using today");
            StartDate {
                date: today,
                defaulted: true,
            }
        }
        None => StartDate {
            date: today,
            defaulted: true,
        },
    }
}
