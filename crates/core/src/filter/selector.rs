//! Filter selectors for category and calendar month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expense::Category;

/// Errors from parsing selector input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// Month selector is not `YYYY-MM`.
    #[error("invalid month selector: {0} (expected YYYY-MM)")]
    InvalidMonth(String),
}

/// Category selector: everything, one category, or an explicitly-filtered
/// unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelector {
    /// Match every record.
    All,
    /// Match records of exactly this category.
    Only(Category),
    /// An explicitly-filtered unrecognized name. Matches nothing, by the
    /// exact-match query semantics.
    Unrecognized,
}

impl CategorySelector {
    /// Parses selector input. Missing, empty, or `"all"` selects everything.
    #[must_use]
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            None | Some("" | "all") => Self::All,
            Some(name) => Category::from_name(name).map_or(Self::Unrecognized, Self::Only),
        }
    }

    /// Returns true when the given category passes this selector.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
            Self::Unrecognized => false,
        }
    }
}

/// A calendar year-month pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
}

impl YearMonth {
    /// Parses a `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::InvalidMonth` for anything that is not a
    /// valid year-month pair.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let invalid = || SelectorError::InvalidMonth(input.to_string());

        let (year, month) = input.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }

    /// Derives the year-month of a calendar date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns true when the date falls inside this calendar month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Month selector: everything or one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthSelector {
    /// Match every record.
    All,
    /// Match records dated within this calendar month.
    Month(YearMonth),
}

impl MonthSelector {
    /// Parses selector input. Missing, empty, or `"all"` selects everything;
    /// anything else must be a valid `YYYY-MM` pair.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::InvalidMonth` for malformed input. This is an
    /// explicit validation channel; malformed selectors are never silently
    /// ignored.
    pub fn parse(input: Option<&str>) -> Result<Self, SelectorError> {
        match input {
            None | Some("" | "all") => Ok(Self::All),
            Some(s) => YearMonth::parse(s).map(Self::Month),
        }
    }

    /// Returns true when the given date passes this selector.
    #[must_use]
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Month(ym) => ym.contains(date),
        }
    }
}
