use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::dates::format::{DateFormats, partial_to_date};
use crate::domain::errors::{DomainError, DomainResult};

/// A date of which only some parts may be known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    pub fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    pub fn year(year: i32) -> Self {
        Self::new(Some(year), None, None)
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(Some(year), Some(month), Some(day))
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    fn validate(&self) -> DomainResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        partial_to_date(self.year, self.month, self.day).map(|_| ())
    }
}

/// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; an empty string is the empty
/// date.
impl FromStr for PartialDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        let invalid = || DomainError::Validation(format!("invalid partial date: {s:?}"));

        let mut parts = s.split('-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(invalid)?;
        let mut next = || parts.next().map(|p| p.parse::<u32>().map_err(|_| invalid())).transpose();
        let month = next()?;
        let day = next()?;
        if next()?.is_some() {
            return Err(invalid());
        }

        let date = Self::new(Some(year), month, day);
        date.validate()?;
        Ok(date)
    }
}

/// From/until span with partially defined dates. At least one year is
/// required; an optional free text replaces the formatted display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    from: PartialDate,
    until: PartialDate,
    text: Option<String>,
    from_date: NaiveDate,
    until_date: NaiveDate,
}

impl Runtime {
    pub fn new(from: PartialDate, until: PartialDate, text: Option<String>) -> DomainResult<Self> {
        if from.year.is_none() && until.year.is_none() {
            return Err(DomainError::Validation(
                "please enter either a from or an until date year".into(),
            ));
        }
        from.validate()?;
        until.validate()?;

        let from_date = match from.year {
            Some(year) => partial_to_date(Some(year), from.month, from.day)?,
            None => NaiveDate::MIN,
        };
        let until_date = match until.year {
            Some(year) => {
                let month = until.month.unwrap_or(12);
                let day = match until.day {
                    Some(day) => day,
                    None => last_day_of_month(year, month)?,
                };
                partial_to_date(Some(year), Some(month), Some(day))?
            }
            None => NaiveDate::MAX,
        };
        if from_date > until_date {
            return Err(DomainError::Validation(
                "until date must not be before from date".into(),
            ));
        }

        Ok(Self {
            from,
            until,
            text: text.filter(|t| !t.trim().is_empty()),
            from_date,
            until_date,
        })
    }

    pub fn from(&self) -> PartialDate {
        self.from
    }

    pub fn until(&self) -> PartialDate {
        self.until
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Earliest day covered; `NaiveDate::MIN` when open towards the past.
    pub fn from_date(&self) -> NaiveDate {
        self.from_date
    }

    /// Last day covered; `NaiveDate::MAX` when open towards the future.
    pub fn until_date(&self) -> NaiveDate {
        self.until_date
    }

    pub fn from_display(&self, formats: &DateFormats) -> DomainResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        formats.format_partial_date(self.from.year, self.from.month, self.from.day)
    }

    pub fn until_display(&self, formats: &DateFormats) -> DomainResult<String> {
        if self.text.is_some() {
            return Ok(String::new());
        }
        formats.format_partial_date(self.until.year, self.until.month, self.until.day)
    }

    pub fn runtime_display(&self, formats: &DateFormats) -> DomainResult<String> {
        if self.text.is_none() && self.from.month.is_some() && self.from.day.is_some() {
            let until = self.until.year.map(|_| self.until_date);
            return formats.format_date_range(Some(self.from_date), until);
        }

        let from = self.from_display(formats)?;
        if self.from_date == self.until_date {
            return Ok(from);
        }
        let until = self.until_display(formats)?;
        Ok(match (from.is_empty(), until.is_empty()) {
            (false, false) => format!("{from}{}{until}", formats.range_separator),
            (false, true) => from,
            _ => until,
        })
    }
}

fn last_day_of_month(year: i32, month: u32) -> DomainResult<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| chrono::Datelike::day(&last))
        .ok_or_else(|| DomainError::Validation(format!("invalid month: {year:04}-{month:02}")))
}
